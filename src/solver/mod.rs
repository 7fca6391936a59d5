mod assignment;
mod backtracking;
mod corrals;
mod deadlocks;
mod heuristic;
mod ida_star;
mod macro_moves;
mod node;
mod open_set;
mod preprocessing;
mod static_data;
mod stats;
mod transposition;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Instant;

use log::{debug, info};

use crate::config::{Algorithm, Limit, Mode, SolverConfig};
use crate::data::Pos;
use crate::grid::Grid;
use crate::moves::{Label, Solution};
use crate::state::State;
use crate::vec2d::Vec2d;
use crate::Solve;

use self::backtracking::{backtrack_labels, backward_to_forward, replay};
use self::corrals::best_corral;
use self::deadlocks::DeadlockDetector;
use self::heuristic::INFINITE;
use self::macro_moves::macro_successors;
use self::node::{NodeArena, SearchNode};
use self::open_set::OpenSet;

pub use self::static_data::{LevelErr, StaticData};
pub use self::stats::Stats;
pub use self::transposition::TranspositionTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverErr {
    InvalidLevel(LevelErr),
    Unsolvable(Stats),
    ResourceExceeded(Limit, Stats),
}

impl SolverErr {
    /// Search counters up to the point the solver gave up, `None` if it never started.
    pub fn stats(&self) -> Option<&Stats> {
        match self {
            SolverErr::InvalidLevel(_) => None,
            SolverErr::Unsolvable(stats) | SolverErr::ResourceExceeded(_, stats) => Some(stats),
        }
    }
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolverErr::InvalidLevel(err) => write!(f, "Invalid level: {}", err),
            SolverErr::Unsolvable(_) => write!(f, "No solution"),
            SolverErr::ResourceExceeded(limit, _) => write!(f, "Gave up: {}", limit),
        }
    }
}

impl Error for SolverErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolverErr::InvalidLevel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LevelErr> for SolverErr {
    fn from(err: LevelErr) -> Self {
        SolverErr::InvalidLevel(err)
    }
}

pub struct SolverOk {
    pub solution: Solution,
    pub stats: Stats,
    pub algorithm: Algorithm,
    pub mode: Mode,
}

impl SolverOk {
    /// Rough 0-100 rating from the solution length and how hard the search had to work.
    pub fn difficulty(&self) -> u8 {
        let length = (self.solution.move_cnt() as f64 / 4.0).min(50.0);
        let effort = ((self.stats.explored() as f64 + 1.0).log10() * 50.0 / 7.0).min(50.0);
        (length + effort).round() as u8
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}): {} moves, {} pushes",
            self.algorithm,
            self.mode,
            self.solution.move_cnt(),
            self.solution.push_cnt()
        )?;
        write!(f, "{:?}", self.stats)
    }
}

impl<G: Grid + ?Sized> Solve for G {
    fn solve(&self, config: &SolverConfig) -> Result<SolverOk, SolverErr> {
        let sd = StaticData::new(self)?;
        solve(&sd, config)
    }
}

pub fn solve(sd: &StaticData, config: &SolverConfig) -> Result<SolverOk, SolverErr> {
    solve_with_progress(sd, config, |_| {})
}

/// Like `solve` but calls `progress` every `config.progress_interval` expansions.
pub fn solve_with_progress<F>(
    sd: &StaticData,
    config: &SolverConfig,
    mut progress: F,
) -> Result<SolverOk, SolverErr>
where
    F: FnMut(&Stats),
{
    debug!("Search called: {} {}", config.algorithm, config.mode);
    Search::new(sd, *config, &mut progress).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Solved,
    Exhausted,
    TimedOut,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Phase::Idle => write!(f, "idle"),
            Phase::Running => write!(f, "running"),
            Phase::Solved => write!(f, "solved"),
            Phase::Exhausted => write!(f, "exhausted"),
            Phase::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Why a search loop ended without a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Exhausted,
    Limit(Limit),
}

struct Search<'a, 'p> {
    sd: &'a StaticData,
    config: SolverConfig,
    root: State,
    /// Where the boxes have to end up.
    goals: Vec<Pos>,
    /// Backward only - where the player may end so the real start can walk there.
    start_area: Option<Vec2d<bool>>,
    detector: DeadlockDetector<'a>,
    table: TranspositionTable,
    nodes: NodeArena,
    stats: Stats,
    started: Instant,
    phase: Phase,
    /// IDA* only - the smallest `f` that was over the threshold.
    next_threshold: Option<u32>,
    progress: &'p mut dyn FnMut(&Stats),
}

impl<'a, 'p> Search<'a, 'p> {
    fn new(sd: &'a StaticData, config: SolverConfig, progress: &'p mut dyn FnMut(&Stats)) -> Self {
        let (root, goals, start_area) = match config.mode {
            Mode::Forward => (sd.initial.clone(), sd.map.goals.clone(), None),
            Mode::Backward => (
                backward_root(sd),
                sd.initial.boxes.clone(),
                Some(sd.initial.reachable_area(&sd.map)),
            ),
        };
        Search {
            sd,
            config,
            root,
            goals,
            start_area,
            detector: DeadlockDetector::new(sd),
            table: TranspositionTable::default(),
            nodes: NodeArena::default(),
            stats: Stats::new(),
            started: Instant::now(),
            phase: Phase::Idle,
            next_threshold: None,
            progress,
        }
    }

    fn run(mut self) -> Result<SolverOk, SolverErr> {
        self.set_phase(Phase::Running);
        let result = match self.config.algorithm {
            Algorithm::IdaStar => ida_star::search(&mut self),
            _ => self.search_open_set(),
        };
        self.stats.elapsed = self.started.elapsed();
        self.stats.patterns = self.detector.pattern_cnt();

        match result {
            Ok(index) => {
                self.set_phase(Phase::Solved);
                Ok(self.finish(index))
            }
            Err(Stop::Exhausted) => {
                self.set_phase(Phase::Exhausted);
                Err(SolverErr::Unsolvable(self.stats))
            }
            Err(Stop::Limit(limit)) => {
                self.set_phase(Phase::TimedOut);
                info!("Search stopped: {}", limit);
                Err(SolverErr::ResourceExceeded(limit, self.stats))
            }
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("Solver {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    fn search_open_set(&mut self) -> Result<usize, Stop> {
        let root = self.add_root()?;
        let mut open = OpenSet::new(self.config.algorithm);
        open.push(root, &self.nodes[root]);
        self.drain(&mut open, None)
    }

    /// Starts from scratch with only the root in the node arena and the table.
    fn add_root(&mut self) -> Result<usize, Stop> {
        self.nodes.clear();
        self.table = TranspositionTable::with_capacity(self.config.max_states);

        let state = self.root.clone();
        self.stats.add_created(0);
        if self.config.mode == Mode::Forward && self.detector.is_deadlock(&state.boxes) {
            debug!("Initial state is a deadlock");
            self.stats.add_deadlock();
            return Err(Stop::Exhausted);
        }
        let h = self.heuristic(&state);
        if h >= INFINITE {
            debug!("Boxes can't be matched to goals");
            self.stats.add_deadlock();
            return Err(Stop::Exhausted);
        }
        self.table.try_insert(&state);
        Ok(self.nodes.push(SearchNode::root(state, h)))
    }

    /// Expands nodes until a goal is dequeued. Children over `threshold` are left out.
    fn drain(&mut self, open: &mut OpenSet, threshold: Option<u32>) -> Result<usize, Stop> {
        while let Some(index) = open.pop() {
            if self.is_goal(&self.nodes[index].state) {
                debug!("Solved, backtracking path");
                return Ok(index);
            }
            self.check_limits()?;

            let depth = self.nodes[index].depth;
            if self.stats.add_visited(depth) {
                debug!("Visited new depth: {} ({} open)", depth, open.len());
            }
            self.report_progress();

            let children = self.expand(index, threshold);
            open.push_children(&children, &self.nodes);
        }
        Err(Stop::Exhausted)
    }

    fn check_limits(&self) -> Result<(), Stop> {
        if self.stats.explored() >= self.config.max_states {
            return Err(Stop::Limit(Limit::States(self.config.max_states)));
        }
        if let Some(limit) = self.config.time_limit {
            if self.started.elapsed() >= limit {
                return Err(Stop::Limit(Limit::Time(limit)));
            }
        }
        Ok(())
    }

    fn report_progress(&mut self) {
        if self.stats.explored() % self.config.progress_interval.max(1) == 0 {
            self.stats.elapsed = self.started.elapsed();
            (self.progress)(&self.stats);
        }
    }

    /// Adds the children worth exploring to the arena, returns them most preferred first.
    ///
    /// Deadlocks go first, then states seen before, then states over the threshold.
    /// If nothing is left and no push could ever help, the boxes become a deadlock pattern.
    fn expand(&mut self, index: usize, threshold: Option<u32>) -> Vec<usize> {
        let (state, g, depth) = {
            let node = &self.nodes[index];
            (node.state.clone(), node.g, node.depth)
        };

        let mut children = Vec::new();
        for (child_state, label, cost) in self.successors(&state) {
            let moves_boxes = match &label {
                Label::Move(mov) => mov.is_push,
                Label::Macro(_) => true,
            };
            if self.config.mode == Mode::Forward
                && moves_boxes
                && self.detector.is_deadlock(&child_state.boxes)
            {
                self.stats.add_deadlock();
                continue;
            }
            if self.table.contains(&child_state) {
                self.stats.add_duplicate();
                continue;
            }

            let h = self.heuristic(&child_state);
            if h >= INFINITE {
                self.stats.add_deadlock();
                continue;
            }
            let child_g = g + cost;
            if let Some(threshold) = threshold {
                let f = child_g + h;
                if f > threshold {
                    self.next_threshold = Some(self.next_threshold.map_or(f, |t| t.min(f)));
                    continue;
                }
            }

            self.table.try_insert(&child_state);
            self.stats.add_created(depth + 1);
            children.push(SearchNode {
                state: child_state,
                parent: Some(index),
                label: Some(label),
                g: child_g,
                h,
                depth: depth + 1,
            });
        }

        if children.is_empty()
            && self.config.mode == Mode::Forward
            && self.detector.is_stuck(&state.boxes)
        {
            debug!("Dead end at depth {}: {:?}", depth, state.boxes);
            self.detector.add_deadlock_pattern(&state.boxes);
            self.stats.add_dead_end();
        }

        // created in reverse so that among equal priorities the preferred child is the newest
        let mut indices: Vec<usize> = children
            .into_iter()
            .rev()
            .map(|child| self.nodes.push(child))
            .collect();
        indices.reverse();
        indices
    }

    /// Every edge out of `state` with its cost, most preferred first.
    fn successors(&self, state: &State) -> Vec<(State, Label, u32)> {
        let map = &self.sd.map;
        if self.config.mode == Mode::Backward {
            return state
                .pull_successors(map)
                .into_iter()
                .map(|(new_state, mov)| (new_state, Label::Move(mov), 1))
                .collect();
        }

        let mut successors = Vec::new();
        let primitive = state.successors(map);
        if !self.config.macro_moves && !self.config.corral_ordering {
            successors.extend(
                primitive
                    .into_iter()
                    .map(|(new_state, mov)| (new_state, Label::Move(mov), 1)),
            );
            return successors;
        }

        let reachable = state.reachable_area(map);
        if self.config.macro_moves {
            for succ in macro_successors(self.sd, state, &reachable) {
                successors.push((succ.state, Label::Macro(succ.mov), succ.cost));
            }
        }

        let corral = if self.config.corral_ordering {
            best_corral(map, state, &reachable)
        } else {
            None
        };
        let ordered = match corral {
            Some(corral) => {
                let player_pos = state.player_pos;
                let (corral_pushes, rest): (Vec<_>, Vec<_>) =
                    primitive.into_iter().partition(|(_, mov)| {
                        mov.is_push && corral.has_frontier_box(player_pos + mov.dir)
                    });
                let (pushes, steps): (Vec<_>, Vec<_>) =
                    rest.into_iter().partition(|(_, mov)| mov.is_push);
                corral_pushes.into_iter().chain(pushes).chain(steps).collect()
            }
            None => primitive,
        };
        successors.extend(
            ordered
                .into_iter()
                .map(|(new_state, mov)| (new_state, Label::Move(mov), 1)),
        );
        successors
    }

    fn heuristic(&self, state: &State) -> u32 {
        if self.config.algorithm.uses_heuristic() {
            heuristic::estimate(&self.sd.distances, &self.goals, state)
        } else {
            0
        }
    }

    fn is_goal(&self, state: &State) -> bool {
        if state.boxes != self.goals {
            return false;
        }
        match &self.start_area {
            None => true,
            Some(start_area) => start_area[state.player_pos],
        }
    }

    fn finish(self, index: usize) -> SolverOk {
        debug!("Search ended with {} nodes", self.nodes.len());
        let labels = backtrack_labels(&self.nodes, index);
        let solution = match self.config.mode {
            Mode::Forward => Solution::new(labels),
            Mode::Backward => {
                let end = self.nodes[index].state.player_pos;
                let moves = backward_to_forward(&self.sd.map, &self.sd.initial, end, &labels);
                Solution::new(moves.into_iter().map(Label::Move).collect())
            }
        };

        let end = replay(&self.sd.map, &self.sd.initial, &solution.moves());
        assert!(
            end.boxes == self.sd.map.goals,
            "Solution {} doesn't put every box on a goal",
            solution
        );

        let solution = if self.config.expand_macros {
            solution.expand_macros()
        } else {
            solution
        };
        info!(
            "Found solution with {} moves, {} pushes",
            solution.move_cnt(),
            solution.push_cnt()
        );
        SolverOk {
            solution,
            stats: self.stats,
            algorithm: self.config.algorithm,
            mode: self.config.mode,
        }
    }
}

/// Boxes on every goal, the player where the level starts
/// or on the first free cell if a box is there now.
fn backward_root(sd: &StaticData) -> State {
    let boxes = sd.map.goals.clone();
    let start = sd.initial.player_pos;
    let player_pos = if boxes.binary_search(&start).is_err() {
        start
    } else {
        sd.map
            .grid
            .positions()
            .find(|&pos| !sd.map.is_wall(pos) && boxes.binary_search(&pos).is_err())
            .unwrap_or(start)
    };
    State::new(player_pos, boxes)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    use crate::config::ALGORITHMS;
    use crate::level::Level;
    use crate::moves::MacroKind;

    const CORRIDOR: &str = r"
#######
#@ $ .#
#######
";

    const TWO_BOXES: &str = r"
########
#      #
# $ $  #
#  ## .#
#@    .#
########
";

    fn parse(level: &str) -> Level {
        level.parse().unwrap()
    }

    fn primitive(algorithm: Algorithm) -> SolverConfig {
        SolverConfig::default()
            .algorithm(algorithm)
            .macro_moves(false)
            .corral_ordering(false)
    }

    fn assert_solves(level: &Level, ok: &SolverOk) {
        let end = level.replay(&ok.solution.moves()).unwrap();
        assert!(end.is_solved(), "{:?}", ok);
    }

    #[test]
    fn trivial() {
        let level = parse("#@*#");
        for &algorithm in &ALGORITHMS {
            let ok = level.solve(&primitive(algorithm)).unwrap();
            assert_eq!(ok.solution.move_cnt(), 0);
            assert_eq!(ok.stats.explored(), 0);
            assert_eq!(ok.difficulty(), 0);
        }
    }

    #[test]
    fn corridor_all_algorithms() {
        let level = parse(CORRIDOR);
        for &algorithm in &ALGORITHMS {
            for &macros in &[false, true] {
                let config = SolverConfig::default()
                    .algorithm(algorithm)
                    .macro_moves(macros);
                let ok = level.solve(&config).unwrap();
                assert_solves(&level, &ok);
                assert_eq!(ok.solution.to_string(), "rRR", "{}", algorithm);
            }
        }
    }

    #[test]
    fn bfs_is_shortest() {
        let level = parse(TWO_BOXES);
        let bfs = level.solve(&primitive(Algorithm::BreadthFirst)).unwrap();
        assert_solves(&level, &bfs);
        for &algorithm in &ALGORITHMS {
            let ok = level.solve(&primitive(algorithm)).unwrap();
            assert_solves(&level, &ok);
            assert!(ok.solution.move_cnt() >= bfs.solution.move_cnt());
        }
    }

    #[test]
    fn deterministic() {
        let level = parse(TWO_BOXES);
        let config = SolverConfig::default();
        let first = level.solve(&config).unwrap();
        let second = level.solve(&config).unwrap();
        assert_eq!(first.solution, second.solution);
        assert_eq!(first.stats.explored(), second.stats.explored());
    }

    #[test]
    fn corner_box_is_unsolvable() {
        let level = parse(
            r"
######
#$   #
#  @.#
######
",
        );
        for &algorithm in &ALGORITHMS {
            match level.solve(&primitive(algorithm)) {
                Err(SolverErr::Unsolvable(stats)) => assert_eq!(stats.deadlocks(), 1),
                other => panic!("{}: {:?}", algorithm, other.map(|ok| ok.solution)),
            }
        }
    }

    #[test]
    fn box_along_wall_is_unsolvable() {
        // the box can only ever move along the top wall
        let level = parse(
            r"
#######
#  $  #
#@    #
#    .#
#######
",
        );
        let err = level.solve(&primitive(Algorithm::BreadthFirst)).unwrap_err();
        match err {
            SolverErr::Unsolvable(stats) => assert!(stats.explored() > 0 || stats.deadlocks() > 0),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn state_budget() {
        let level = parse(CORRIDOR);
        let config = primitive(Algorithm::BreadthFirst).max_states(1);
        match level.solve(&config) {
            Err(SolverErr::ResourceExceeded(Limit::States(1), stats)) => {
                assert_eq!(stats.explored(), 1)
            }
            other => panic!("{:?}", other.map(|ok| ok.solution)),
        }
    }

    #[test]
    fn time_budget() {
        let level = parse(TWO_BOXES);
        let config = primitive(Algorithm::BreadthFirst).time_limit(Duration::from_secs(0));
        match level.solve(&config) {
            Err(SolverErr::ResourceExceeded(Limit::Time(_), _)) => {}
            other => panic!("{:?}", other.map(|ok| ok.solution)),
        }
    }

    #[test]
    fn invalid_level() {
        let level = parse("#@$$.#");
        assert_eq!(
            level.solve(&SolverConfig::default()).unwrap_err(),
            SolverErr::InvalidLevel(LevelErr::BoxesGoals { boxes: 2, goals: 1 })
        );
    }

    #[test]
    fn backward() {
        for &text in &[CORRIDOR, TWO_BOXES] {
            let level = parse(text);
            for &algorithm in &[Algorithm::BreadthFirst, Algorithm::AStar, Algorithm::IdaStar] {
                let config = SolverConfig::default()
                    .algorithm(algorithm)
                    .mode(Mode::Backward);
                let ok = level.solve(&config).unwrap();
                assert_eq!(ok.mode, Mode::Backward);
                assert_solves(&level, &ok);
            }
        }
    }

    #[test]
    fn keeping_macros() {
        let level = parse(
            r"
##########
#   ######
#@$     .#
#   ######
##########
",
        );
        let config = SolverConfig::default().expand_macros(false);
        let ok = level.solve(&config).unwrap();
        assert_solves(&level, &ok);
        assert!(ok.solution.has_macros(), "{:?}", ok.solution);
        assert_eq!(ok.solution.moves().to_string(), "RRRRRR");

        let expanded = level.solve(&SolverConfig::default()).unwrap();
        assert!(!expanded.solution.has_macros());
        assert_eq!(expanded.solution.moves(), ok.solution.moves());
    }

    #[test]
    fn progress_callback() {
        let level = parse(TWO_BOXES);
        let mut calls = 0;
        let config = primitive(Algorithm::BreadthFirst).progress_interval(1);
        let sd = StaticData::new(&level).unwrap();
        let ok = solve_with_progress(&sd, &config, |stats| {
            calls += 1;
            assert_eq!(stats.explored(), calls);
        })
        .unwrap();
        assert_eq!(calls, ok.stats.explored());
    }

    #[test]
    fn stuck_state_becomes_a_pattern() {
        // the lower box can only go up next to the one in the corner or down into a dead end
        let level = parse(
            r"
######
#*  .#
#@$###
## ###
######
",
        );
        let sd = StaticData::new(&level).unwrap();
        let mut progress = |_: &Stats| {};
        let mut search = Search::new(&sd, primitive(Algorithm::BreadthFirst), &mut progress);
        assert!(!DeadlockDetector::new(&sd).is_deadlock(&sd.initial.boxes));

        assert_eq!(search.search_open_set(), Err(Stop::Exhausted));
        assert_eq!(search.stats.dead_ends(), 1);
        assert!(search.detector.is_deadlock(&sd.initial.boxes));

        for &algorithm in &ALGORITHMS {
            match level.solve(&primitive(algorithm)) {
                Err(SolverErr::Unsolvable(stats)) => {
                    assert_eq!(stats.dead_ends(), 1, "{}", algorithm);
                    assert!(stats.patterns() >= 1, "{}", algorithm);
                }
                other => panic!("{}: {:?}", algorithm, other.map(|ok| ok.solution)),
            }
        }
    }

    // a tunnel below the player, a corral on the left
    const CORRAL_AND_TUNNEL: &str = r"
#######
# ##  #
# $@ .#
###$###
  # #
  # #
  #.#
  ###
";

    fn successor_labels(sd: &StaticData, config: SolverConfig) -> Vec<String> {
        let mut progress = |_: &Stats| {};
        let search = Search::new(sd, config, &mut progress);
        search
            .successors(&sd.initial)
            .into_iter()
            .map(|(_, label, _)| label.to_string())
            .collect()
    }

    #[test]
    fn successor_order() {
        let level = parse(CORRAL_AND_TUNNEL);
        let sd = StaticData::new(&level).unwrap();

        // macros, the corral's box, the other push, the step
        let ordered = successor_labels(&sd, SolverConfig::default());
        assert_eq!(ordered, vec!["[DDD]", "[DDD]", "L", "D", "r"]);

        // without corrals the primitive moves keep the direction order
        let unordered = successor_labels(&sd, SolverConfig::default().corral_ordering(false));
        assert_eq!(unordered, vec!["[DDD]", "[DDD]", "r", "D", "L"]);

        let moves_only = successor_labels(&sd, primitive(Algorithm::AStar));
        assert_eq!(moves_only, vec!["r", "D", "L"]);
    }

    #[test]
    fn depth_first_takes_the_macro_first() {
        let level = parse(CORRAL_AND_TUNNEL);
        let sd = StaticData::new(&level).unwrap();
        let mut progress = |_: &Stats| {};
        let config = SolverConfig::default().algorithm(Algorithm::DepthFirst);
        let mut search = Search::new(&sd, config, &mut progress);

        let root = search.add_root().unwrap();
        let children = search.expand(root, None);
        // the goal room macro ends where the tunnel one does and pushing into the corral is dead
        let labels: Vec<String> = children
            .iter()
            .map(|&index| search.nodes[index].label.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(labels, vec!["[DDD]", "D", "r"]);

        let mut open = OpenSet::new(Algorithm::DepthFirst);
        open.push_children(&children, &search.nodes);
        assert_eq!(open.pop(), Some(children[0]));
        match &search.nodes[children[0]].label {
            Some(Label::Macro(mov)) => assert_eq!(mov.kind, MacroKind::Tunnel),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn shared_static_data() {
        let level = parse(TWO_BOXES);
        let sd = StaticData::new(&level).unwrap();
        let a_star = solve(&sd, &SolverConfig::default()).unwrap();
        let ida_star = solve(&sd, &SolverConfig::default().algorithm(Algorithm::IdaStar)).unwrap();
        assert_solves(&level, &a_star);
        assert_solves(&level, &ida_star);
        assert!(ida_star.stats.iterations() >= 1);
    }
}
