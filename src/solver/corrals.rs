use std::cmp::Reverse;

use crate::data::Pos;
use crate::grid::GoalMap;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Floor the player can't reach, fenced off by boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Corral {
    pub(crate) area: Vec<Pos>,
    /// Boxes next to the area, sorted.
    pub(crate) frontier: Vec<Pos>,
    pub(crate) frontier_on_goals: usize,
}

impl Corral {
    pub(crate) fn has_frontier_box(&self, pos: Pos) -> bool {
        self.frontier.binary_search(&pos).is_ok()
    }

    fn priority(&self) -> (Reverse<usize>, usize, usize) {
        (
            Reverse(self.frontier_on_goals),
            self.frontier.len(),
            self.area.len(),
        )
    }

    fn merge(&mut self, other: Corral, map: &GoalMap) {
        self.area.extend(other.area);
        self.area.sort();
        self.frontier.extend(other.frontier);
        self.frontier.sort();
        self.frontier.dedup();
        self.frontier_on_goals = self.frontier.iter().filter(|&&pos| map.is_goal(pos)).count();
    }
}

/// Corrals whose every frontier box the player can get to, merged when they share a box.
pub(crate) fn find_corrals(map: &GoalMap, state: &State, reachable: &Vec2d<bool>) -> Vec<Corral> {
    let is_reachable = |pos: Pos| reachable.get(pos).cloned().unwrap_or(false);

    let mut seen = map.grid.scratchpad();
    let mut corrals: Vec<Corral> = Vec::new();
    for seed in map.grid.positions() {
        if seen[seed] || is_reachable(seed) || !state.is_free(map, seed) {
            continue;
        }

        seen[seed] = true;
        let mut area = vec![seed];
        let mut frontier = Vec::new();
        let mut i = 0;
        while i < area.len() {
            let cur = area[i];
            i += 1;
            for &next in &cur.neighbors() {
                if state.has_box(next) {
                    frontier.push(next);
                } else if !map.is_wall(next) && !seen[next] {
                    seen[next] = true;
                    area.push(next);
                }
            }
        }
        frontier.sort();
        frontier.dedup();

        let qualifies = !frontier.is_empty()
            && frontier
                .iter()
                .all(|pos| pos.neighbors().iter().any(|&n| is_reachable(n)));
        if !qualifies {
            continue;
        }

        area.sort();
        let mut corral = Corral {
            frontier_on_goals: frontier.iter().filter(|&&pos| map.is_goal(pos)).count(),
            area,
            frontier,
        };

        let (sharing, rest): (Vec<Corral>, Vec<Corral>) = corrals
            .into_iter()
            .partition(|other| other.frontier.iter().any(|&pos| corral.has_frontier_box(pos)));
        for other in sharing {
            corral.merge(other, map);
        }
        corrals = rest;
        corrals.push(corral);
    }
    corrals
}

/// The corral whose boxes should be pushed first.
pub(crate) fn best_corral(map: &GoalMap, state: &State, reachable: &Vec2d<bool>) -> Option<Corral> {
    pick_best(find_corrals(map, state, reachable))
}

fn pick_best(corrals: Vec<Corral>) -> Option<Corral> {
    corrals.into_iter().min_by_key(Corral::priority)
}
