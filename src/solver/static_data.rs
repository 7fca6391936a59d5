use std::error::Error;
use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::data::Pos;
use crate::grid::{GoalMap, Grid};
use crate::state::State;
use crate::vec2d::Vec2d;

use super::heuristic::DistanceTable;
use super::preprocessing::{self, GoalRoom, Tunnel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelErr {
    NoPlayer,
    BoxOnWall(Pos),
    DuplicateBox(Pos),
    UnreachableBoxes,
    UnreachableGoals,
    BoxesGoals { boxes: usize, goals: usize },
}

impl Display for LevelErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelErr::NoPlayer => write!(f, "No player or player inside a wall"),
            LevelErr::BoxOnWall(pos) => write!(f, "Box inside a wall at {:?}", pos),
            LevelErr::DuplicateBox(pos) => write!(f, "Two boxes at {:?}", pos),
            LevelErr::UnreachableBoxes => write!(
                f,
                "Unreachable boxes - some boxes are not on goal but can't be reached"
            ),
            LevelErr::UnreachableGoals => write!(
                f,
                "Unreachable goals - some goals don't have a box but can't be reached"
            ),
            LevelErr::BoxesGoals { boxes, goals } => write!(
                f,
                "Different number of reachable boxes ({}) and goals ({})",
                boxes, goals
            ),
        }
    }
}

impl Error for LevelErr {}

/// Everything derived from the level before searching.
///
/// Immutable once built, so it can be shared by any number of searches on the same level.
#[derive(Debug, Clone)]
pub struct StaticData {
    pub(crate) map: GoalMap,
    pub(crate) initial: State,
    pub(crate) corners: Vec2d<bool>,
    pub(crate) dead_squares: Vec2d<bool>,
    pub(crate) tunnels: Vec<Tunnel>,
    pub(crate) goal_rooms: Vec<GoalRoom>,
    pub(crate) distances: DistanceTable,
}

impl StaticData {
    pub fn new<G: Grid + ?Sized>(grid: &G) -> Result<Self, LevelErr> {
        debug!("Processing level...");
        let raw_map = GoalMap::from_grid(grid);
        let player_pos = grid.player_pos().ok_or(LevelErr::NoPlayer)?;
        if raw_map.is_wall(player_pos) {
            return Err(LevelErr::NoPlayer);
        }

        let mut boxes = grid.boxes();
        boxes.sort();
        for pair in boxes.windows(2) {
            if pair[0] == pair[1] {
                return Err(LevelErr::DuplicateBox(pair[0]));
            }
        }
        if let Some(&pos) = boxes.iter().find(|&&pos| raw_map.is_wall(pos)) {
            return Err(LevelErr::BoxOnWall(pos));
        }

        let reachable = preprocessing::check_reachability(&raw_map.grid, player_pos);

        // boxes already on goals in parts of the level the player can't get to don't matter
        let mut reachable_boxes = Vec::new();
        let mut reachable_goals = Vec::new();
        for &pos in &boxes {
            if reachable[pos] {
                reachable_boxes.push(pos);
            } else if !raw_map.is_goal(pos) {
                return Err(LevelErr::UnreachableBoxes);
            }
        }
        for &pos in raw_map.goals() {
            if reachable[pos] {
                reachable_goals.push(pos);
            } else if boxes.binary_search(&pos).is_err() {
                return Err(LevelErr::UnreachableGoals);
            }
        }
        if reachable_boxes.len() != reachable_goals.len() {
            return Err(LevelErr::BoxesGoals {
                boxes: reachable_boxes.len(),
                goals: reachable_goals.len(),
            });
        }

        let map = GoalMap::new(
            preprocessing::wall_off_unreachable(&raw_map.grid, &reachable),
            reachable_goals,
        );
        let initial = State::new(player_pos, reachable_boxes);

        let corners = preprocessing::find_corners(&map);
        let dead_squares = preprocessing::find_dead_squares(&map);
        let tunnels = preprocessing::find_tunnels(&map);
        let goal_rooms = preprocessing::find_goal_rooms(&map, player_pos);
        let distances = DistanceTable::new(&map);
        debug!(
            "Processed level: {} boxes, {} tunnels, {} goal rooms",
            initial.boxes.len(),
            tunnels.len(),
            goal_rooms.len()
        );

        Ok(StaticData {
            map,
            initial,
            corners,
            dead_squares,
            tunnels,
            goal_rooms,
            distances,
        })
    }

    pub fn map(&self) -> &GoalMap {
        &self.map
    }

    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    pub fn is_corner(&self, pos: Pos) -> bool {
        self.corners.get(pos).cloned().unwrap_or(false)
    }

    pub fn is_dead_square(&self, pos: Pos) -> bool {
        self.dead_squares.get(pos).cloned().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::level::Level;

    fn process(level: &str) -> Result<StaticData, LevelErr> {
        let level: Level = level.parse().unwrap();
        StaticData::new(&level)
    }

    #[test]
    fn unreachable_boxes() {
        let level = r"
########
#@$.#$.#
########
";
        assert_eq!(process(level).unwrap_err(), LevelErr::UnreachableBoxes);
    }

    #[test]
    fn unreachable_goals() {
        let level = r"
########
#@$.#..#
########
";
        assert_eq!(process(level).unwrap_err(), LevelErr::UnreachableGoals);
    }

    #[test]
    fn boxes_goals() {
        let level = r"
#######
#@$$. #
#######
";
        assert_eq!(
            process(level).unwrap_err(),
            LevelErr::BoxesGoals { boxes: 2, goals: 1 }
        );
    }

    #[test]
    fn solved_unreachable_parts_are_ignored() {
        let level = r"
########
#@$.#*.#
#######$
";
        // the last row is never reached - the box there is outside the walls
        assert_eq!(process(level).unwrap_err(), LevelErr::UnreachableBoxes);

        let level = r"
########
#@$.#**#
########
";
        let sd = process(level).unwrap();
        assert_eq!(sd.initial_state().boxes(), &[Pos::new(2, 1)]);
        assert_eq!(sd.map().goals(), &[Pos::new(3, 1)]);
        assert!(sd.map().is_wall(Pos::new(5, 1)));
    }

    #[test]
    fn custom_grid() {
        // anything implementing the trait can be solved, not just parsed levels
        struct Corridor;

        impl Grid for Corridor {
            fn width(&self) -> i32 {
                4
            }
            fn height(&self) -> i32 {
                1
            }
            fn is_wall(&self, pos: Pos) -> bool {
                pos.y != 0 || pos.x < 0 || pos.x >= 4
            }
            fn is_target(&self, pos: Pos) -> bool {
                pos == Pos::new(3, 0)
            }
            fn player_pos(&self) -> Option<Pos> {
                Some(Pos::new(0, 0))
            }
            fn boxes(&self) -> Vec<Pos> {
                vec![Pos::new(1, 0)]
            }
            fn targets(&self) -> Vec<Pos> {
                vec![Pos::new(3, 0)]
            }
        }

        let sd = StaticData::new(&Corridor).unwrap();
        assert_eq!(sd.map().to_string(), "   .\n");
        assert_eq!(sd.tunnels.len(), 1);
    }
}
