use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Read-only level queries the solver needs.
///
/// Anything that can answer these (a parsed level, a level generator's scratch board)
/// can be solved. Positions outside `width` x `height` must report walls.
pub trait Grid {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn is_wall(&self, pos: Pos) -> bool;
    fn is_target(&self, pos: Pos) -> bool;
    fn player_pos(&self) -> Option<Pos>;
    fn boxes(&self) -> Vec<Pos>;
    fn targets(&self) -> Vec<Pos>;
}

/// Static part of a level as used by the solver - walls and goals, no player or boxes.
#[derive(Clone, PartialEq, Eq)]
pub struct GoalMap {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) goals: Vec<Pos>,
}

impl GoalMap {
    pub(crate) fn new(grid: Vec2d<MapCell>, mut goals: Vec<Pos>) -> Self {
        goals.sort();
        GoalMap { grid, goals }
    }

    /// Copies the static cells of any `Grid`.
    pub fn from_grid<G: Grid + ?Sized>(grid: &G) -> Self {
        let rows: Vec<Vec<MapCell>> = (0..grid.height())
            .map(|y| {
                (0..grid.width())
                    .map(|x| {
                        let pos = Pos::new(x, y);
                        if grid.is_wall(pos) {
                            MapCell::Wall
                        } else if grid.is_target(pos) {
                            MapCell::Goal
                        } else {
                            MapCell::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        let goals = grid.targets().into_iter().filter(|&pos| !grid.is_wall(pos)).collect();
        GoalMap::new(Vec2d::from_rows(&rows, MapCell::Wall), goals)
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub fn cell(&self, pos: Pos) -> MapCell {
        self.grid.get(pos).cloned().unwrap_or(MapCell::Wall)
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.cell(pos) == MapCell::Wall
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.cell(pos) == MapCell::Goal
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state))
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.grid, None))
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
