use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::grid::{GoalMap, Grid};
use crate::map_formatter::MapFormatter;
use crate::moves::{Move, Moves};
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

#[derive(Clone)]
pub struct Level {
    pub map: GoalMap,
    pub(crate) state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayErr {
    pub index: usize,
    pub mov: Move,
}

impl Display for ReplayErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Illegal move {} at index {}", self.mov, self.index)
    }
}

impl Error for ReplayErr {}

impl Level {
    pub(crate) fn new(map: GoalMap, state: State) -> Self {
        Level { map, state }
    }

    pub fn player_pos(&self) -> Pos {
        self.state.player_pos
    }

    pub fn box_positions(&self) -> &[Pos] {
        &self.state.boxes
    }

    pub fn is_solved(&self) -> bool {
        self.state.boxes == self.map.goals
    }

    /// Plays the moves one by one from the initial state.
    ///
    /// Fails on the first move that walks into a wall, pushes a box into a wall or another box,
    /// or doesn't match its push flag.
    pub fn replay(&self, moves: &Moves) -> Result<Level, ReplayErr> {
        let mut state = self.state.clone();
        for (index, &mov) in moves.iter().enumerate() {
            state = state
                .apply(&self.map, mov)
                .ok_or(ReplayErr { index, mov })?;
        }
        Ok(Level::new(self.map.clone(), state))
    }

    pub fn format_solution<'a>(
        &'a self,
        moves: &'a Moves,
        include_steps: bool,
    ) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.map, &self.state, moves, include_steps)
    }

    fn xsb(&self) -> MapFormatter<'_> {
        MapFormatter::new(&self.map.grid, Some(&self.state))
    }
}

impl Grid for Level {
    fn width(&self) -> i32 {
        self.map.grid.width()
    }

    fn height(&self) -> i32 {
        self.map.grid.height()
    }

    fn is_wall(&self, pos: Pos) -> bool {
        self.map.is_wall(pos)
    }

    fn is_target(&self, pos: Pos) -> bool {
        self.map.is_goal(pos)
    }

    fn player_pos(&self) -> Option<Pos> {
        Some(self.state.player_pos)
    }

    fn boxes(&self) -> Vec<Pos> {
        self.state.boxes.clone()
    }

    fn targets(&self) -> Vec<Pos> {
        self.map.goals.clone()
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
