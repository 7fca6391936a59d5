use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// Writes a grid (optionally with a state on top of it) in XSB format.
pub struct MapFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<MapCell>, state: Option<&'a State>) -> Self {
        Self { grid, state }
    }

    fn cell_char(&self, pos: Pos) -> char {
        let (has_box, has_player) = match self.state {
            Some(state) => (state.has_box(pos), state.player_pos == pos),
            None => (false, false),
        };
        match (self.grid[pos], has_box, has_player) {
            (MapCell::Wall, false, false) => '#',
            (MapCell::Wall, ..) => unreachable!("Wall with a box or player at {:?}", pos),
            (MapCell::Empty, false, false) => ' ',
            (MapCell::Empty, true, _) => '$',
            (MapCell::Empty, false, true) => '@',
            (MapCell::Goal, false, false) => '.',
            (MapCell::Goal, true, _) => '*',
            (MapCell::Goal, false, true) => '+',
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height() {
            let row: String = (0..self.grid.width())
                .map(|x| self.cell_char(Pos::new(x, y)))
                .collect();
            // no trailing spaces so the output matches the input level strings
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
