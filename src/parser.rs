use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos};
use crate::grid::GoalMap;
use crate::level::Level;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(x, y) => write!(f, "Invalid cell at pos: [{}, {}]", x, y),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// What a single character puts on its cell.
#[derive(Debug, Clone, Copy)]
struct Tile {
    cell: MapCell,
    has_box: bool,
    has_player: bool,
}

fn tile(c: char) -> Option<Tile> {
    let (cell, has_box, has_player) = match c {
        '#' => (MapCell::Wall, false, false),
        ' ' | '-' | '_' => (MapCell::Empty, false, false),
        '.' => (MapCell::Goal, false, false),
        '$' | 'b' => (MapCell::Empty, true, false),
        '*' | 'B' => (MapCell::Goal, true, false),
        '@' | 'p' => (MapCell::Empty, false, true),
        '+' | 'P' => (MapCell::Goal, false, true),
        _ => return None,
    };
    Some(Tile {
        cell,
        has_box,
        has_player,
    })
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
///
/// Rows are separated by newlines or `|`.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let mut rows = Vec::new();
    let mut goals = Vec::new();
    let mut boxes = Vec::new();
    let mut player_pos = None;

    for (y, line) in level.split(|c| c == '\n' || c == '|').enumerate() {
        let line = line.trim_end_matches('\r');
        let mut row = Vec::with_capacity(line.len());
        for (x, c) in line.chars().enumerate() {
            let tile = tile(c).ok_or(ParserErr::Pos(x, y))?;
            let pos = Pos::new(x as i32, y as i32);
            if tile.has_player {
                if player_pos.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player_pos = Some(pos);
            }
            if tile.has_box {
                boxes.push(pos);
            }
            if tile.cell == MapCell::Goal {
                goals.push(pos);
            }
            row.push(tile.cell);
        }
        rows.push(row);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    let grid = Vec2d::from_rows(&rows, MapCell::Empty);

    Ok(Level::new(
        GoalMap::new(grid, goals),
        State::new(player_pos, boxes),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::NoPlayer);
    }

    #[test]
    fn fail_no_player() {
        let level = r"
#####
# $.#
#####
";
        assert_failure(level, ParserErr::NoPlayer);
    }

    #[test]
    fn fail_multiple_players() {
        let level = r"
#####
#@$+#
#####
";
        assert_failure(level, ParserErr::MultiplePlayers);
    }

    #[test]
    fn fail_pos() {
        let level = r"
#####
#@X.#
#####
";
        assert_failure(level, ParserErr::Pos(2, 1));
    }

    #[test]
    fn simplest() {
        let level = r"
#####
#@$.#
#####
";
        let parsed = assert_success(level);
        assert_eq!(parsed.player_pos(), Pos::new(1, 1));
        assert_eq!(parsed.box_positions(), &[Pos::new(2, 1)]);
        assert_eq!(parsed.map.goals(), &[Pos::new(3, 1)]);
    }

    #[test]
    fn single_line() {
        let parsed: Level = "#####|#@$.#|#####".parse().unwrap();
        assert_eq!(parsed.to_string(), "#####\n#@$.#\n#####\n");
    }

    #[test]
    fn windows_line_endings() {
        let parsed: Level = "#####\r\n#+$ #\r\n#####\r\n".parse().unwrap();
        assert_eq!(parsed.player_pos(), Pos::new(1, 1));
        assert_eq!(parsed.map.goals(), &[Pos::new(1, 1)]);
    }

    #[test]
    fn corner_boxes() {
        let level = r"
*###*
#@$.#
*###*
";
        let parsed = assert_success(level);
        assert_eq!(parsed.box_positions().len(), 5);
        assert_eq!(parsed.map.goals().len(), 5);
    }

    #[test]
    fn original_1() {
        let level = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
";
        let parsed = assert_success(level);
        assert_eq!(parsed.box_positions().len(), 6);
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        assert_eq!(input_level.parse::<Level>().unwrap_err(), expected_err);
    }

    fn assert_success(input_level: &str) -> Level {
        let level: Level = input_level.parse().unwrap();
        assert_eq!(level.to_string(), input_level.trim_start_matches('\n'));
        level
    }
}
