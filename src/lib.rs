// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

pub mod config;
pub mod grid;
pub mod level;
pub mod map_formatter;
pub mod moves;
pub mod solution_formatter;
pub mod solver;

mod data;
mod fs;
mod parser;
mod state;
mod vec2d;

use std::error::Error;

use crate::config::SolverConfig;
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub use crate::data::{Dir, MapCell, Pos, DIRECTIONS};
pub use crate::parser::ParserErr;
pub use crate::state::State;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: &SolverConfig) -> Result<SolverOk, SolverErr>;
}
