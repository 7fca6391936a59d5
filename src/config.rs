use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Greedy,
    AStar,
    IdaStar,
}

pub const ALGORITHMS: [Algorithm; 5] = [
    Algorithm::BreadthFirst,
    Algorithm::DepthFirst,
    Algorithm::Greedy,
    Algorithm::AStar,
    Algorithm::IdaStar,
];

impl Algorithm {
    /// Whether nodes need a heuristic estimate.
    pub fn uses_heuristic(self) -> bool {
        match self {
            Algorithm::BreadthFirst | Algorithm::DepthFirst => false,
            Algorithm::Greedy | Algorithm::AStar | Algorithm::IdaStar => true,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Algorithm::BreadthFirst => write!(f, "bfs"),
            Algorithm::DepthFirst => write!(f, "dfs"),
            Algorithm::Greedy => write!(f, "greedy"),
            Algorithm::AStar => write!(f, "astar"),
            Algorithm::IdaStar => write!(f, "idastar"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Push boxes from the start configuration to the targets.
    Forward,
    /// Pull boxes from the targets back to the start configuration.
    Backward,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Mode::Forward => write!(f, "forward"),
            Mode::Backward => write!(f, "backward"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue(pub String);

impl Display for UnknownValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown value: {}", self.0)
    }
}

impl Error for UnknownValue {}

impl FromStr for Algorithm {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "greedy" => Ok(Algorithm::Greedy),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "idastar" | "ida*" => Ok(Algorithm::IdaStar),
            _ => Err(UnknownValue(s.to_owned())),
        }
    }
}

impl FromStr for Mode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Mode::Forward),
            "backward" => Ok(Mode::Backward),
            _ => Err(UnknownValue(s.to_owned())),
        }
    }
}

/// Which resource bound stopped the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    States(usize),
    Time(Duration),
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Limit::States(max) => write!(f, "more than {} states explored", max),
            Limit::Time(max) => write!(f, "time limit of {} ms", max.as_millis()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub algorithm: Algorithm,
    pub mode: Mode,
    /// Maximum number of expanded states.
    pub max_states: usize,
    pub time_limit: Option<Duration>,
    /// Tunnel and goal room macros (forward mode only).
    pub macro_moves: bool,
    /// Order pushes by corral priority (forward mode only).
    pub corral_ordering: bool,
    /// Return primitive moves only, macros are expanded before returning.
    pub expand_macros: bool,
    /// Call the progress callback every this many expansions.
    pub progress_interval: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            algorithm: Algorithm::AStar,
            mode: Mode::Forward,
            max_states: 1_000_000,
            time_limit: None,
            macro_moves: true,
            corral_ordering: true,
            expand_macros: true,
            progress_interval: 10_000,
        }
    }
}

impl SolverConfig {
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    pub fn time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn macro_moves(mut self, enabled: bool) -> Self {
        self.macro_moves = enabled;
        self
    }

    pub fn corral_ordering(mut self, enabled: bool) -> Self {
        self.corral_ordering = enabled;
        self
    }

    pub fn expand_macros(mut self, enabled: bool) -> Self {
        self.expand_macros = enabled;
        self
    }

    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_names() {
        for &algorithm in &ALGORITHMS {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("backward".parse::<Mode>(), Ok(Mode::Backward));
        assert_eq!(
            "dijkstra".parse::<Algorithm>(),
            Err(UnknownValue("dijkstra".to_owned()))
        );
    }

    #[test]
    fn builder() {
        let config = SolverConfig::default()
            .algorithm(Algorithm::IdaStar)
            .max_states(10)
            .macro_moves(false)
            .progress_interval(0);
        assert_eq!(config.algorithm, Algorithm::IdaStar);
        assert_eq!(config.mode, Mode::Forward);
        assert_eq!(config.max_states, 10);
        assert!(!config.macro_moves);
        assert_eq!(config.progress_interval, 1);
    }
}
