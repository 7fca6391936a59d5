use std::fmt::{self, Debug, Display, Formatter};
use std::time::Duration;

use separator::Separatable;

/// Counters of one search run, the per-depth ones indexed by the number of labels from the root.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: usize,
    deadlocks: usize,
    dead_ends: usize,
    pub(crate) patterns: usize,
    pub(crate) iterations: usize,
    pub(crate) elapsed: Duration,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    /// States generated, including the root.
    pub fn generated(&self) -> usize {
        self.created_states.iter().sum()
    }

    /// States taken from the open set and expanded.
    pub fn explored(&self) -> usize {
        self.visited_states.iter().sum()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicate_states
    }

    /// States thrown away because they can never be solved.
    pub fn deadlocks(&self) -> usize {
        self.deadlocks
    }

    /// Expanded states where no push could ever help, remembered as deadlock patterns.
    pub fn dead_ends(&self) -> usize {
        self.dead_ends
    }

    /// Size of the deadlock pattern cache when the search ended.
    pub fn patterns(&self) -> usize {
        self.patterns
    }

    /// IDA* threshold iterations, 0 for other algorithms.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn created_by_depth(&self) -> &[usize] {
        &self.created_states
    }

    pub fn visited_by_depth(&self) -> &[usize] {
        &self.visited_states
    }

    /// Returns `true` if this is the first state at that depth.
    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    /// Returns `true` if this is the first state at that depth.
    pub(crate) fn add_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self) {
        self.duplicate_states += 1;
    }

    pub(crate) fn add_deadlock(&mut self) {
        self.deadlocks += 1;
    }

    pub(crate) fn add_dead_end(&mut self) {
        self.dead_ends += 1;
    }

    fn add(counts: &mut Vec<usize>, depth: usize) -> bool {
        let mut ret = false;

        // while because some depths might be skipped when all states there were duplicates
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.generated().separated_string())?;
        writeln!(f, "total visited: {}", self.explored().separated_string())?;
        writeln!(f, "duplicates: {}", self.duplicate_states.separated_string())?;
        writeln!(f, "deadlocks: {}", self.deadlocks.separated_string())?;
        writeln!(f, "dead ends: {}", self.dead_ends.separated_string())?;
        writeln!(f, "patterns: {}", self.patterns.separated_string())?;
        writeln!(f, "iterations: {}", self.iterations)?;
        writeln!(f, "elapsed: {} ms", self.elapsed.as_millis())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.generated();
        let visited = self.explored();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "States visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates: {}", self.duplicate_states.separated_string())?;
        writeln!(f, "Deadlocks pruned: {}", self.deadlocks.separated_string())?;
        writeln!(f, "Dead ends learned: {}", self.dead_ends.separated_string())?;
        writeln!(f, "Deadlock patterns: {}", self.patterns.separated_string())?;
        if self.iterations > 0 {
            writeln!(f, "Iterations: {}", self.iterations)?;
        }
        writeln!(f, "Time: {} ms", self.elapsed.as_millis())?;
        writeln!(f)?;

        writeln!(f, "Depth / created states:")?;
        writeln!(f, "|                   Depth / visited states:")?;
        for i in 0..self.created_states.len() {
            // created_states is the longest vec
            let depth = format!("{}: ", i);
            let visited = self.visited_states.get(i).cloned().unwrap_or(0);
            writeln!(
                f,
                "{0:<5}{1:<15}{0:<5}{2:<15}",
                depth,
                self.created_states[i].separated_string(),
                visited.separated_string()
            )?;
        }
        Ok(())
    }
}
