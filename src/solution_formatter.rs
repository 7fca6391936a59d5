use std::fmt::{self, Debug, Display, Formatter};

use crate::grid::GoalMap;
use crate::moves::Moves;
use crate::state::State;

/// Prints the level after every push (or every move with `include_steps`).
pub struct SolutionFormatter<'a> {
    map: &'a GoalMap,
    initial_state: &'a State,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        map: &'a GoalMap,
        initial_state: &'a State,
        moves: &'a Moves,
        include_steps: bool,
    ) -> Self {
        Self {
            map,
            initial_state,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.map.format_with_state(self.initial_state))?;
        let mut last_state = self.initial_state.clone();
        for (i, &mov) in self.moves.iter().enumerate() {
            let new_state = match last_state.apply(self.map, mov) {
                Some(state) => state,
                None => return writeln!(f, "Illegal move {} at index {}", mov, i),
            };
            if mov.is_push || self.include_steps {
                writeln!(f, "{}", self.map.format_with_state(&new_state))?;
            }
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Dir;
    use crate::level::Level;
    use crate::moves::{Move, Moves};

    #[test]
    fn pushes_only() {
        let level: Level = r"
######
#@$ .#
######
"
        .parse()
        .unwrap();
        let moves = Moves::new(vec![Move::new(Dir::Right, true), Move::new(Dir::Right, true)]);

        let expected = r"
######
#@$ .#
######

######
# @$.#
######

######
#  @*#
######

"
        .trim_start_matches('\n');
        assert_eq!(level.format_solution(&moves, false).to_string(), expected);
    }
}
