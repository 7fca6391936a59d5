use fnv::FnvHashSet;

use crate::state::State;

/// Every state generated during one search run.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    seen: FnvHashSet<State>,
}

impl TranspositionTable {
    // don't preallocate for huge budgets that most searches never get near
    const MAX_INITIAL_CAPACITY: usize = 1 << 16;

    pub fn with_capacity(max_states: usize) -> Self {
        let mut seen = FnvHashSet::default();
        seen.reserve(max_states.min(Self::MAX_INITIAL_CAPACITY));
        TranspositionTable { seen }
    }

    /// Returns `true` if the state wasn't there before.
    pub fn try_insert(&mut self, state: &State) -> bool {
        if self.seen.contains(state) {
            return false;
        }
        self.seen.insert(state.clone())
    }

    pub fn contains(&self, state: &State) -> bool {
        self.seen.contains(state)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;

    #[test]
    fn inserting_twice() {
        let mut table = TranspositionTable::with_capacity(10);
        let state = State::new(Pos::new(1, 1), vec![Pos::new(2, 1), Pos::new(3, 3)]);
        assert!(!table.contains(&state));
        assert!(table.try_insert(&state));
        assert_eq!(table.len(), 1);
        assert!(!table.try_insert(&state));
        assert_eq!(table.len(), 1);
        assert!(table.contains(&state));

        // same boxes, different player
        let moved = State::new(Pos::new(1, 2), vec![Pos::new(3, 3), Pos::new(2, 1)]);
        assert!(table.try_insert(&moved));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut table = TranspositionTable::with_capacity(1);
        for x in 0..1000 {
            assert!(table.try_insert(&State::new(Pos::new(x, 0), vec![])));
        }
        assert_eq!(table.len(), 1000);
        assert!(table.contains(&State::new(Pos::new(999, 0), vec![])));
    }
}
