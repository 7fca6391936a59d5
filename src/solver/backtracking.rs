use std::collections::VecDeque;
use std::hash::Hash;

use fnv::FnvHashMap;

use crate::data::Pos;
use crate::grid::GoalMap;
use crate::moves::{Label, Move, Moves};
use crate::state::State;

use super::node::NodeArena;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position
// pull = a backward search move that drags a box behind the player

/// Labels along the path from the root to `index`.
pub(crate) fn backtrack_labels(nodes: &NodeArena, index: usize) -> Vec<Label> {
    let mut labels = Vec::new();
    let mut cur = &nodes[index];
    while let Some(parent) = cur.parent {
        labels.push(
            cur.label
                .clone()
                .expect("Only the root can be without a label"),
        );
        cur = &nodes[parent];
    }
    labels.reverse();
    labels
}

/// Turns a backward path into forward moves.
///
/// The backward search starts with the boxes on targets and ends at the original
/// box positions with the player at `backward_end`. Played in reverse, every pull
/// becomes a push in the opposite direction. The player first walks from the real
/// start to where the backward search ended. Steps after the last push are dropped.
pub(crate) fn backward_to_forward(
    map: &GoalMap,
    initial: &State,
    backward_end: Pos,
    backward_labels: &[Label],
) -> Moves {
    let mut moves = player_steps(map, initial, initial.player_pos, backward_end)
        .expect("Backward search ended where the player can't walk");

    let mut reversed: Vec<Move> = backward_labels
        .iter()
        .rev()
        .map(|label| match label {
            Label::Move(mov) => Move::new(mov.dir.inverse(), mov.is_push),
            Label::Macro(_) => unreachable!("Backward search doesn't use macros"),
        })
        .collect();
    // walking back to where the backward search started is pointless
    let last_push = reversed.iter().rposition(|mov| mov.is_push).map_or(0, |i| i + 1);
    reversed.truncate(last_push);

    for mov in reversed {
        moves.add(mov);
    }
    moves
}

/// Shortest walk between two cells without pushing anything, `None` if there is none.
pub(crate) fn player_steps(map: &GoalMap, state: &State, src_pos: Pos, dest_pos: Pos) -> Option<Moves> {
    if src_pos == dest_pos {
        return Some(Moves::default());
    }

    let mut prevs = FnvHashMap::default();
    prevs.insert(src_pos, src_pos);

    let mut to_visit = VecDeque::new();
    to_visit.push_back(src_pos);

    'bfs: loop {
        let player_pos = to_visit.pop_front()?;

        for &new_player_pos in &player_pos.neighbors() {
            if !state.is_free(map, new_player_pos) || prevs.contains_key(&new_player_pos) {
                continue;
            }

            prevs.insert(new_player_pos, player_pos);
            if new_player_pos == dest_pos {
                break 'bfs;
            }
            to_visit.push_back(new_player_pos);
        }
    }

    let positions = backtrack_prevs(&prevs, dest_pos);

    let mut moves = Moves::default();
    for pair in positions.windows(2) {
        moves.add(Move::new(pair[0].dir_to(pair[1]), false));
    }
    Some(moves)
}

/// Follows `prevs` back to the item that points to itself.
pub(crate) fn backtrack_prevs<T: Clone + Eq + Hash>(prevs: &FnvHashMap<T, T>, last: T) -> Vec<T> {
    let mut items = Vec::new();
    let mut cur = last;
    loop {
        let prev = prevs[&cur].clone();
        let done = prev == cur;
        items.push(cur);
        if done {
            items.reverse();
            return items;
        }
        cur = prev;
    }
}

/// Plays `moves` from `initial`, panics if any of them is illegal.
pub(crate) fn replay(map: &GoalMap, initial: &State, moves: &Moves) -> State {
    let mut state = initial.clone();
    for (i, &mov) in moves.iter().enumerate() {
        state = match state.apply(map, mov) {
            Some(next) => next,
            None => panic!("Move {} ({}) of solution {} is illegal", i, mov, moves),
        };
    }
    state
}
