use crate::data::{Pos, DIRECTIONS};
use crate::grid::{GoalMap, Grid};
use crate::moves::Move;
use crate::vec2d::Vec2d;

/// Player position plus box positions.
///
/// Boxes are kept sorted so two states with the same set of boxes are equal
/// and hash the same. How a state was reached is tracked by the search nodes, not here.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub(crate) player_pos: Pos,
    pub(crate) boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { player_pos, boxes }
    }

    /// The start configuration of a level, `None` if it has no player.
    pub fn initial<G: Grid + ?Sized>(grid: &G) -> Option<State> {
        grid.player_pos().map(|player_pos| State::new(player_pos, grid.boxes()))
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    pub(crate) fn is_free(&self, map: &GoalMap, pos: Pos) -> bool {
        !map.is_wall(pos) && !self.has_box(pos)
    }

    /// Copy with the box at `from` moved to `to` and the player at `player_pos`.
    pub(crate) fn with_box_moved(&self, player_pos: Pos, from: Pos, to: Pos) -> State {
        let boxes = self
            .boxes
            .iter()
            .map(|&b| if b == from { to } else { b })
            .collect();
        State::new(player_pos, boxes)
    }

    /// Cells the player can walk to without pushing anything.
    pub(crate) fn reachable_area(&self, map: &GoalMap) -> Vec2d<bool> {
        let mut reachable = map.grid.scratchpad();
        reachable[self.player_pos] = true;
        let mut to_visit = vec![self.player_pos];

        while let Some(cur) = to_visit.pop() {
            for &new_pos in &cur.neighbors() {
                if self.is_free(map, new_pos) && !reachable[new_pos] {
                    reachable[new_pos] = true;
                    to_visit.push(new_pos);
                }
            }
        }

        reachable
    }

    /// All states reachable with one step or push.
    pub fn successors(&self, map: &GoalMap) -> Vec<(State, Move)> {
        let mut new_states = Vec::with_capacity(4);

        for &dir in &DIRECTIONS {
            let new_player_pos = self.player_pos + dir;
            if map.is_wall(new_player_pos) {
                continue;
            }

            if self.has_box(new_player_pos) {
                let push_dest = new_player_pos + dir;
                if self.is_free(map, push_dest) {
                    let new_state = self.with_box_moved(new_player_pos, new_player_pos, push_dest);
                    new_states.push((new_state, Move::new(dir, true)));
                }
            } else {
                let new_state = State {
                    player_pos: new_player_pos,
                    boxes: self.boxes.clone(),
                };
                new_states.push((new_state, Move::new(dir, false)));
            }
        }

        new_states
    }

    /// Reverse moves: the player steps to a free cell and may drag the box
    /// that is directly behind it. Pulls are labeled as pushes in the pull direction.
    pub fn pull_successors(&self, map: &GoalMap) -> Vec<(State, Move)> {
        let mut new_states = Vec::with_capacity(8);

        for &dir in &DIRECTIONS {
            let new_player_pos = self.player_pos + dir;
            if !self.is_free(map, new_player_pos) {
                continue;
            }

            new_states.push((
                State {
                    player_pos: new_player_pos,
                    boxes: self.boxes.clone(),
                },
                Move::new(dir, false),
            ));

            let behind = self.player_pos - dir;
            if self.has_box(behind) {
                let new_state = self.with_box_moved(new_player_pos, behind, self.player_pos);
                new_states.push((new_state, Move::new(dir, true)));
            }
        }

        new_states
    }

    /// Plays a single primitive move, `None` if it's illegal here.
    pub fn apply(&self, map: &GoalMap, mov: Move) -> Option<State> {
        let new_player_pos = self.player_pos + mov.dir;
        if map.is_wall(new_player_pos) || self.has_box(new_player_pos) != mov.is_push {
            return None;
        }
        if !mov.is_push {
            return Some(State {
                player_pos: new_player_pos,
                boxes: self.boxes.clone(),
            });
        }

        let push_dest = new_player_pos + mov.dir;
        if !self.is_free(map, push_dest) {
            return None;
        }
        Some(self.with_box_moved(new_player_pos, new_player_pos, push_dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dir;
    use crate::level::Level;

    fn parse(level: &str) -> Level {
        level.parse().unwrap()
    }

    #[test]
    fn equality_ignores_box_order() {
        let a = State::new(Pos::new(1, 1), vec![Pos::new(3, 2), Pos::new(2, 2)]);
        let b = State::new(Pos::new(1, 1), vec![Pos::new(2, 2), Pos::new(3, 2)]);
        assert_eq!(a, b);
    }

    #[test]
    fn steps_and_pushes() {
        let level = parse(
            r"
 ####
#    #
# @$*#
# $  #
#   .#
 ####
",
        );
        let successors = State::initial(&level).unwrap().successors(&level.map);
        let moves: Vec<_> = successors.iter().map(|&(_, m)| m.to_string()).collect();
        // right pushes into a box on goal, down pushes freely
        assert_eq!(moves, vec!["u", "D", "l"]);

        let (pushed, _) = &successors[1];
        assert_eq!(pushed.player_pos(), Pos::new(2, 3));
        assert!(pushed.has_box(Pos::new(2, 4)));
        assert!(!pushed.has_box(Pos::new(2, 3)));
    }

    #[test]
    fn boxes_block_walking() {
        let level = parse(
            r"
#######
#@ $  #
#######
",
        );
        let reachable = State::initial(&level).unwrap().reachable_area(&level.map);
        assert_eq!(reachable.to_string(), "0000000\n0110000\n0000000\n");
    }

    #[test]
    fn walls_block_everything() {
        let level = parse(
            r"
###
#@#
###
",
        );
        assert!(State::initial(&level).unwrap().successors(&level.map).is_empty());
    }

    #[test]
    fn pulls() {
        let level = parse(
            r"
######
#.$@ #
######
",
        );
        let successors = State::initial(&level).unwrap().pull_successors(&level.map);
        assert_eq!(successors.len(), 2);
        let (step, step_move) = &successors[0];
        let (pull, pull_move) = &successors[1];
        assert_eq!(*step_move, Move::new(Dir::Right, false));
        assert_eq!(step.boxes(), &[Pos::new(2, 1)]);
        assert_eq!(*pull_move, Move::new(Dir::Right, true));
        assert_eq!(pull.player_pos(), Pos::new(4, 1));
        assert_eq!(pull.boxes(), &[Pos::new(3, 1)]);
    }

    #[test]
    fn applying_moves() {
        let level = parse(
            r"
#####
#@$.#
#####
",
        );
        let state = State::initial(&level).unwrap();
        assert_eq!(state.apply(&level.map, Move::new(Dir::Right, false)), None);
        let pushed = state.apply(&level.map, Move::new(Dir::Right, true)).unwrap();
        assert_eq!(pushed.boxes(), level.map.goals());
        assert_eq!(pushed.apply(&level.map, Move::new(Dir::Right, true)), None);
    }
}
