use std::collections::VecDeque;

use fnv::FnvHashMap;

use crate::data::{Pos, DIRECTIONS};
use crate::moves::{MacroKind, MacroMove, Move, Moves};
use crate::state::State;
use crate::vec2d::Vec2d;

use super::backtracking::{backtrack_prevs, player_steps};
use super::preprocessing::{GoalRoom, Tunnel};
use super::static_data::StaticData;

/// A macro successor together with the cost the search charges for it.
#[derive(Debug, Clone)]
pub(crate) struct MacroSuccessor {
    pub(crate) state: State,
    pub(crate) mov: MacroMove,
    pub(crate) cost: u32,
}

/// Tunnel and goal room macros available from `state`.
///
/// `reachable` is the player's walkable area in `state`.
pub(crate) fn macro_successors(
    sd: &StaticData,
    state: &State,
    reachable: &Vec2d<bool>,
) -> Vec<MacroSuccessor> {
    let mut successors = Vec::new();
    for tunnel in &sd.tunnels {
        for &(mouth, far_end) in &[(tunnel.start, tunnel.end), (tunnel.end, tunnel.start)] {
            if let Some(successor) = tunnel_macro(sd, state, reachable, tunnel, mouth, far_end) {
                successors.push(successor);
            }
        }
    }
    for room in &sd.goal_rooms {
        if let Some(successor) = goal_room_macro(sd, state, reachable, room) {
            successors.push(successor);
        }
    }
    successors
}

/// Pushes a box at one end of a tunnel all the way to the other end.
fn tunnel_macro(
    sd: &StaticData,
    state: &State,
    reachable: &Vec2d<bool>,
    tunnel: &Tunnel,
    mouth: Pos,
    far_end: Pos,
) -> Option<MacroSuccessor> {
    if !state.has_box(mouth) {
        return None;
    }
    let dir = if mouth == tunnel.start {
        tunnel.dir
    } else {
        tunnel.dir.inverse()
    };
    let behind = mouth - dir;
    if !reachable.get(behind).cloned().unwrap_or(false) {
        return None;
    }
    if tunnel.cells().any(|pos| pos != mouth && state.has_box(pos)) {
        return None;
    }

    let mut moves = player_steps(&sd.map, state, state.player_pos, behind)?;
    for _ in 0..tunnel.length {
        moves.add(Move::new(dir, true));
    }
    Some(MacroSuccessor {
        state: state.with_box_moved(far_end - dir, mouth, far_end),
        mov: MacroMove::new(MacroKind::Tunnel, moves),
        cost: tunnel.length,
    })
}

/// Takes a box on the entrance of a goal room to the closest free goal inside.
///
/// Searches the player and the one box together, other boxes stay where they are.
fn goal_room_macro(
    sd: &StaticData,
    state: &State,
    reachable: &Vec2d<bool>,
    room: &GoalRoom,
) -> Option<MacroSuccessor> {
    let entrance = room.entrance;
    if !state.has_box(entrance) {
        return None;
    }
    let has_free_goal = room.goals.iter().any(|&goal| !state.has_box(goal));
    let can_push_in = DIRECTIONS.iter().any(|&dir| {
        room.contains(entrance + dir) && reachable.get(entrance - dir).cloned().unwrap_or(false)
    });
    if !has_free_goal || !can_push_in {
        return None;
    }

    // (box, player) pairs
    let start = (entrance, state.player_pos);
    let mut prevs = FnvHashMap::default();
    let mut move_to = FnvHashMap::default();
    prevs.insert(start, start);
    let mut to_visit = VecDeque::new();
    to_visit.push_back(start);

    let is_obstacle = |pos: Pos| sd.map.is_wall(pos) || (pos != entrance && state.has_box(pos));

    let mut found = None;
    'bfs: while let Some((box_pos, player_pos)) = to_visit.pop_front() {
        for &dir in &DIRECTIONS {
            let new_player_pos = player_pos + dir;
            if is_obstacle(new_player_pos) {
                continue;
            }
            let (new_box_pos, is_push) = if new_player_pos == box_pos {
                let dest = box_pos + dir;
                if !room.contains(dest) || is_obstacle(dest) {
                    continue;
                }
                (dest, true)
            } else {
                (box_pos, false)
            };

            let next = (new_box_pos, new_player_pos);
            if prevs.contains_key(&next) {
                continue;
            }
            prevs.insert(next, (box_pos, player_pos));
            move_to.insert(next, Move::new(dir, is_push));
            if is_push && sd.map.is_goal(new_box_pos) {
                found = Some(next);
                break 'bfs;
            }
            to_visit.push_back(next);
        }
    }

    let end = found?;
    let path = backtrack_prevs(&prevs, end);
    let moves = Moves::new(path[1..].iter().map(|pair| move_to[pair]).collect());
    let (goal, player_pos) = end;
    Some(MacroSuccessor {
        state: state.with_box_moved(player_pos, entrance, goal),
        mov: MacroMove::new(MacroKind::GoalRoom, moves),
        cost: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Dir;
    use crate::level::Level;
    use crate::solver::backtracking::replay;

    fn setup(level: &str) -> (StaticData, State) {
        let level: Level = level.parse().unwrap();
        let sd = StaticData::new(&level).unwrap();
        let state = sd.initial_state().clone();
        (sd, state)
    }

    #[test]
    fn tunnel() {
        let (sd, state) = setup(
            r"
#########
#@     .#
#     $ #
####$####
   # #
   # #
   #.#
   ###
",
        );
        let reachable = state.reachable_area(&sd.map);
        let macros = macro_successors(&sd, &state, &reachable);
        let tunnel = macros
            .iter()
            .find(|m| m.mov.kind == MacroKind::Tunnel)
            .unwrap();
        assert_eq!(tunnel.cost, 3);
        assert_eq!(tunnel.mov.dir(), Dir::Down);
        // walk to the cell above the tunnel, then push through
        assert_eq!(tunnel.mov.moves.move_cnt(), 4 + 3);
        assert!(tunnel.mov.moves.to_string().ends_with("DDD"));
        assert!(tunnel.state.has_box(Pos::new(4, 6)));
        assert_eq!(tunnel.state.player_pos(), Pos::new(4, 5));
        assert_eq!(replay(&sd.map, &state, &tunnel.mov.moves), tunnel.state);
    }

    #[test]
    fn blocked_tunnel() {
        let (sd, state) = setup(
            r"
#########
#@      #
#       #
####$####
   #$#
   #.#
   #.#
   ###
",
        );
        let reachable = state.reachable_area(&sd.map);
        assert!(macro_successors(&sd, &state, &reachable)
            .iter()
            .all(|m| m.mov.kind != MacroKind::Tunnel));
    }

    #[test]
    fn goal_room() {
        let (sd, state) = setup(
            r"
#######
#@$   #
### ###
#  .  #
#######
",
        );
        let state = state.with_box_moved(Pos::new(3, 1), Pos::new(2, 1), Pos::new(3, 2));
        let reachable = state.reachable_area(&sd.map);
        let macros = macro_successors(&sd, &state, &reachable);
        let room = macros
            .iter()
            .find(|m| m.mov.kind == MacroKind::GoalRoom)
            .unwrap();
        assert_eq!(room.cost, 1);
        assert_eq!(room.mov.moves.to_string(), "D");
        assert!(room.state.has_box(Pos::new(3, 3)));
        assert_eq!(room.state.player_pos(), Pos::new(3, 2));
        assert_eq!(replay(&sd.map, &state, &room.mov.moves), room.state);
    }

    #[test]
    fn goal_room_needs_a_free_goal() {
        let (sd, _) = setup(
            r"
#######
#@$  .#
### ###
#  *  #
#######
",
        );
        let state = State::new(Pos::new(3, 1), vec![Pos::new(3, 2), Pos::new(3, 3)]);
        let reachable = state.reachable_area(&sd.map);
        assert!(macro_successors(&sd, &state, &reachable).is_empty());
    }
}
