use fnv::FnvHashSet;
use log::trace;

use crate::data::{Dir, Pos, DIRECTIONS};

use super::static_data::StaticData;

/// Decides whether a set of boxes can never all reach goals.
///
/// Static rules (dead squares, freeze, overfull goal rooms) don't depend on the player.
/// Whenever one of the expensive ones fires, the boxes responsible are remembered
/// so any later state containing them is rejected by a subset lookup.
/// The search adds box sets it finds stuck the same way.
#[derive(Debug)]
pub(crate) struct DeadlockDetector<'a> {
    sd: &'a StaticData,
    patterns: Vec<Vec<Pos>>,
    known: FnvHashSet<Vec<Pos>>,
}

impl<'a> DeadlockDetector<'a> {
    pub(crate) fn new(sd: &'a StaticData) -> Self {
        DeadlockDetector {
            sd,
            patterns: Vec::new(),
            known: FnvHashSet::default(),
        }
    }

    /// `boxes` must be sorted. Records a pattern if freeze or goal room analysis fires.
    pub(crate) fn is_deadlock(&mut self, boxes: &[Pos]) -> bool {
        if self.on_dead_square(boxes) || self.matches_pattern(boxes) {
            return true;
        }
        match self
            .frozen_cluster(boxes)
            .or_else(|| self.overfull_room(boxes))
        {
            Some(pattern) => {
                self.add_deadlock_pattern(&pattern);
                true
            }
            None => false,
        }
    }

    /// Remembers `boxes` as dead.
    ///
    /// If the static rules prove the set dead, boxes they don't need are dropped first.
    /// Otherwise the set is stored as given so the caller must know it's dead.
    pub(crate) fn add_deadlock_pattern(&mut self, boxes: &[Pos]) {
        let mut pattern = boxes.to_vec();
        pattern.sort();

        if self.is_statically_dead(&pattern) {
            let mut i = 0;
            while i < pattern.len() {
                let removed = pattern.remove(i);
                if !self.is_statically_dead(&pattern) {
                    pattern.insert(i, removed);
                    i += 1;
                }
            }
        }

        if self.known.insert(pattern.clone()) {
            trace!("New deadlock pattern: {:?}", pattern);
            self.patterns.push(pattern);
        }
    }

    pub(crate) fn pattern_cnt(&self) -> usize {
        self.patterns.len()
    }

    /// True if the boxes aren't solved and every push of every box,
    /// from whichever side the player might stand, ends in a deadlock.
    ///
    /// Doesn't look at the player so the result holds for any player position.
    pub(crate) fn is_stuck(&mut self, boxes: &[Pos]) -> bool {
        if boxes == self.sd.map.goals.as_slice() {
            return false;
        }
        for (i, &pos) in boxes.iter().enumerate() {
            for &dir in &DIRECTIONS {
                if self.is_blocked(boxes, pos - dir) || self.is_blocked(boxes, pos + dir) {
                    continue;
                }
                let mut pushed = boxes.to_vec();
                pushed[i] = pos + dir;
                pushed.sort();
                if !self.is_deadlock(&pushed) {
                    return false;
                }
            }
        }
        true
    }

    fn is_blocked(&self, boxes: &[Pos], pos: Pos) -> bool {
        self.sd.map.is_wall(pos) || boxes.binary_search(&pos).is_ok()
    }

    fn is_statically_dead(&self, boxes: &[Pos]) -> bool {
        self.on_dead_square(boxes)
            || self.frozen_cluster(boxes).is_some()
            || self.overfull_room(boxes).is_some()
    }

    fn on_dead_square(&self, boxes: &[Pos]) -> bool {
        boxes
            .iter()
            .any(|&pos| self.sd.is_corner(pos) || self.sd.is_dead_square(pos))
    }

    fn matches_pattern(&self, boxes: &[Pos]) -> bool {
        self.patterns.iter().any(|pattern| {
            pattern.len() <= boxes.len()
                && pattern
                    .iter()
                    .all(|pos| boxes.binary_search(pos).is_ok())
        })
    }

    /// The boxes examined while proving some box off goal can never move again.
    fn frozen_cluster(&self, boxes: &[Pos]) -> Option<Vec<Pos>> {
        for &pos in boxes {
            if self.sd.map.is_goal(pos) {
                continue;
            }
            let mut frozen = Frozen::new(self.sd, boxes);
            if frozen.is_frozen(pos) {
                let mut cluster = frozen.visited;
                cluster.sort();
                return Some(cluster);
            }
        }
        None
    }

    /// Boxes in a sealed goal room that has more boxes than goals.
    fn overfull_room(&self, boxes: &[Pos]) -> Option<Vec<Pos>> {
        self.sd
            .goal_rooms
            .iter()
            .filter(|room| room.sealed)
            .find_map(|room| {
                let inside: Vec<Pos> = boxes
                    .iter()
                    .cloned()
                    .filter(|&pos| room.contains(pos))
                    .collect();
                if inside.len() > room.goals.len() {
                    Some(inside)
                } else {
                    None
                }
            })
    }
}

/// A box is frozen if it can't move along either axis.
///
/// An axis is blocked by a wall, a frozen box or dead squares on both sides.
/// Boxes already being examined count as blocked.
struct Frozen<'a, 'b> {
    sd: &'a StaticData,
    boxes: &'b [Pos],
    visited: Vec<Pos>,
}

impl<'a, 'b> Frozen<'a, 'b> {
    fn new(sd: &'a StaticData, boxes: &'b [Pos]) -> Self {
        Frozen {
            sd,
            boxes,
            visited: Vec::new(),
        }
    }

    fn is_frozen(&mut self, pos: Pos) -> bool {
        if self.sd.map.is_wall(pos) {
            return true;
        }
        if self.boxes.binary_search(&pos).is_err() {
            return false;
        }
        if self.visited.contains(&pos) {
            return true;
        }
        self.visited.push(pos);

        self.is_axis_blocked(pos, Dir::Left, Dir::Right)
            && self.is_axis_blocked(pos, Dir::Up, Dir::Down)
    }

    fn is_axis_blocked(&mut self, pos: Pos, dir1: Dir, dir2: Dir) -> bool {
        let (pos1, pos2) = (pos + dir1, pos + dir2);
        if self.sd.is_dead_square(pos1) && self.sd.is_dead_square(pos2) {
            return true;
        }
        self.is_frozen(pos1) || self.is_frozen(pos2)
    }
}
