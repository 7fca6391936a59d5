use std::collections::VecDeque;

use crate::data::{MapCell, Pos};
use crate::grid::GoalMap;
use crate::state::State;
use crate::vec2d::Vec2d;

use super::assignment::min_cost_assignment;

/// Estimates at or above this mean the boxes can't all be matched to goals.
pub(crate) const INFINITE: u32 = 1 << 24;

// per edge - large enough that one unreachable pair outweighs every finite matching
const UNREACHABLE_COST: i64 = INFINITE as i64;

/// Walking distances (boxes ignored) between every pair of floor cells.
#[derive(Debug, Clone)]
pub(crate) struct DistanceTable {
    index: Vec2d<Option<usize>>,
    cells: usize,
    dists: Vec<u16>,
}

impl DistanceTable {
    const NONE: u16 = u16::max_value();

    pub(crate) fn new(map: &GoalMap) -> Self {
        let mut index = map.grid.scratchpad_with_default(None);
        let mut floor = Vec::new();
        for pos in map.grid.positions() {
            if map.grid[pos] != MapCell::Wall {
                index[pos] = Some(floor.len());
                floor.push(pos);
            }
        }

        let cells = floor.len();
        let mut dists = vec![Self::NONE; cells * cells];
        let mut to_visit = VecDeque::new();
        for (src, &src_pos) in floor.iter().enumerate() {
            let row = &mut dists[src * cells..(src + 1) * cells];
            row[src] = 0;
            to_visit.push_back(src_pos);
            while let Some(cur) = to_visit.pop_front() {
                let cur_dist = row[index[cur].expect("Visited a wall")];
                for &next in &cur.neighbors() {
                    if let Some(&Some(next_index)) = index.get(next) {
                        if row[next_index] == Self::NONE {
                            row[next_index] = cur_dist + 1;
                            to_visit.push_back(next);
                        }
                    }
                }
            }
        }

        DistanceTable {
            index,
            cells,
            dists,
        }
    }

    pub(crate) fn dist(&self, from: Pos, to: Pos) -> Option<u16> {
        let from = (*self.index.get(from)?)?;
        let to = (*self.index.get(to)?)?;
        match self.dists[from * self.cells + to] {
            Self::NONE => None,
            d => Some(d),
        }
    }
}

/// Lower-bound-seeking estimate of the moves left.
///
/// Boxes not on a goal are matched to free goals at minimum total walking distance,
/// then 1 is added per such box and the player's Manhattan distance to the closest one.
/// `goals` are the cells the boxes should end up on - targets in forward search,
/// initial box positions in backward search.
pub(crate) fn estimate(distances: &DistanceTable, goals: &[Pos], state: &State) -> u32 {
    let off_goal: Vec<Pos> = state
        .boxes
        .iter()
        .cloned()
        .filter(|pos| goals.binary_search(pos).is_err())
        .collect();
    if off_goal.is_empty() {
        return 0;
    }
    let free_goals: Vec<Pos> = goals
        .iter()
        .cloned()
        .filter(|&pos| !state.has_box(pos))
        .collect();
    if free_goals.len() < off_goal.len() {
        return INFINITE;
    }

    let costs: Vec<Vec<i64>> = off_goal
        .iter()
        .map(|&box_pos| {
            free_goals
                .iter()
                .map(|&goal| {
                    distances
                        .dist(box_pos, goal)
                        .map_or(UNREACHABLE_COST, i64::from)
                })
                .collect()
        })
        .collect();
    let (matching, _) = min_cost_assignment(&costs);
    if matching >= UNREACHABLE_COST {
        return INFINITE;
    }

    let closest_box = off_goal
        .iter()
        .map(|&box_pos| state.player_pos.dist(box_pos))
        .min()
        .unwrap_or(0);

    matching as u32 + off_goal.len() as u32 + closest_box
}
