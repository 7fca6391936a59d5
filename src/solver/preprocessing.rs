use std::collections::VecDeque;

use log::debug;

use crate::data::{Dir, MapCell, Pos, DIRECTIONS};
use crate::grid::GoalMap;
use crate::vec2d::Vec2d;

/// Cells the player can walk to from `player_pos` if there were no boxes.
pub(crate) fn check_reachability(grid: &Vec2d<MapCell>, player_pos: Pos) -> Vec2d<bool> {
    let mut visited = grid.scratchpad();
    let mut to_visit = vec![player_pos];
    visited[player_pos] = true;

    while let Some(cur) = to_visit.pop() {
        for &new_pos in &cur.neighbors() {
            // off-grid counts as wall
            match grid.get(new_pos) {
                Some(&MapCell::Wall) | None => continue,
                Some(_) => {}
            }
            if !visited[new_pos] {
                visited[new_pos] = true;
                to_visit.push(new_pos);
            }
        }
    }

    visited
}

/// Turns every cell the player can't reach into a wall
/// so code that iterates through all non-walls doesn't need to care about them.
pub(crate) fn wall_off_unreachable(grid: &Vec2d<MapCell>, reachable: &Vec2d<bool>) -> Vec2d<MapCell> {
    let mut processed_grid = grid.clone();
    for pos in processed_grid.positions() {
        if !reachable[pos] {
            processed_grid[pos] = MapCell::Wall;
        }
    }
    processed_grid
}

/// Non-goal cells with a wall on one vertical and one horizontal side.
pub(crate) fn find_corners(map: &GoalMap) -> Vec2d<bool> {
    let mut corners = map.grid.scratchpad();
    for pos in map.grid.positions() {
        if map.grid[pos] != MapCell::Empty {
            continue;
        }
        let vertical = map.is_wall(pos + Dir::Up) || map.is_wall(pos + Dir::Down);
        let horizontal = map.is_wall(pos + Dir::Left) || map.is_wall(pos + Dir::Right);
        corners[pos] = vertical && horizontal;
    }
    corners
}

/// Floor cells from which a lone box can't be pushed to any goal.
///
/// Pulls the box away from every goal - wherever it can be pulled to, it can be pushed back.
/// Ignores whether the player can actually get to the pulling side
/// so it marks fewer cells than it could but never too many.
pub(crate) fn find_dead_squares(map: &GoalMap) -> Vec2d<bool> {
    let mut alive = map.grid.scratchpad();
    let mut to_visit: VecDeque<Pos> = map.goals.iter().cloned().collect();
    for &goal in &map.goals {
        alive[goal] = true;
    }

    while let Some(box_pos) = to_visit.pop_front() {
        for &dir in &DIRECTIONS {
            let player_pos = box_pos + dir;
            if map.is_wall(player_pos) || map.is_wall(player_pos + dir) || alive[player_pos] {
                continue;
            }
            alive[player_pos] = true;
            to_visit.push_back(player_pos);
        }
    }

    let mut dead = map.grid.scratchpad();
    for pos in map.grid.positions() {
        dead[pos] = map.grid[pos] != MapCell::Wall && !alive[pos];
    }
    dead
}

/// A straight corridor with walls on both sides along its whole length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tunnel {
    pub(crate) start: Pos,
    pub(crate) end: Pos,
    /// From `start` towards `end`.
    pub(crate) dir: Dir,
    /// Number of pushes to move a box from one end to the other.
    pub(crate) length: u32,
}

impl Tunnel {
    pub(crate) fn cells(&self) -> impl Iterator<Item = Pos> {
        let (start, dir) = (self.start, self.dir);
        (0..=self.length).scan(start, move |pos, i| {
            if i > 0 {
                *pos = *pos + dir;
            }
            Some(*pos)
        })
    }
}

/// Runs of at least 3 flanked cells - shorter ones would only duplicate primitive pushes.
pub(crate) fn find_tunnels(map: &GoalMap) -> Vec<Tunnel> {
    let mut tunnels = Vec::new();
    for &dir in &[Dir::Right, Dir::Down] {
        let (side1, side2) = if dir.is_horizontal() {
            (Dir::Up, Dir::Down)
        } else {
            (Dir::Left, Dir::Right)
        };
        let flanked =
            |pos: Pos| !map.is_wall(pos) && map.is_wall(pos + side1) && map.is_wall(pos + side2);

        for pos in map.grid.positions() {
            // only start at the first cell of a run
            if !flanked(pos) || flanked(pos - dir) {
                continue;
            }
            let mut end = pos;
            while flanked(end + dir) {
                end = end + dir;
            }
            let length = pos.dist(end);
            if length >= 2 {
                tunnels.push(Tunnel {
                    start: pos,
                    end,
                    dir,
                    length,
                });
            }
        }
    }
    tunnels
}

/// A region with goals that connects to the rest of the level through a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GoalRoom {
    pub(crate) entrance: Pos,
    pub(crate) cells: Vec<Pos>,
    pub(crate) goals: Vec<Pos>,
    pub(crate) inside: Vec2d<bool>,
    /// No box inside can ever be pushed back onto the entrance.
    pub(crate) sealed: bool,
}

impl GoalRoom {
    pub(crate) fn contains(&self, pos: Pos) -> bool {
        self.inside.get(pos).cloned().unwrap_or(false)
    }
}

/// Tries every non-goal cell as an entrance - if blocking it splits the level,
/// each split-off part with goals and without the player is a room.
pub(crate) fn find_goal_rooms(map: &GoalMap, player_pos: Pos) -> Vec<GoalRoom> {
    let mut rooms = Vec::new();

    for entrance in map.grid.positions() {
        if map.grid[entrance] != MapCell::Empty {
            continue;
        }
        let floor_neighbors: Vec<Pos> = entrance
            .neighbors()
            .iter()
            .cloned()
            .filter(|&pos| !map.is_wall(pos))
            .collect();
        if floor_neighbors.len() < 2 {
            continue;
        }

        let mut component = map.grid.scratchpad_with_default(None);
        let mut components = Vec::new();
        for &start in &floor_neighbors {
            if component[start].is_some() {
                continue;
            }
            let id = components.len();
            let mut cells = vec![start];
            component[start] = Some(id);
            let mut i = 0;
            while i < cells.len() {
                let cur: Pos = cells[i];
                i += 1;
                for &next in &cur.neighbors() {
                    if next != entrance && !map.is_wall(next) && component[next].is_none() {
                        component[next] = Some(id);
                        cells.push(next);
                    }
                }
            }
            components.push(cells);
        }
        if components.len() < 2 {
            continue;
        }

        for mut cells in components {
            let has_goal = cells.iter().any(|&pos| map.is_goal(pos));
            if !has_goal || cells.contains(&player_pos) {
                continue;
            }
            cells.sort();
            let goals = cells.iter().cloned().filter(|&pos| map.is_goal(pos)).collect();
            let mut inside = map.grid.scratchpad();
            for &pos in &cells {
                inside[pos] = true;
            }
            let sealed = entrance.neighbors().iter().all(|&pos| {
                if !inside.get(pos).cloned().unwrap_or(false) {
                    return true;
                }
                let into_entrance = pos.dir_to(entrance);
                map.is_wall(pos - into_entrance)
            });
            rooms.push(GoalRoom {
                entrance,
                cells,
                goals,
                inside,
                sealed,
            });
        }
    }

    debug!(
        "Found {} goal rooms ({} sealed)",
        rooms.len(),
        rooms.iter().filter(|r| r.sealed).count()
    );
    rooms
}
