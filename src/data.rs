use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapCell {
    Empty,
    Wall,
    Goal,
}

/// Zero-based cell coordinates, origin top-left, `y` grows downward.
///
/// Signed so that stepping off the edge of the grid is representable,
/// such positions are treated as walls by every grid query.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    // y first so the derived ordering is row-major
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { y, x }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    pub fn neighbors(self) -> [Pos; 4] {
        [self + Dir::Up, self + Dir::Right, self + Dir::Down, self + Dir::Left]
    }

    /// Direction of an orthogonally adjacent position.
    pub fn dir_to(self, other: Pos) -> Dir {
        match (other.x - self.x, other.y - self.y) {
            (0, -1) => Dir::Up,
            (1, 0) => Dir::Right,
            (0, 1) => Dir::Down,
            (-1, 0) => Dir::Left,
            _ => panic!("{:?} and {:?} are not adjacent", self, other),
        }
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Dir::Left || self == Dir::Right
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.offset();
        Pos::new(self.x + dx, self.y + dy)
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        self + dir.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions() {
        let pos = Pos::new(3, 5);
        assert_eq!(pos + Dir::Up, Pos::new(3, 4));
        assert_eq!(pos + Dir::Right, Pos::new(4, 5));
        assert_eq!(pos - Dir::Right, Pos::new(2, 5));
        for &dir in &DIRECTIONS {
            assert_eq!(pos.dir_to(pos + dir), dir);
            assert_eq!(pos + dir + dir.inverse(), pos);
        }
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Pos::new(2, 1), Pos::new(0, 2), Pos::new(5, 0), Pos::new(1, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(5, 0), Pos::new(1, 1), Pos::new(2, 1), Pos::new(0, 2)]);
    }

    #[test]
    fn off_grid_positions() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner + Dir::Left, Pos::new(-1, 0));
        assert_eq!(corner.dist(Pos::new(-1, -1)), 2);
    }
}
