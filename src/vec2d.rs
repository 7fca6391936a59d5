use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid of cells addressed by `Pos`.
///
/// Indexing with a position outside the grid is a bug in the caller and panics,
/// use `get` where off-grid positions are expected.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    width: i32,
    height: i32,
}

impl<T> Vec2d<T> {
    pub(crate) fn width(&self) -> i32 {
        self.width
    }

    pub(crate) fn height(&self) -> i32 {
        self.height
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.data[self.index_of(pos)])
        } else {
            None
        }
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos::new(x, y)))
    }

    pub(crate) fn scratchpad<U: Default + Clone>(&self) -> Vec2d<U> {
        self.scratchpad_with_default(U::default())
    }

    pub(crate) fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            width: self.width,
            height: self.height,
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "{:?} is outside of the {}x{} grid",
            pos,
            self.width,
            self.height
        );
        pos.y as usize * self.width as usize + pos.x as usize
    }
}

impl<T: Clone> Vec2d<T> {
    /// Rows may have different lengths, shorter ones are padded with `fill`.
    pub(crate) fn from_rows(rows: &[Vec<T>], fill: T) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend_from_slice(row);
            for _ in row.len()..width {
                data.push(fill.clone());
            }
        }
        Vec2d {
            data,
            width: width as i32,
            height: height as i32,
        }
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width.max(1) as usize) {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width.max(1) as usize) {
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = self.index_of(index);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_and_indexing() {
        let mut grid = Vec2d::from_rows(&[vec![true, true, true], vec![true]], false);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.to_string(), "111\n100\n");

        grid[Pos::new(2, 1)] = true;
        assert!(grid[Pos::new(2, 1)]);
        assert_eq!(grid.get(Pos::new(3, 1)), None);
        assert_eq!(grid.get(Pos::new(-1, 0)), None);
        assert_eq!(grid.positions().count(), 6);
    }

    #[test]
    #[should_panic(expected = "outside of the 1x1 grid")]
    fn out_of_bounds_is_a_bug() {
        let grid = Vec2d::from_rows(&[vec![0u8]], 0);
        let _ = grid[Pos::new(1, 0)];
    }
}
