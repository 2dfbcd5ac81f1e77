use std::ops::{Index, IndexMut};

use glam::{ivec2, IVec2};

/// Dense rectangular container of cells addressed by local 2D coordinates.
///
/// Valid positions are `0 <= x < width`, `0 <= y < height`. Cells are stored
/// in row-major order. The checked accessors return `None` for positions
/// outside the grid, each axis is checked on its own so a position past
/// the right edge never wraps onto the next row.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid<T> {
    dim: IVec2,
    cells: Vec<T>,
}

impl<T: Default + Clone> Grid<T> {
    /// Creates a new grid with every cell default-constructed.
    ///
    /// Panics if either dimension is negative or if the cell count does not
    /// fit in an `i32`.
    pub fn new(dim: impl Into<IVec2>) -> Self {
        let dim = dim.into();
        assert!(dim.x >= 0 && dim.y >= 0, "Grid: negative dimensions {dim}");
        let Some(n) = dim.x.checked_mul(dim.y) else {
            panic!("Grid: {dim} has too many cells");
        };
        Grid {
            dim,
            cells: vec![T::default(); n as usize],
        }
    }
}

impl<T> Grid<T> {
    pub fn dim(&self) -> IVec2 {
        self.dim
    }

    pub fn width(&self) -> i32 {
        self.dim.x
    }

    pub fn height(&self) -> i32 {
        self.dim.y
    }

    pub fn contains(&self, p: impl Into<IVec2>) -> bool {
        let p = p.into();
        (0..self.dim.x).contains(&p.x) && (0..self.dim.y).contains(&p.y)
    }

    /// Flat storage index of a position, if the position is inside the
    /// grid.
    pub fn index_of(&self, p: impl Into<IVec2>) -> Option<usize> {
        let p = p.into();
        self.contains(p).then(|| (p.y * self.dim.x + p.x) as usize)
    }

    pub fn get(&self, p: impl Into<IVec2>) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: impl Into<IVec2>) -> Option<&mut T> {
        self.index_of(p).map(move |i| &mut self.cells[i])
    }

    /// Iterate positions and cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &T)> {
        let w = self.dim.x;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (ivec2(i as i32 % w, i as i32 / w), c))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (IVec2, &mut T)> {
        let w = self.dim.x;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, c)| (ivec2(i as i32 % w, i as i32 / w), c))
    }
}

impl<T> Index<IVec2> for Grid<T> {
    type Output = T;

    fn index(&self, p: IVec2) -> &Self::Output {
        match self.index_of(p) {
            Some(i) => &self.cells[i],
            None => panic!("Grid: {p} outside {} grid", self.dim),
        }
    }
}

impl<T> IndexMut<IVec2> for Grid<T> {
    fn index_mut(&mut self, p: IVec2) -> &mut Self::Output {
        match self.index_of(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("Grid: {p} outside {} grid", self.dim),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn row_major_layout() {
        let grid: Grid<u8> = Grid::new([3, 2]);
        assert_eq!(grid.iter().count(), 6);
        assert_eq!(grid.index_of([0, 0]), Some(0));
        assert_eq!(grid.index_of([2, 0]), Some(2));
        assert_eq!(grid.index_of([0, 1]), Some(3));
        assert_eq!(grid.index_of([2, 1]), Some(5));
        assert_eq!(grid.iter().nth(4).map(|(p, _)| p), Some(ivec2(1, 1)));
    }

    #[test]
    fn no_row_wrapping() {
        let grid: Grid<u8> = Grid::new([3, 3]);
        // Would map to a valid flat index with naive arithmetic.
        assert_eq!(grid.index_of([3, 0]), None);
        assert_eq!(grid.index_of([-1, 1]), None);
        assert_eq!(grid.index_of([0, -1]), None);
        assert_eq!(grid.index_of([0, 3]), None);
        assert!(grid.get([5, 0]).is_none());
    }

    #[test]
    fn mutation() {
        let mut grid: Grid<u8> = Grid::new([4, 4]);
        *grid.get_mut([1, 2]).unwrap() = 7;
        grid[ivec2(3, 3)] = 9;
        assert_eq!(grid[ivec2(1, 2)], 7);
        assert_eq!(grid.iter().filter(|(_, c)| **c != 0).count(), 2);

        for (_, c) in grid.iter_mut() {
            *c = 0;
        }
        assert!(grid.iter().all(|(_, c)| *c == 0));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let grid: Grid<u8> = Grid::new([2, 2]);
        let _ = grid[ivec2(2, 0)];
    }

    #[test]
    #[should_panic]
    fn too_many_cells() {
        let _: Grid<u8> = Grid::new([100_000, 100_000]);
    }

    #[quickcheck]
    fn index_round_trip(w: u8, h: u8) -> bool {
        let (w, h) = (w as i32 % 16 + 1, h as i32 % 16 + 1);
        let grid: Grid<()> = Grid::new([w, h]);
        let mut seen = vec![false; (w * h) as usize];
        for (n, (p, _)) in grid.iter().enumerate() {
            match grid.index_of(p) {
                Some(i) if i == n && !seen[i] => seen[i] = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|a| a)
    }
}
