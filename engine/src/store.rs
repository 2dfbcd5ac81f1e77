use glam::IVec2;
use util::Grid;

use crate::FovError;

/// Visibility state of one grid position.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Cell {
    pub transparent: bool,
    pub visible: bool,
}

/// Dense cell grid placed over world space.
///
/// The grid's top left cell sits at world position `origin`. Every public
/// accessor takes world coordinates and fails with
/// [`FovError::OutOfGrid`] for positions the grid does not cover.
#[derive(Clone, Debug)]
pub struct CellStore {
    origin: IVec2,
    cells: Grid<Cell>,
}

impl CellStore {
    pub fn new(dim: impl Into<IVec2>) -> Self {
        CellStore {
            origin: Default::default(),
            cells: Grid::new(dim),
        }
    }

    pub fn dim(&self) -> IVec2 {
        self.cells.dim()
    }

    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    /// World position of the top left cell.
    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    pub fn left(&self) -> i32 {
        self.origin.x
    }

    pub fn top(&self) -> i32 {
        self.origin.y
    }

    pub(crate) fn set_origin(&mut self, origin: IVec2) {
        self.origin = origin;
    }

    pub fn contains(&self, p: impl Into<IVec2>) -> bool {
        self.cells.contains(p.into() - self.origin)
    }

    /// Translate a world position to the flat index of its cell.
    pub fn map_coord_to_index(
        &self,
        p: impl Into<IVec2>,
    ) -> Result<usize, FovError> {
        let p = p.into();
        self.cells
            .index_of(p - self.origin)
            .ok_or_else(|| FovError::out_of_grid(p))
    }

    pub fn get(&self, p: impl Into<IVec2>) -> Result<&Cell, FovError> {
        let p = p.into();
        self.cells
            .get(p - self.origin)
            .ok_or_else(|| FovError::out_of_grid(p))
    }

    pub fn get_mut(
        &mut self,
        p: impl Into<IVec2>,
    ) -> Result<&mut Cell, FovError> {
        let p = p.into();
        self.cells
            .get_mut(p - self.origin)
            .ok_or_else(|| FovError::out_of_grid(p))
    }

    pub fn is_visible(&self, p: impl Into<IVec2>) -> Result<bool, FovError> {
        Ok(self.get(p)?.visible)
    }

    pub fn is_transparent(
        &self,
        p: impl Into<IVec2>,
    ) -> Result<bool, FovError> {
        Ok(self.get(p)?.transparent)
    }

    pub fn mark_visible(
        &mut self,
        p: impl Into<IVec2>,
    ) -> Result<(), FovError> {
        self.get_mut(p)?.visible = true;
        Ok(())
    }

    /// Clear visibility from all cells.
    pub fn clear_visible(&mut self) {
        for (_, c) in self.cells.iter_mut() {
            c.visible = false;
        }
    }

    /// Refill every cell's transparency from a world query, clears
    /// visibility.
    pub(crate) fn load(
        &mut self,
        mut is_transparent: impl FnMut(IVec2) -> bool,
    ) {
        let origin = self.origin;
        for (p, c) in self.cells.iter_mut() {
            *c = Cell {
                transparent: is_transparent(origin + p),
                visible: false,
            };
        }
    }

    /// Iterate world positions and cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &Cell)> {
        let origin = self.origin;
        self.cells.iter().map(move |(p, c)| (origin + p, c))
    }

    /// World positions of all visible cells.
    pub fn visible_points(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.iter().filter(|(_, c)| c.visible).map(|(p, _)| p)
    }
}

/// Shadowcasting works in grid-local coordinates.
impl fov::Field for CellStore {
    fn dim(&self) -> [i32; 2] {
        self.cells.dim().into()
    }

    fn is_transparent(&self, p: [i32; 2]) -> bool {
        self.cells[IVec2::from(p)].transparent
    }

    fn is_visible(&self, p: [i32; 2]) -> bool {
        self.cells[IVec2::from(p)].visible
    }

    fn set_visible(&mut self, p: [i32; 2], visible: bool) {
        self.cells[IVec2::from(p)].visible = visible;
    }
}
