//! Visible set computation for the current viewer.

use fov::PreciseShadowcast;
use glam::IVec2;
use util::bresenham_line;

use crate::{CellStore, FovConfig, FovError, Viewer, Viewport, WorldMap};

/// Visibility grid that follows the viewer around the world.
///
/// The grid is sized to cover the display and is re-centered on the
/// viewer's focus on every update. Positions outside the grid are never
/// visible and querying them is an error.
#[derive(Clone, Debug)]
pub struct FieldOfView {
    viewport: Viewport,
    cells: CellStore,
    shadowcast: PreciseShadowcast,
}

impl FieldOfView {
    pub fn new(
        config: &FovConfig,
        resolution: impl Into<IVec2>,
    ) -> Result<Self, FovError> {
        config.validate()?;
        let viewport = Viewport::new(config.tile_width, resolution)?;
        log::info!(
            "FieldOfView::new: grid is {}x{}",
            viewport.width(),
            viewport.height()
        );

        Ok(FieldOfView {
            viewport,
            cells: CellStore::new(viewport.dim()),
            shadowcast: PreciseShadowcast::new(
                config.max_radius,
                config.light_walls,
            ),
        })
    }

    /// Resize the grid after the display area has changed.
    ///
    /// Visibility is lost until the next update. On error the old grid is
    /// kept as it was.
    pub fn invalidate(
        &mut self,
        tile_width: i32,
        resolution: impl Into<IVec2>,
    ) -> Result<(), FovError> {
        let viewport = Viewport::new(tile_width, resolution)?;
        log::info!(
            "FieldOfView::invalidate: grid is now {}x{}",
            viewport.width(),
            viewport.height()
        );

        let origin = self.cells.origin();
        self.viewport = viewport;
        self.cells = CellStore::new(viewport.dim());
        self.cells.set_origin(origin);
        Ok(())
    }

    /// Recompute the visible set for the viewer's current position.
    ///
    /// Fails if the viewer's location is not covered by the grid centered on
    /// its focus, visibility is left cleared then.
    pub fn update(
        &mut self,
        map: &impl WorldMap,
        viewer: &impl Viewer,
    ) -> Result<(), FovError> {
        let origin = self.viewport.origin_for(viewer.focus());
        self.cells.set_origin(origin);
        self.cells.load(|p| !map.is_opaque(p));

        let loc = viewer.location();
        if !self.cells.contains(loc) {
            return Err(FovError::out_of_grid(loc));
        }

        self.shadowcast.compute(&mut self.cells, (loc - origin).into());

        log::trace!(
            "FieldOfView::update: {} cells visible from {loc}",
            self.cells.visible_points().count()
        );
        Ok(())
    }

    /// Mark cells along a line from `from` to `to` visible.
    ///
    /// The ray stops after marking the first cell the map says is opaque.
    /// Returns whether the ray reached `to`. Both endpoints must be inside
    /// the grid, nothing is marked otherwise.
    pub fn cast_ray(
        &mut self,
        map: &impl WorldMap,
        from: impl Into<IVec2>,
        to: impl Into<IVec2>,
    ) -> Result<bool, FovError> {
        let (from, to) = (from.into(), to.into());
        // Grid is convex, so the whole line is inside if the ends are.
        self.cells.map_coord_to_index(from)?;
        self.cells.map_coord_to_index(to)?;

        for p in bresenham_line(from, to) {
            self.cells.mark_visible(p)?;
            if map.is_opaque(p) {
                return Ok(p == to);
            }
        }
        Ok(true)
    }

    pub fn is_visible(&self, p: impl Into<IVec2>) -> Result<bool, FovError> {
        self.cells.is_visible(p)
    }

    pub fn map_coord_to_index(
        &self,
        p: impl Into<IVec2>,
    ) -> Result<usize, FovError> {
        self.cells.map_coord_to_index(p)
    }

    /// Underlying cell grid in world coordinates.
    pub fn cells(&self) -> &CellStore {
        &self.cells
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

    /// World position of the grid's top left cell.
    pub fn origin(&self) -> IVec2 {
        self.cells.origin()
    }

    pub fn left(&self) -> i32 {
        self.cells.left()
    }

    pub fn top(&self) -> i32 {
        self.cells.top()
    }
}
