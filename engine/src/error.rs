use thiserror::Error;

/// Errors from visibility grid setup and grid coordinate access.
///
/// All of these are caller mistakes rather than runtime data errors, the
/// grid never grows to fit a coordinate.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum FovError {
    #[error("tile width must be positive, got {0}")]
    BadTileWidth(i32),

    #[error("scan radius must be positive, got {0}")]
    BadRadius(i32),

    #[error("resolution {x}x{y} does not fit a visibility grid")]
    EmptyGrid { x: i32, y: i32 },

    #[error("resolution {0} needs more tiles than an axis can hold")]
    ResolutionTooLarge(i32),

    #[error("visibility grid of {x}x{y} tiles has too many cells")]
    GridTooLarge { x: i32, y: i32 },

    #[error("coordinate ({x}, {y}) is outside the visibility grid")]
    OutOfGrid { x: i32, y: i32 },
}

impl FovError {
    pub(crate) fn out_of_grid(p: glam::IVec2) -> Self {
        FovError::OutOfGrid { x: p.x, y: p.y }
    }
}
