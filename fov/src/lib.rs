//! Field-of-view computation over rectangular cell fields.

mod octant;
pub use octant::Octant;

mod precise;
pub use precise::{PreciseShadowcast, MAX_RADIUS};

/// A rectangular field of cells that light can be cast over.
///
/// Positions are local to the field, valid positions are
/// `0 <= p[0] < dim()[0]` and `0 <= p[1] < dim()[1]`. Field-of-view
/// algorithms only call the accessors with valid positions.
pub trait Field {
    /// Width and height of the field.
    fn dim(&self) -> [i32; 2];

    /// Whether light passes through the cell.
    fn is_transparent(&self, p: [i32; 2]) -> bool;

    fn is_visible(&self, p: [i32; 2]) -> bool;

    fn set_visible(&mut self, p: [i32; 2], visible: bool);
}
