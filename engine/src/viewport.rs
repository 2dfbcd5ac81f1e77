use glam::{ivec2, IVec2};

use crate::FovError;

/// Number of whole tiles needed to cover `resolution` pixels.
///
/// Adds a margin tile on both sides to cover partially scrolled tiles,
/// then rounds down to an odd number so there is a single center tile.
pub fn tiles_across(
    resolution: i32,
    tile_width: i32,
) -> Result<i32, FovError> {
    if tile_width < 1 {
        return Err(FovError::BadTileWidth(tile_width));
    }

    let Some(mut n) = resolution.div_euclid(tile_width).checked_add(2) else {
        return Err(FovError::ResolutionTooLarge(resolution));
    };
    if n % 2 == 0 {
        n -= 1;
    }
    Ok(n)
}

/// Visibility grid geometry derived from a display area.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Viewport {
    dim: IVec2,
}

impl Viewport {
    /// Fit a viewport to a display resolution in pixels.
    pub fn new(
        tile_width: i32,
        resolution: impl Into<IVec2>,
    ) -> Result<Viewport, FovError> {
        let resolution = resolution.into();
        let empty = || FovError::EmptyGrid {
            x: resolution.x,
            y: resolution.y,
        };

        if resolution.x < 0 || resolution.y < 0 {
            return Err(empty());
        }

        let dim = ivec2(
            tiles_across(resolution.x, tile_width)?,
            tiles_across(resolution.y, tile_width)?,
        );
        if dim.x < 1 || dim.y < 1 {
            return Err(empty());
        }
        // Flat cell indices must fit in an i32.
        if dim.x.checked_mul(dim.y).is_none() {
            return Err(FovError::GridTooLarge { x: dim.x, y: dim.y });
        }

        Ok(Viewport { dim })
    }

    /// Grid size in tiles, both components are odd.
    pub fn dim(&self) -> IVec2 {
        self.dim
    }

    pub fn width(&self) -> i32 {
        self.dim.x
    }

    pub fn height(&self) -> i32 {
        self.dim.y
    }

    /// World position of the top left grid cell when the grid is centered
    /// on `focus`.
    pub fn origin_for(&self, focus: impl Into<IVec2>) -> IVec2 {
        focus.into() - self.dim / 2
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn tile_counts() {
        // 800 / 32 = 25, plus margin is 27.
        assert_eq!(tiles_across(800, 32), Ok(27));
        // 600 / 32 = 18, plus margin is 20, rounded down to 19.
        assert_eq!(tiles_across(600, 32), Ok(19));
        assert_eq!(tiles_across(0, 32), Ok(1));
        assert_eq!(tiles_across(31, 32), Ok(1));
        assert_eq!(tiles_across(100, 0), Err(FovError::BadTileWidth(0)));
    }

    #[test]
    fn bad_resolution() {
        assert_eq!(
            Viewport::new(16, [-160, 100]),
            Err(FovError::EmptyGrid { x: -160, y: 100 })
        );
        assert_eq!(
            Viewport::new(-1, [160, 100]),
            Err(FovError::BadTileWidth(-1))
        );
    }

    #[test]
    fn huge_resolution() {
        assert_eq!(
            tiles_across(i32::MAX, 1),
            Err(FovError::ResolutionTooLarge(i32::MAX))
        );
        assert_eq!(
            Viewport::new(1, [i32::MAX, 1]),
            Err(FovError::ResolutionTooLarge(i32::MAX))
        );
        // Each axis fits but the cell count does not.
        assert_eq!(
            Viewport::new(1, [100_000, 100_000]),
            Err(FovError::GridTooLarge {
                x: 100_001,
                y: 100_001
            })
        );
        // Largest resolution that still fits.
        assert_eq!(tiles_across(i32::MAX - 2, 1), Ok(i32::MAX));
    }

    #[test]
    fn centering() {
        let viewport = Viewport::new(32, [800, 600]).unwrap();
        assert_eq!(viewport.dim(), ivec2(27, 19));
        assert_eq!(viewport.origin_for([0, 0]), ivec2(-13, -9));
        assert_eq!(viewport.origin_for([20, 5]), ivec2(7, -4));

        // Focus lands on the exact center cell.
        let focus = ivec2(-7, 3);
        let center = viewport.origin_for(focus) + viewport.dim() / 2;
        assert_eq!(center, focus);
    }

    #[quickcheck]
    fn always_odd(resolution: u16, tile_width: u8) -> bool {
        let tile_width = tile_width as i32 + 1;
        match tiles_across(resolution as i32, tile_width) {
            Ok(n) => n >= 1 && n % 2 == 1,
            Err(_) => false,
        }
    }
}
