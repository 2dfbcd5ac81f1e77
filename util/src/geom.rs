use glam::IVec2;

/// 4 directions, clock face order.
pub const DIR_4: [IVec2; 4] = [
    IVec2::from_array([0, -1]),
    IVec2::from_array([1, 0]),
    IVec2::from_array([0, 1]),
    IVec2::from_array([-1, 0]),
];

pub trait VecExt: Sized + Default {
    /// Absolute size of vector in taxicab metric.
    fn taxi_len(&self) -> i32;

    /// Absolute size of vector in chessboard metric.
    fn chebyshev_len(&self) -> i32;

    /// Vec points to an adjacent cell, left, right, up or down.
    fn is_adjacent(&self) -> bool {
        self.taxi_len() == 1
    }
}

impl VecExt for IVec2 {
    fn taxi_len(&self) -> i32 {
        self[0].abs() + self[1].abs()
    }

    fn chebyshev_len(&self) -> i32 {
        self[0].abs().max(self[1].abs())
    }
}

/// Rasterize a line from `a` to `b`, both ends included.
///
/// The axis with the longer extent advances by one on every step, an
/// integer error accumulator decides when the shorter axis steps. The
/// result always has `max(|dx|, |dy|) + 1` points and consecutive points
/// are 8-adjacent.
pub fn bresenham_line(
    a: impl Into<IVec2>,
    b: impl Into<IVec2>,
) -> impl Iterator<Item = IVec2> {
    let (a, b): (IVec2, IVec2) = (a.into(), b.into());

    let step = (b - a).signum();
    let d = (b - a).abs();
    let (major, minor) = if d.y > d.x { (1, 0) } else { (0, 1) };

    let mut p = a;
    let mut err = d[major] / 2;

    (0..=d[major]).map(move |i| {
        if i > 0 {
            p[major] += step[major];
            err -= d[minor];
            if err < 0 {
                p[minor] += step[minor];
                err += d[major];
            }
        }
        p
    })
}

#[cfg(test)]
mod test {
    use glam::ivec2;
    use quickcheck_macros::quickcheck;

    use super::*;

    fn line(a: [i32; 2], b: [i32; 2]) -> Vec<[i32; 2]> {
        bresenham_line(a, b).map(|p| p.into()).collect()
    }

    #[test]
    fn degenerate_line() {
        assert_eq!(line([3, 4], [3, 4]), vec![[3, 4]]);
    }

    #[test]
    fn straight_lines() {
        assert_eq!(line([0, 0], [3, 0]), vec![[0, 0], [1, 0], [2, 0], [3, 0]]);
        assert_eq!(line([0, 0], [0, -2]), vec![[0, 0], [0, -1], [0, -2]]);
        assert_eq!(line([2, 2], [0, 0]), vec![[2, 2], [1, 1], [0, 0]]);
    }

    #[test]
    fn shallow_line() {
        assert_eq!(
            line([0, 0], [4, 2]),
            vec![[0, 0], [1, 0], [2, 1], [3, 1], [4, 2]]
        );
        // Decreasing x steps the minor axis towards the target too.
        assert_eq!(
            line([4, 2], [0, 0]),
            vec![[4, 2], [3, 2], [2, 1], [1, 1], [0, 0]]
        );
    }

    #[test]
    fn steep_line() {
        assert_eq!(
            line([0, 0], [-1, 3]),
            vec![[0, 0], [0, 1], [-1, 2], [-1, 3]]
        );
    }

    #[test]
    fn metrics() {
        assert_eq!(ivec2(-3, 2).taxi_len(), 5);
        assert_eq!(ivec2(-3, 2).chebyshev_len(), 3);
        assert!(DIR_4.iter().all(|d| d.is_adjacent()));
        assert!(!ivec2(1, 1).is_adjacent());
    }

    #[quickcheck]
    fn line_reaches_target(ax: i8, ay: i8, bx: i8, by: i8) -> bool {
        let (a, b) = (
            ivec2(ax as i32, ay as i32),
            ivec2(bx as i32, by as i32),
        );
        let points: Vec<IVec2> = bresenham_line(a, b).collect();

        points.len() as i32 == (b - a).chebyshev_len() + 1
            && points.first() == Some(&a)
            && points.last() == Some(&b)
            && points.windows(2).all(|w| (w[1] - w[0]).chebyshev_len() == 1)
    }
}
