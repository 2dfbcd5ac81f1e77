/// One eighth of the plane around a field-of-view origin.
///
/// An octant is scanned in lines moving away from the origin along the
/// major axis. Each line is swept along the minor axis starting from the
/// origin's minor coordinate. The signs give the step direction on both
/// axes, so `sign` also names the quadrant the octant belongs to.
///
/// ```notrust
///   major = y, sign = [1, -1]        major = x, sign = [1, -1]
///
///   . . 3 3 3 3                      . . . . . 3
///   . . 2 2 2 .                      . . . . 2 3
///   . . 1 1 . .                      . . . 1 2 3
///   . . @ . . .                      . . @ 1 2 3
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Octant {
    /// Axis index (0 for x, 1 for y) that is stepped once per line.
    pub major: usize,
    /// Step direction along x and y.
    pub sign: [i32; 2],
}

impl Octant {
    /// All octants, quadrant by quadrant, the octant with lines along y
    /// first in each quadrant.
    pub const ALL: [Octant; 8] = [
        Octant::new(1, [1, 1]),
        Octant::new(0, [1, 1]),
        Octant::new(1, [1, -1]),
        Octant::new(0, [1, -1]),
        Octant::new(1, [-1, 1]),
        Octant::new(0, [-1, 1]),
        Octant::new(1, [-1, -1]),
        Octant::new(0, [-1, -1]),
    ];

    pub const fn new(major: usize, sign: [i32; 2]) -> Octant {
        Octant { major, sign }
    }

    pub fn minor(self) -> usize {
        1 - self.major
    }

    /// Step along the major axis.
    pub fn d_major(self) -> i32 {
        self.sign[self.major]
    }

    /// Step along the minor axis.
    pub fn d_minor(self) -> i32 {
        self.sign[self.minor()]
    }

    /// Split a point into its (minor, major) components.
    pub fn split(self, p: [i32; 2]) -> (i32, i32) {
        (p[self.minor()], p[self.major])
    }

    /// Build a point from minor and major components.
    pub fn point(self, minor: i32, major: i32) -> [i32; 2] {
        let mut ret = [0; 2];
        ret[self.minor()] = minor;
        ret[self.major] = major;
        ret
    }
}
