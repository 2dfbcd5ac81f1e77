use crate::{Field, Octant};

/// Default scan distance limit in cells.
pub const MAX_RADIUS: i32 = 200;

/// Angular range in an octant shadowed by an opaque cell.
///
/// Slopes are normalized so that 0.0 points straight along the major axis
/// and 1.0 points along the octant's diagonal.
#[derive(Copy, Clone, PartialEq, Debug)]
struct Obstacle {
    start: f64,
    end: f64,
}

/// Restrictive precise angle shadowcasting.
///
/// Each octant is scanned line by line moving away from the origin. At
/// distance `n` the octant's slope range is split into `n` equal slices, one
/// per cell on the line. Opaque cells that get lit record their slope slice
/// as an obstacle, and cells on later lines are shadowed when their slice
/// is covered by the obstacles seen so far.
///
/// The scanner keeps its obstacle buffer between runs so that repeated
/// computations over the same field do not reallocate.
#[derive(Clone, Debug)]
pub struct PreciseShadowcast {
    /// How many lines away from origin each octant scan may go.
    pub max_radius: i32,
    /// Whether opaque cells that block light are themselves visible.
    pub light_walls: bool,
    obstacles: Vec<Obstacle>,
}

impl Default for PreciseShadowcast {
    fn default() -> Self {
        PreciseShadowcast::new(MAX_RADIUS, true)
    }
}

impl PreciseShadowcast {
    pub fn new(max_radius: i32, light_walls: bool) -> Self {
        PreciseShadowcast {
            max_radius,
            light_walls,
            obstacles: Vec::new(),
        }
    }

    /// Capacity reserved for obstacles in a single octant.
    pub fn obstacle_capacity(&self) -> usize {
        self.obstacles.capacity()
    }

    /// Mark everything visible from `origin` in the field.
    ///
    /// Visibility is only ever added, clear the field's visibility before
    /// calling this to get the exact visible set. Origin must lie inside the
    /// field.
    pub fn compute(&mut self, field: &mut impl Field, origin: [i32; 2]) {
        let [w, h] = field.dim();
        debug_assert!(
            (0..w).contains(&origin[0]) && (0..h).contains(&origin[1]),
            "PreciseShadowcast: origin {origin:?} outside {w}x{h} field"
        );

        // Generous estimate of obstacles in one octant. Grows the buffer
        // only when a larger field than before shows up.
        let max_obstacles = (w.max(0) as usize)
            .saturating_mul(h.max(0) as usize)
            .div_ceil(7);
        if max_obstacles > self.obstacles.capacity() {
            self.obstacles.clear();
            self.obstacles.reserve_exact(max_obstacles);
        }

        field.set_visible(origin, true);

        for octant in Octant::ALL {
            self.scan_octant(field, origin, octant);
        }
    }

    fn scan_octant(
        &mut self,
        field: &mut impl Field,
        origin: [i32; 2],
        octant: Octant,
    ) {
        let (d_minor, d_major) = (octant.d_minor(), octant.d_major());
        let (minor_len, major_len) = octant.split(field.dim());
        let (origin_minor, origin_major) = octant.split(origin);

        self.obstacles.clear();
        let mut obstacles_in_last_line = 0;
        let mut min_angle = 0.0;
        let mut iteration = 1;

        let mut major = origin_major + d_major;
        let mut done = !(0..major_len).contains(&major);

        while !done {
            let slopes_per_cell = 1.0 / iteration as f64;
            let half_slopes = slopes_per_cell * 0.5;
            let mut processed_cell =
                ((min_angle + half_slopes) / slopes_per_cell) as i32;
            let line = (origin_minor - iteration).max(0)
                ..=(origin_minor + iteration).min(minor_len - 1);

            done = true;

            let mut minor = origin_minor + processed_cell * d_minor;
            while line.contains(&minor) {
                let p = octant.point(minor, major);
                let transparent = field.is_transparent(p);

                let centre_slope = processed_cell as f64 * slopes_per_cell;
                let start_slope = centre_slope - half_slopes;
                let end_slope = centre_slope + half_slopes;

                let mut visible = true;
                let mut extended = false;

                if obstacles_in_last_line > 0 && !field.is_visible(p) {
                    // Cell right behind and the cell diagonally behind
                    // towards the origin line.
                    let behind = octant.point(minor, major - d_major);
                    let corner = minor - d_minor;

                    if blocks(field, behind)
                        && (0..minor_len).contains(&corner)
                        && blocks(field, octant.point(corner, major - d_major))
                    {
                        visible = false;
                    } else {
                        for obstacle in
                            &mut self.obstacles[..obstacles_in_last_line]
                        {
                            if !visible {
                                break;
                            }

                            if obstacle.start > end_slope
                                || obstacle.end < start_slope
                            {
                                continue;
                            }

                            if transparent {
                                if centre_slope > obstacle.start
                                    && centre_slope < obstacle.end
                                {
                                    visible = false;
                                }
                            } else if start_slope >= obstacle.start
                                && end_slope <= obstacle.end
                            {
                                visible = false;
                            } else {
                                obstacle.start = obstacle.start.min(start_slope);
                                obstacle.end = obstacle.end.max(end_slope);
                                extended = true;
                            }
                        }
                    }
                }

                if visible {
                    field.set_visible(p, true);
                    done = false;

                    if !transparent {
                        if min_angle >= start_slope {
                            // Wall straight ahead narrows the whole cone.
                            min_angle = end_slope;
                            if processed_cell == iteration {
                                done = true;
                            }
                        } else if !extended {
                            self.obstacles.push(Obstacle {
                                start: start_slope,
                                end: end_slope,
                            });
                        }

                        if !self.light_walls {
                            field.set_visible(p, false);
                        }
                    }
                }

                processed_cell += 1;
                minor += d_minor;
            }

            if iteration == self.max_radius {
                done = true;
            }
            iteration += 1;
            obstacles_in_last_line = self.obstacles.len();
            major += d_major;
            if !(0..major_len).contains(&major) {
                done = true;
            }
        }
    }
}

/// Cell stops light either by being opaque or by being in shadow itself.
fn blocks(field: &impl Field, p: [i32; 2]) -> bool {
    !field.is_visible(p) || !field.is_transparent(p)
}
