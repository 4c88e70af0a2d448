//! Random point-set generation (bounded uniform draws + replay tokens).
//!
//! Purpose
//! - Provide reproducible input streams for the sampling experiments. Every
//!   draw can be addressed by a `ReplayToken` so individual samples are
//!   regenerable without replaying the whole stream.
//!
//! Model
//! - Coordinates and motion vectors are drawn uniformly from the `GenBounds`
//!   half-open ranges and truncated to integers.
//! - `enforce_general_position` re-draws points until all y-coordinates are
//!   unique and no three points are collinear.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::PointSet;
use crate::geom2::KineticPoint;

/// Bounds for point coordinates and motion vectors.
#[derive(Clone, Copy, Debug)]
pub struct GenBounds {
    pub x: (i32, i32),
    pub y: (i32, i32),
    pub dx: (i32, i32),
    pub dy: (i32, i32),
}

impl Default for GenBounds {
    fn default() -> Self {
        Self {
            x: (500, 1000),
            y: (0, 500),
            dx: (-500, 500),
            dy: (0, 0),
        }
    }
}

impl GenBounds {
    /// Same coordinate ranges, zero motion.
    pub fn without_motion(self) -> GenBounds {
        GenBounds {
            dx: (0, 0),
            dy: (0, 0),
            ..self
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn draw_coord(range: (i32, i32), rng: &mut StdRng) -> i32 {
    let (lo, hi) = range;
    (lo as f64 + rng.gen::<f64>() * (hi - lo) as f64) as i32
}

/// One uniformly drawn kinetic point.
pub fn draw_point(bounds: GenBounds, rng: &mut StdRng) -> KineticPoint {
    KineticPoint::new(
        draw_coord(bounds.x, rng),
        draw_coord(bounds.y, rng),
        draw_coord(bounds.dx, rng),
        draw_coord(bounds.dy, rng),
    )
}

/// Draw `n` points.
pub fn draw_point_set(n: usize, bounds: GenBounds, rng: &mut StdRng) -> PointSet {
    (0..n).map(|_| draw_point(bounds, rng)).collect()
}

/// Re-draw points until the set is in general position: all y-coordinates
/// unique, no three points collinear (pivot angle exactly 0 or ±180 degrees).
/// The offending later point is replaced and the scan restarts.
pub fn enforce_general_position(set: &mut PointSet, bounds: GenBounds, rng: &mut StdRng) {
    let pts = &mut set.points;
    let n = pts.len();
    'scan: loop {
        for i in 0..n {
            for j in (i + 1)..n {
                if pts[i].y == pts[j].y {
                    pts[j] = draw_point(bounds, rng);
                    continue 'scan;
                }
                for k in (j + 1)..n {
                    let (a, b, c) = (pts[i], pts[j], pts[k]);
                    let angle = a.angle(&b, &c);
                    if angle == 0.0 || angle == 180.0 || angle == -180.0 {
                        pts[k] = draw_point(bounds, rng);
                        continue 'scan;
                    }
                }
            }
        }
        return;
    }
}

/// Stacked gadget set that forces bad `moving_kruskal` results; `iterations`
/// copies of the 8-point gadget are stacked vertically.
pub fn worst_case_set(iterations: usize) -> PointSet {
    let mut set = PointSet::new();
    for i in 0..iterations as i32 {
        let lift = i * 70;
        set.push(KineticPoint::new(350, 70 + lift, 0, 0));
        set.push(KineticPoint::new(355, 40 + lift, 0, 0));
        set.push(KineticPoint::new(350, lift, 0, 0));
        set.push(KineticPoint::new(300, 40 + lift, 0, 0));
        set.push(KineticPoint::new(10, 20 + lift, 338, 0));
        set.push(KineticPoint::new(690, 20 + lift, -338, 0));
        set.push(KineticPoint::new(10, 40 + lift, 0, 0));
        set.push(KineticPoint::new(690, 40 + lift, 0, 0));
    }
    set
}
