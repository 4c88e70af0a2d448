//! Kinetic points: integer positions with linear motion over t ∈ [0, 1].

use std::cmp::Ordering;

use nalgebra::Vector2;

/// 2D vector used for all derived (f64) geometry.
pub type Vec2 = Vector2<f64>;

/// A point with a fixed linear velocity over the normalized interval [0, 1].
///
/// Immutable once placed in a point set used for a search run; mutation only
/// happens while generating inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KineticPoint {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl KineticPoint {
    #[inline]
    pub fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        Self { x, y, dx, dy }
    }

    /// Position at t=0.
    #[inline]
    pub fn at_start(&self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }

    /// Position at t=1, motion applied in full.
    #[inline]
    pub fn at_end(&self) -> Vec2 {
        Vec2::new((self.x + self.dx) as f64, (self.y + self.dy) as f64)
    }

    /// The point advanced to its final position, with zero residual motion.
    #[inline]
    pub fn advanced(&self) -> KineticPoint {
        KineticPoint::new(self.x + self.dx, self.y + self.dy, 0, 0)
    }

    /// Signed angle at `self` between `p1` and `p2` at t=0, in degrees.
    pub fn angle(&self, p1: &KineticPoint, p2: &KineticPoint) -> f64 {
        angle_at(self.at_start(), p1.at_start(), p2.at_start())
    }

    /// Signed angle at `self` between `p1` and `p2` at t=1 (all three points
    /// fully moved), in degrees.
    pub fn angle_moved(&self, p1: &KineticPoint, p2: &KineticPoint) -> f64 {
        angle_at(self.at_end(), p1.at_end(), p2.at_end())
    }

    /// Position AND motion equal: the points stay coincident over all of
    /// [0, 1].
    #[inline]
    pub fn coincides(&self, other: &KineticPoint) -> bool {
        self == other
    }

    /// Position equal at t=0, motion ignored.
    #[inline]
    pub fn starts_equal(&self, other: &KineticPoint) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Initial-position ordering: y ascending, ties by x ascending.
    ///
    /// Deliberately not an `Ord` impl: points with equal position but
    /// different motion compare `Equal` here while being distinct values.
    #[inline]
    pub fn cmp_start(&self, other: &KineticPoint) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// Euclidean distance between two static positions.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    (b - a).norm()
}

/// Sign with an exact zero. `f64::signum` maps ±0.0 to ±1.0, which would
/// misclassify collinear configurations.
#[inline]
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Signed degree angle at `pivot` between `a` and `b`, via `atan2(det, dot)`
/// of the two pivot-anchored direction vectors.
fn angle_at(pivot: Vec2, a: Vec2, b: Vec2) -> f64 {
    let va = pivot - a;
    let vb = pivot - b;
    let dot = va.dot(&vb);
    let det = va.x * vb.y - va.y * vb.x;
    det.atan2(dot).to_degrees()
}
