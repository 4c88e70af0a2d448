//! Segments between kinetic points: crossing tests and swept areas.
//!
//! Purpose
//! - `crosses`: static segment crossing at t=0, the planarity predicate the
//!   spanning-tree searches are built on.
//! - `violates_point_criterion`: does a moving point switch sides of the
//!   segment's support line during [0, 1]?
//! - `swept_area`: area enclosed between the initial and final positions of a
//!   segment whose endpoints move horizontally.
//!
//! Known approximations (kept deliberately, see DESIGN.md)
//! - The point criterion's y-range precondition assumes segment endpoints do
//!   not move vertically; vertical motion is silently treated as absent.
//! - The same-direction swept-area branch assumes the swept quadrilateral is
//!   simple.

use std::cmp::Ordering;

use super::line::Line2;
use super::point::{distance, sign, KineticPoint, Vec2};

/// Segment between two kinetic points, canonicalized at construction:
/// `start` is the endpoint ordering as smaller at t=0 (y, then x), so that
/// overlap and identity checks between collinear segments are
/// order-independent. Immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    start: KineticPoint,
    end: KineticPoint,
}

impl Segment {
    pub fn new(p1: KineticPoint, p2: KineticPoint) -> Segment {
        if p1.cmp_start(&p2) == Ordering::Less {
            Segment { start: p1, end: p2 }
        } else {
            Segment { start: p2, end: p1 }
        }
    }

    #[inline]
    pub fn start(&self) -> &KineticPoint {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &KineticPoint {
        &self.end
    }

    /// Euclidean length at t=0.
    #[inline]
    pub fn len_at_start(&self) -> f64 {
        distance(self.start.at_start(), self.end.at_start())
    }

    /// Support line at t=0.
    #[inline]
    fn line(&self) -> Line2 {
        Line2::through(self.start.x, self.start.y, self.end.x, self.end.y)
    }

    /// Do the segments share an endpoint position at t=0? Velocities do not
    /// matter here.
    fn shares_endpoint(&self, other: &Segment) -> bool {
        self.start.starts_equal(&other.start)
            || self.start.starts_equal(&other.end)
            || self.end.starts_equal(&other.start)
            || self.end.starts_equal(&other.end)
    }

    /// Is `p` strictly inside the axis-aligned rectangle spanned by the
    /// segment? The rectangle is open; degenerate segments require equality
    /// on the collapsed axis and a strict interior position on the other.
    fn contains_in_span(&self, p: Vec2) -> bool {
        let y_hi = self.start.y.max(self.end.y) as f64;
        let y_lo = self.start.y.min(self.end.y) as f64;
        let x_hi = self.start.x.max(self.end.x) as f64;
        let x_lo = self.start.x.min(self.end.x) as f64;

        if x_lo == x_hi {
            return p.x == x_hi && y_lo < p.y && p.y < y_hi;
        }
        if y_lo == y_hi {
            return p.y == y_hi && x_lo < p.x && p.x < x_hi;
        }
        x_lo < p.x && p.x < x_hi && y_lo < p.y && p.y < y_hi
    }

    /// Static crossing test at t=0.
    ///
    /// Segments on one support line cross iff their 1-D projections along it
    /// overlap. Segments sharing an endpoint only touch. Otherwise the
    /// support-line intersection must lie strictly inside both segments'
    /// spans, which rejects T-junctions exactly at an endpoint.
    pub fn crosses(&self, other: &Segment) -> bool {
        let g1 = self.line();
        let g2 = other.line();

        if g1.is_identical(&g2) {
            let (s1, e1) = (&self.start, &self.end);
            let (s2, e2) = (&other.start, &other.end);
            // Full, partial, and reverse overlap of the 1-D projections.
            return (s1.cmp_start(s2) != Ordering::Greater
                && e1.cmp_start(s2) == Ordering::Greater)
                || (e1.cmp_start(e2) != Ordering::Less && s1.cmp_start(e2) == Ordering::Less)
                || (s1.cmp_start(s2) == Ordering::Greater && e1.cmp_start(e2) == Ordering::Less);
        }

        if self.shares_endpoint(other) {
            return false;
        }

        match g1.intersection(&g2) {
            Some(p) => self.contains_in_span(p) && other.contains_in_span(p),
            None => false,
        }
    }

    /// Does `p` switch sides of the segment's support line during [0, 1]?
    ///
    /// The y-range precondition uses initial coordinates only: segment
    /// endpoints are assumed not to move vertically.
    pub fn violates_point_criterion(&self, p: &KineticPoint) -> bool {
        let (y_lo, y_hi) = if self.start.y <= self.end.y {
            (self.start.y, self.end.y)
        } else {
            (self.end.y, self.start.y)
        };
        if p.y < y_lo || p.y > y_hi {
            return false;
        }
        let side_before = sign(self.start.angle(&self.end, p));
        let side_after = sign(self.start.angle_moved(&self.end, p));
        side_before != side_after
    }

    /// Area enclosed by the segment's initial and final positions.
    ///
    /// Precondition: both endpoints move horizontally only (dy = 0).
    pub fn swept_area(&self) -> f64 {
        let s = self.start.at_start();
        let e = self.end.at_start();
        let start_m = self.start.advanced();
        let end_m = self.end.advanced();
        let s1 = start_m.at_start();
        let e1 = end_m.at_start();

        // Side lengths of the swept quadrilateral (start, start', end', end).
        let a = distance(s, s1);
        let b = distance(s1, e1);
        let c = distance(e1, e);
        let d = distance(e, s);

        let ds = sign(self.start.dx as f64);
        let de = sign(self.end.dx as f64);

        if ds == 0.0 && de == 0.0 {
            return 0.0;
        }
        if ds == 0.0 {
            // One pinned endpoint: the quadrilateral collapses to a triangle.
            let sp = (b + c + d) / 2.0;
            return (sp * (sp - b) * (sp - c) * (sp - d)).sqrt();
        }
        if de == 0.0 {
            let sp = (a + b + d) / 2.0;
            return (sp * (sp - a) * (sp - b) * (sp - d)).sqrt();
        }

        if ds == de {
            // Same direction: the swept region is a simple quadrilateral.
            // The turn-angle pair depends on which endpoint ends up on the
            // geometric right-hand side.
            let start_bottom = self.start.y < self.end.y;
            let right_moving = self.start.dx > 0;
            let (alpha, gamma) = if start_bottom ^ right_moving {
                (
                    self.start.angle(&self.end, &start_m),
                    end_m.angle(&start_m, &self.end),
                )
            } else {
                (
                    self.start.angle(&start_m, &self.end),
                    end_m.angle(&self.end, &start_m),
                )
            };
            // Bretschneider's formula for the general quadrilateral.
            let sp = (a + b + c + d) / 2.0;
            let opposite = (alpha + gamma).to_radians();
            return ((sp - a) * (sp - b) * (sp - c) * (sp - d)
                - (a * b * c * d / 2.0) * (1.0 + opposite.cos()))
            .sqrt();
        }

        // Opposite directions: the segment crosses its own final position.
        // Split at the intersection of the two support lines and sum the two
        // triangles.
        let g = self.line();
        let g1 = Line2::through(start_m.x, start_m.y, end_m.x, end_m.y);
        let crossing = match g.intersection(&g1) {
            Some(p) => p,
            // Parallel support lines cannot occur under opposite horizontal
            // motion of distinct endpoints.
            None => return 0.0,
        };

        let tb = distance(s1, crossing);
        let tc = distance(crossing, s);
        let sp = (a + tb + tc) / 2.0;
        let area1 = (sp * (sp - a) * (sp - tb) * (sp - tc)).sqrt();

        let ub = distance(e1, crossing);
        let uc = distance(crossing, e);
        let sq = (c + ub + uc) / 2.0;
        let area2 = (sq * (sq - c) * (sq - ub) * (sq - uc)).sqrt();

        area1 + area2
    }
}
