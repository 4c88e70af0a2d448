//! Point sets: the input collection every algorithm run reads from.
//!
//! A `PointSet` is immutable for the duration of one algorithm call; mutation
//! happens only while generating inputs (see [`gen`]).

pub mod gen;

use std::fmt;

use crate::geom2::{KineticPoint, Segment};

/// Input-validation failures on point-set queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSetError {
    /// Index query outside `0..len`.
    IndexOutOfRange { index: usize, len: usize },
    /// A `set_minus` argument point is not contained in the set.
    NotASubset,
}

impl fmt::Display for PointSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointSetError::IndexOutOfRange { index, len } => {
                write!(f, "point index {index} out of range for a set of {len}")
            }
            PointSetError::NotASubset => {
                write!(f, "argument is not a subset of the point set")
            }
        }
    }
}

impl std::error::Error for PointSetError {}

/// Ordered sequence of kinetic points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<KineticPoint>,
}

impl PointSet {
    pub fn new() -> PointSet {
        PointSet { points: Vec::new() }
    }

    pub fn from_points(points: Vec<KineticPoint>) -> PointSet {
        PointSet { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[KineticPoint] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, KineticPoint> {
        self.points.iter()
    }

    pub fn push(&mut self, p: KineticPoint) {
        self.points.push(p);
    }

    /// Point at `index`, validated (never clamped).
    pub fn get(&self, index: usize) -> Result<KineticPoint, PointSetError> {
        self.points
            .get(index)
            .copied()
            .ok_or(PointSetError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// The set without the given points, order preserved. Points are matched
    /// by coincidence (position and motion). Every argument point must be
    /// contained; validation happens before any computation.
    pub fn set_minus(&self, subset: &[KineticPoint]) -> Result<PointSet, PointSetError> {
        for q in subset {
            if !self.points.iter().any(|p| p.coincides(q)) {
                return Err(PointSetError::NotASubset);
            }
        }
        let points = self
            .points
            .iter()
            .filter(|p| !subset.iter().any(|q| p.coincides(q)))
            .copied()
            .collect();
        Ok(PointSet { points })
    }

    /// Does any point of the set, other than the segment's own endpoints,
    /// violate the segment's kinetic point criterion?
    pub fn violates_point_criterion(&self, seg: &Segment) -> bool {
        self.points.iter().any(|p| {
            !p.starts_equal(seg.start())
                && !p.starts_equal(seg.end())
                && seg.violates_point_criterion(p)
        })
    }

    /// Copy sorted by initial position (y ascending, ties by x).
    pub fn sorted_by_start(&self) -> PointSet {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.cmp_start(b));
        PointSet { points }
    }
}

impl FromIterator<KineticPoint> for PointSet {
    fn from_iter<I: IntoIterator<Item = KineticPoint>>(iter: I) -> Self {
        PointSet {
            points: iter.into_iter().collect(),
        }
    }
}
