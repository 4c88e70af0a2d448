//! Y-monotone baseline path.

use super::edge::Edge;
use super::types::{SearchStats, SpanningTree};
use crate::geom2::Segment;
use crate::pointset::PointSet;

/// Sort the points by initial position (y, then x) and connect neighbours
/// into a path. A cheap reference weight, not a planar-MST search.
///
/// Returns the sorted copy alongside the path; the path's edge indices refer
/// to the sorted order.
pub fn y_monotone_path(points: &PointSet) -> (PointSet, SpanningTree) {
    let sorted = points.sorted_by_start();
    let n = sorted.len();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    {
        let pts = sorted.points();
        for i in 0..n.saturating_sub(1) {
            edges.push(Edge::new(i, i + 1, Segment::new(pts[i], pts[i + 1])));
        }
    }
    let tree = SpanningTree::from_edges(n, edges, SearchStats::default());
    (sorted, tree)
}
