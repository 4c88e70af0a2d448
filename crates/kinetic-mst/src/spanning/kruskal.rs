//! Kruskal's algorithm, plain and crossing-filtered.

use std::collections::VecDeque;

use super::candidates::{complete_graph, crossing_stable_graph};
use super::edge::{sort_by_weight, Edge};
use super::types::{SearchStats, SolveError, SpanningTree};
use super::union_find::UnionFind;
use crate::pointset::PointSet;

/// Euclidean minimum spanning tree at t=0 over the complete graph; crossings
/// are ignored.
pub fn kruskal(points: &PointSet) -> Result<SpanningTree, SolveError> {
    run(points.len(), complete_graph(points), false)
}

/// Kruskal over the crossing-stable candidate set; crossings between accepted
/// edges are not enforced.
pub fn crossing_stable_mst(points: &PointSet) -> Result<SpanningTree, SolveError> {
    run(points.len(), crossing_stable_graph(points), false)
}

/// Greedy planar spanning tree: crossing-stable candidates, and an edge is
/// only accepted if it crosses none of the previously accepted edges.
pub fn moving_kruskal(points: &PointSet) -> Result<SpanningTree, SolveError> {
    run(points.len(), crossing_stable_graph(points), true)
}

fn run(
    n: usize,
    mut candidates: Vec<Edge>,
    check_crossings: bool,
) -> Result<SpanningTree, SolveError> {
    sort_by_weight(&mut candidates);
    let mut candidates = VecDeque::from(candidates);

    let mut stats = SearchStats::default();
    let mut parents = UnionFind::new(n);
    let mut mst: Vec<Edge> = Vec::new();

    let mut complete = false;
    while let Some(next) = candidates.pop_front() {
        stats.edges_visited += 1;
        let (v, w) = (next.src, next.dest);
        // Accept iff the edge closes no cycle and, when planarity is
        // enforced, crosses nothing accepted so far.
        if !parents.in_same_set(v, w)
            && (!check_crossings || !next.crosses_any(&mst, &mut stats))
        {
            parents.union(v, w);
            mst.push(next);
        }
        if mst.len() + 1 >= n {
            complete = true;
            break;
        }
    }

    if !complete {
        return Err(SolveError::Infeasible);
    }
    Ok(SpanningTree::from_edges(n, mst, stats))
}
