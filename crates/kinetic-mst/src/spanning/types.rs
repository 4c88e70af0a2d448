//! Result and bookkeeping types shared by the spanning-tree algorithms.

use std::fmt;

use super::edge::Edge;
use crate::geom2::KineticPoint;

/// Cost counters reported by every algorithm run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate edges popped from the sorted list.
    pub edges_visited: u64,
    /// Pairwise crossing tests performed while enforcing planarity.
    pub crossing_checks: u64,
}

/// Failures of a spanning-tree computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The candidate list ran out before n−1 edges were accepted: no spanning
    /// tree exists on this candidate set. Fatal for the call.
    Infeasible,
    /// Rebuilding an alternative branch produced a cyclic edge set. This
    /// signals a logic defect, never a property of the input.
    CorruptBranch { src: usize, dest: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Infeasible => write!(f, "no spanning tree possible"),
            SolveError::CorruptBranch { src, dest } => write!(
                f,
                "edge ({src}, {dest}) closed a cycle while rebuilding a branch tree"
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// A spanning edge set plus the counters of the run that produced it.
/// Read-only after the producing call returns.
#[derive(Clone, Debug, Default)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    /// Neighbour lists over point indices, rebuilt from `edges`.
    pub adj: Vec<Vec<usize>>,
    pub stats: SearchStats,
}

impl SpanningTree {
    /// Build from a final edge set, wiring the adjacency lists.
    pub fn from_edges(n: usize, edges: Vec<Edge>, stats: SearchStats) -> SpanningTree {
        let mut adj = vec![Vec::new(); n];
        for e in &edges {
            adj[e.src].push(e.dest);
            adj[e.dest].push(e.src);
        }
        SpanningTree { edges, adj, stats }
    }

    /// Sum of edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Deviations from another tree computed on the same point set, by
    /// undirected endpoint-index comparison.
    pub fn diff(&self, other: &SpanningTree) -> TreeDiff {
        let missing = other
            .edges
            .iter()
            .filter(|e| !self.edges.iter().any(|m| m.same_pair(e)))
            .cloned()
            .collect();
        let additional = self
            .edges
            .iter()
            .filter(|e| !other.edges.iter().any(|m| m.same_pair(e)))
            .cloned()
            .collect();
        TreeDiff {
            missing,
            additional,
        }
    }

    /// Is there an edge whose endpoints stay coincident with `a` and `b`
    /// throughout the entire motion?
    pub fn contains_edge(&self, a: &KineticPoint, b: &KineticPoint) -> bool {
        self.edges.iter().any(|e| {
            (e.seg.start().coincides(a) && e.seg.end().coincides(b))
                || (e.seg.start().coincides(b) && e.seg.end().coincides(a))
        })
    }
}

/// Differences between two spanning trees on the same point set.
#[derive(Clone, Debug, Default)]
pub struct TreeDiff {
    /// Edges of the other tree absent from this one.
    pub missing: Vec<Edge>,
    /// Edges of this tree absent from the other.
    pub additional: Vec<Edge>,
}

impl TreeDiff {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.additional.is_empty()
    }
}
