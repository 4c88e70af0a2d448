//! Spanning trees on kinetic point sets.
//!
//! Points carry a fixed linear velocity over a normalized time interval
//! [0, 1]. The crate computes cheap spanning trees that avoid edge crossings
//! — at the initial instant or throughout the motion — both exactly (brute
//! force and branch-and-bound over planar spanning trees) and greedily
//! (Kruskal variants), and reports per-run cost counters so the algorithms
//! can be compared against each other.
//!
//! Layering: [`geom2`] holds the geometric predicates, [`pointset`] the input
//! collections and their generators, [`spanning`] the search algorithms.

pub mod api;
pub mod geom2;
pub mod pointset;
pub mod spanning;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{KineticPoint, Line2, Segment, Vec2};
    pub use crate::pointset::gen::{
        draw_point_set, enforce_general_position, worst_case_set, GenBounds, ReplayToken,
    };
    pub use crate::pointset::{PointSet, PointSetError};
    pub use crate::spanning::{
        branch_and_bound, complete_graph, crossing_stable_graph, crossing_stable_mst, kruskal,
        moving_kruskal, optimal_slow, solve_exact, y_monotone_path, Edge, ExactCfg, NoopObserver,
        SearchObserver, SearchStats, SolveError, SpanningTree, TreeDiff, UnionFind,
    };
}
