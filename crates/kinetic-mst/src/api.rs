//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a stable public API. It is a convenience surface for
//!   project-internal callers (the cli crate, benches, experiments).
//! - Prefer these re-exports for clarity and consistency across experiments.

// Kinetic geometry
pub use crate::geom2::{distance, sign, KineticPoint, Line2, Segment, Vec2};
// Point sets and generation
pub use crate::pointset::gen::{
    draw_point, draw_point_set, enforce_general_position, worst_case_set, GenBounds, ReplayToken,
};
pub use crate::pointset::{PointSet, PointSetError};
// Spanning-tree algorithms
pub use crate::spanning::{
    branch_and_bound, complete_graph, crossing_stable_graph, crossing_stable_mst, kruskal,
    moving_kruskal, optimal_slow, solve_exact, y_monotone_path, Edge, ExactCfg, NoopObserver,
    SearchObserver, SearchStats, SolveError, SpanningTree, TreeDiff, UnionFind,
};
