//! Exact planar minimum spanning trees: brute force and branch-and-bound.
//!
//! One recursive procedure explores a binary decision tree: when the cheapest
//! viable candidate crosses the partial tree, branch A rejects it and branch
//! B forces it, purging every tree edge it crosses. With pruning enabled the
//! incumbent weight bounds partial solutions — the best-case completion adds
//! the cheapest remaining candidates, valid because candidates stay sorted
//! ascending.
//!
//! Candidate and deleted sets are duplicated per branch as index tags into
//! the sorted edge arena, so sibling branches never share mutable state.
//! Progress is reported to an injected [`SearchObserver`]; the search itself
//! stays pure.

use std::collections::VecDeque;

use super::candidates::crossing_stable_graph;
use super::edge::{sort_by_weight, Edge};
use super::types::{SearchStats, SolveError, SpanningTree};
use super::union_find::UnionFind;
use crate::pointset::PointSet;

/// Exact-search configuration.
#[derive(Clone, Copy, Debug)]
pub struct ExactCfg {
    /// Prune branches whose best-case completion cannot beat the incumbent.
    /// Never changes the optimum, only the edges-visited counter.
    pub prune: bool,
}

impl Default for ExactCfg {
    fn default() -> Self {
        Self { prune: true }
    }
}

/// Observer for search progress; every hook defaults to a no-op.
pub trait SearchObserver {
    fn edge_visited(&mut self, _edge: &Edge) {}
    fn edge_accepted(&mut self, _edge: &Edge) {}
    fn branched(&mut self, _edge: &Edge) {}
    fn bound_tightened(&mut self, _bound: f64) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Brute-force planar MST (no pruning); the correctness baseline.
pub fn optimal_slow(points: &PointSet) -> Result<Option<SpanningTree>, SolveError> {
    solve_exact(points, ExactCfg { prune: false }, &mut NoopObserver)
}

/// Branch-and-bound planar MST: identical optimum, fewer edges visited.
pub fn branch_and_bound(points: &PointSet) -> Result<Option<SpanningTree>, SolveError> {
    solve_exact(points, ExactCfg { prune: true }, &mut NoopObserver)
}

/// Exact planar MST over the crossing-stable candidate set.
///
/// `Ok(None)` signals global infeasibility (no planar spanning tree on the
/// candidate set); `Err` signals an internal invariant violation, never a
/// property of the input.
pub fn solve_exact(
    points: &PointSet,
    cfg: ExactCfg,
    observer: &mut dyn SearchObserver,
) -> Result<Option<SpanningTree>, SolveError> {
    let n = points.len();
    let mut edges = crossing_stable_graph(points);
    sort_by_weight(&mut edges);

    let all: VecDeque<u32> = (0..edges.len() as u32).collect();
    let deleted = vec![false; edges.len()];

    let mut search = Search {
        n,
        edges: &edges,
        cfg,
        stats: SearchStats::default(),
        observer,
    };
    let result = search.solve(Vec::new(), all, UnionFind::new(n), deleted, f64::INFINITY)?;
    let stats = search.stats;

    Ok(result.map(|ids| {
        let tree = ids.iter().map(|&i| edges[i as usize].clone()).collect();
        SpanningTree::from_edges(n, tree, stats)
    }))
}

/// Search context: the sorted candidate arena plus accumulators.
struct Search<'a> {
    n: usize,
    edges: &'a [Edge],
    cfg: ExactCfg,
    stats: SearchStats,
    observer: &'a mut dyn SearchObserver,
}

impl<'a> Search<'a> {
    fn total(&self, ids: &[u32]) -> f64 {
        ids.iter().map(|&i| self.edges[i as usize].weight).sum()
    }

    /// Counted crossing test of `edge` against the tagged tree edges,
    /// short-circuiting on the first hit.
    fn crosses_any_in(&mut self, edge: &Edge, ids: &[u32]) -> bool {
        for &i in ids {
            self.stats.crossing_checks += 1;
            if edge.crosses(&self.edges[i as usize]) {
                return true;
            }
        }
        false
    }

    /// One recursion step; see the module header for the branch semantics.
    /// `Ok(None)` is an infeasible branch (infinite effective weight).
    fn solve(
        &mut self,
        mut mst: Vec<u32>,
        mut candidates: VecDeque<u32>,
        mut union_find: UnionFind,
        deleted: Vec<bool>,
        mut bound: f64,
    ) -> Result<Option<Vec<u32>>, SolveError> {
        let edges = self.edges;
        let target = self.n.saturating_sub(1);

        if mst.len() == target {
            return Ok(Some(mst));
        }
        if candidates.len() < target - mst.len() {
            return Ok(None);
        }
        if self.cfg.prune {
            let open = target - mst.len();
            let best_case = self.total(&mst)
                + candidates
                    .iter()
                    .take(open)
                    .map(|&i| edges[i as usize].weight)
                    .sum::<f64>();
            if best_case >= bound {
                return Ok(None);
            }
        }

        self.stats.edges_visited += 1;
        let Some(next) = candidates.pop_front() else {
            return Ok(None);
        };
        let edge = &edges[next as usize];
        self.observer.edge_visited(edge);
        let (v, w) = (edge.src, edge.dest);

        if union_find.in_same_set(v, w) {
            return self.solve(mst, candidates, union_find, deleted, bound);
        }

        if !self.crosses_any_in(edge, &mst) {
            self.observer.edge_accepted(edge);
            mst.push(next);
            union_find.union(v, w);
            return self.solve(mst, candidates, union_find, deleted, bound);
        }

        // The cheapest viable edge crosses the partial tree: branch.
        self.observer.branched(edge);

        // Branch A: leave the edge out.
        let st1 = self.solve(
            mst.clone(),
            candidates.clone(),
            union_find.clone(),
            deleted.clone(),
            bound,
        )?;
        let weight1 = st1.as_ref().map_or(f64::INFINITY, |t| self.total(t));
        if self.cfg.prune && weight1 < bound {
            bound = weight1;
            self.observer.bound_tightened(bound);
        }

        // Branch B: force the edge; every tree edge it crosses moves into the
        // deleted set for this branch and its descendants.
        let mut st2: Vec<u32> = Vec::with_capacity(mst.len() + 1);
        let mut deleted2 = deleted;
        for &i in &mst {
            if edges[next as usize].crosses(&edges[i as usize]) {
                deleted2[i as usize] = true;
            } else {
                st2.push(i);
            }
        }
        st2.push(next);

        // The purged tree must rebuild without closing a cycle.
        let mut union_find2 = UnionFind::new(self.n);
        for &i in &st2 {
            let e = &edges[i as usize];
            if union_find2.in_same_set(e.src, e.dest) {
                return Err(SolveError::CorruptBranch {
                    src: e.src,
                    dest: e.dest,
                });
            }
            union_find2.union(e.src, e.dest);
        }

        // Fresh candidates: the arena order (still sorted ascending) minus
        // the branch tree minus everything deleted.
        let mut in_st2 = vec![false; edges.len()];
        for &i in &st2 {
            in_st2[i as usize] = true;
        }
        let candidates2: VecDeque<u32> = (0..edges.len() as u32)
            .filter(|&i| !in_st2[i as usize] && !deleted2[i as usize])
            .collect();

        let st2 = self.solve(st2, candidates2, union_find2, deleted2, bound)?;
        let weight2 = st2.as_ref().map_or(f64::INFINITY, |t| self.total(t));

        // Ties favor the branch that rejected the edge.
        Ok(if weight1 <= weight2 { st1 } else { st2 })
    }
}
