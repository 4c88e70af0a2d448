//! Disjoint sets over point indices.

/// Parent-link forest; `-1` marks a set representative.
///
/// `find` follows parent links without compression and `union` attaches
/// without rank; point sets are small and the plain shape keeps the merge
/// structure observable in tests. Created fresh per algorithm invocation.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<i32>,
}

impl UnionFind {
    pub fn new(n: usize) -> UnionFind {
        UnionFind {
            parents: vec![-1; n],
        }
    }

    /// Representative of `child`'s set.
    pub fn find(&self, child: usize) -> usize {
        let mut cur = child;
        while self.parents[cur] != -1 {
            cur = self.parents[cur] as usize;
        }
        cur
    }

    /// Attach `a`'s representative under `b`'s, unconditionally. The caller
    /// must ensure `a` and `b` are in different sets.
    pub fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        debug_assert_ne!(ra, rb, "union of two members of one set");
        self.parents[ra] = rb as i32;
    }

    #[inline]
    pub fn in_same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
