//! Union-Find (disjoint sets) over dense vertex ids.

use st_core::{StError, StResult, VertexId};

/// Disjoint-set structure tracking which vertices are already connected.
///
/// Sized to the vertex count at construction; one instance is built per
/// spanning-forest computation and discarded afterwards. Uses path
/// compression and union by rank, so `find` is O(1) amortized.
#[derive(Debug)]
pub struct UnionFind {
    /// Parent slot per vertex; a self-parent is a set representative.
    parent: Vec<u32>,
    /// Approximate subtree height, used only to pick the union direction.
    rank: Vec<u32>,
}

impl UnionFind {
    /// Create `n` singleton sets: every vertex its own representative,
    /// rank 0.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements (not sets).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn slot(&self, v: VertexId) -> StResult<usize> {
        let i = v.as_usize();
        if i >= self.parent.len() {
            return Err(StError::IndexOob {
                what: "vertex",
                index: i,
                len: self.parent.len(),
            });
        }
        Ok(i)
    }

    /// Representative of the set containing `v`.
    ///
    /// Every vertex visited on the way up is re-pointed directly at the
    /// representative (path compression). A vertex outside the structure
    /// is a lookup error, never silently registered.
    pub fn find(&mut self, v: VertexId) -> StResult<VertexId> {
        let i = self.slot(v)?;
        Ok(VertexId::from_index(self.find_slot(i) as u32))
    }

    fn find_slot(&mut self, i: usize) -> usize {
        let p = self.parent[i] as usize;
        if p == i {
            return i;
        }
        let root = self.find_slot(p);
        self.parent[i] = root as u32;
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Roots are resolved internally, so callers may pass arbitrary
    /// vertices. The lower-rank root is attached under the higher-rank
    /// one; on a rank tie `a`'s root survives and its rank increments.
    /// Returns `false` when the two were already in the same set.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> StResult<bool> {
        let sa = self.slot(a)?;
        let sb = self.slot(b)?;
        let ra = self.find_slot(sa);
        let rb = self.find_slot(sb);
        if ra == rb {
            return Ok(false);
        }
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb as u32;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra as u32;
        } else {
            self.parent[rb] = ra as u32;
            self.rank[ra] += 1;
        }
        Ok(true)
    }

    /// True when `a` and `b` are in the same set.
    pub fn connected(&mut self, a: VertexId, b: VertexId) -> StResult<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }
}
