//! Weighted quick-union with path compression.
//!
//! Elements are the integers `0..len`. Sets only ever merge; there is no
//! removal. `union` links the root of the smaller tree under the root of the
//! larger one, and `find` points every node it visits straight at the root,
//! so any sequence of operations costs amortized near-constant time per call.

use crate::error::{PercolationError, Result};

/// A forest of disjoint sets over `0..len`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Create `len` singleton sets.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::ElementOutOfRange`] if `len` is zero, since
    /// no element could ever be addressed.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(PercolationError::ElementOutOfRange { index: 0, len: 0 });
        }
        Ok(Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        })
    }

    /// Number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always false: a forest holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Root of the set containing `a`, compressing the path on the way.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::ElementOutOfRange`] if `a >= len`.
    pub fn find(&mut self, a: usize) -> Result<usize> {
        self.validate(a)?;
        Ok(self.find_root(a))
    }

    /// Same as [`find`](Self::find) for an id the caller knows is in range.
    pub(crate) fn find_root(&mut self, a: usize) -> usize {
        let mut root = a;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point every visited node at the root
        let mut node = a;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// No-op if they already share a root. On equal sizes `b`'s root is
    /// attached under `a`'s root.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::ElementOutOfRange`] if either id is out of
    /// range. Both ids are checked before anything is touched.
    pub fn union(&mut self, a: usize, b: usize) -> Result<()> {
        self.validate(a)?;
        self.validate(b)?;

        let root_a = self.find_root(a);
        let root_b = self.find_root(b);
        if root_a == root_b {
            return Ok(());
        }

        let (large, small) = if self.size[root_a] < self.size[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;

        Ok(())
    }

    /// Whether `a` and `b` belong to the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of elements in the set containing `a`.
    pub fn set_size(&mut self, a: usize) -> Result<usize> {
        let root = self.find(a)?;
        Ok(self.size[root])
    }

    fn validate(&self, a: usize) -> Result<()> {
        if a >= self.parent.len() {
            return Err(PercolationError::ElementOutOfRange {
                index: a,
                len: self.parent.len(),
            });
        }
        Ok(())
    }
}
