//! The n-by-n percolation grid.
//!
//! Sites are addressed by 1-indexed `(row, col)` and stored flat under the id
//! `(row - 1) * n + col`. Two virtual sites sit outside the grid: id `0` is
//! joined to every open site in the top row and id `n² + 1` to every open site
//! in the bottom row, so "does some top site reach some bottom site" becomes a
//! single root comparison.
//!
//! A second forest without the bottom virtual site answers fullness queries.
//! Sharing one forest would let an open bottom-row site look full through the
//! bottom boundary once the grid percolates, even when no open path joins it
//! to the top.

use crate::disjoint_set::DisjointSet;
use crate::error::{PercolationError, Result};

/// Incremental connectivity tracker for an n-by-n grid of sites.
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    /// Open state by site id; slot 0 is the unused virtual top.
    sites: Vec<bool>,
    open_count: usize,
    /// Sites plus both virtual boundaries; drives `percolates`.
    connectivity: DisjointSet,
    /// Sites plus the virtual top only; drives `is_full`.
    fullness: DisjointSet,
    virtual_bottom: usize,
}

impl Percolation {
    /// Id of the virtual site joined to every open top-row site.
    pub const VIRTUAL_TOP: usize = 0;

    /// Create an n-by-n grid with every site closed.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidGridSize`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidGridSize { n });
        }
        let sites = n
            .checked_mul(n)
            .ok_or(PercolationError::InvalidGridSize { n })?;

        Ok(Self {
            n,
            sites: vec![false; sites + 1],
            open_count: 0,
            connectivity: DisjointSet::new(sites + 2)?,
            fullness: DisjointSet::new(sites + 1)?,
            virtual_bottom: sites + 1,
        })
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Id of the virtual site joined to every open bottom-row site (`n² + 1`).
    pub fn virtual_bottom(&self) -> usize {
        self.virtual_bottom
    }

    /// Flat id of `(row, col)`, in `[1, n²]`.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::SiteOutOfBounds`] outside `[1, n] x [1, n]`.
    pub fn site_id(&self, row: usize, col: usize) -> Result<usize> {
        if row == 0 || row > self.n || col == 0 || col > self.n {
            return Err(PercolationError::SiteOutOfBounds { row, col, n: self.n });
        }
        Ok((row - 1) * self.n + col)
    }

    /// Open the site `(row, col)` if it is not open already.
    ///
    /// Joins the site with each open neighbour (no wraparound) and with the
    /// virtual boundary of its row if it sits in the first or last row.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.site_id(row, col)?;
        if self.sites[site] {
            return Ok(());
        }
        self.sites[site] = true;
        self.open_count += 1;

        if row == 1 {
            self.join(site, Self::VIRTUAL_TOP)?;
        }
        if row == self.n {
            self.connectivity.union(site, self.virtual_bottom)?;
        }

        let neighbours = [
            (row > 1).then(|| (row - 1, col)),
            (row < self.n).then(|| (row + 1, col)),
            (col > 1).then(|| (row, col - 1)),
            (col < self.n).then(|| (row, col + 1)),
        ];
        for (r, c) in neighbours.into_iter().flatten() {
            let neighbour = self.site_id(r, c)?;
            if self.sites[neighbour] {
                self.join(site, neighbour)?;
            }
        }

        Ok(())
    }

    /// Whether `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.site_id(row, col)?;
        Ok(self.sites[site])
    }

    /// Whether `(row, col)` is open and joined to the top row by open sites.
    ///
    /// Takes `&mut self` because lookups compress union-find paths.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.site_id(row, col)?;
        if !self.sites[site] {
            return Ok(false);
        }
        self.fullness.connected(site, Self::VIRTUAL_TOP)
    }

    /// Number of open sites. Constant time.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Whether an open path joins the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        // Both virtual ids are in range by construction
        self.connectivity.find_root(Self::VIRTUAL_TOP)
            == self.connectivity.find_root(self.virtual_bottom)
    }

    fn join(&mut self, a: usize, b: usize) -> Result<()> {
        self.connectivity.union(a, b)?;
        self.fullness.union(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_ids_are_row_major() {
        let grid = Percolation::new(3).unwrap();
        assert_eq!(grid.site_id(1, 1).unwrap(), 1);
        assert_eq!(grid.site_id(1, 3).unwrap(), 3);
        assert_eq!(grid.site_id(2, 1).unwrap(), 4);
        assert_eq!(grid.site_id(3, 3).unwrap(), 9);
        assert_eq!(grid.virtual_bottom(), 10);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            Percolation::new(0).unwrap_err(),
            PercolationError::InvalidGridSize { n: 0 }
        );
    }

    #[test]
    fn test_single_site_percolates_on_open() {
        let mut grid = Percolation::new(1).unwrap();
        assert!(!grid.percolates());
        assert!(!grid.is_full(1, 1).unwrap());

        grid.open(1, 1).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(1, 1).unwrap());
        assert_eq!(grid.number_of_open_sites(), 1);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut grid = Percolation::new(4).unwrap();
        grid.open(2, 2).unwrap();
        grid.open(2, 2).unwrap();
        assert_eq!(grid.number_of_open_sites(), 1);
        assert_eq!(grid.connectivity.count(), 4 * 4 + 2);
    }

    #[test]
    fn test_no_wraparound() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 3).unwrap();
        grid.open(2, 1).unwrap();
        // (1,3) and (2,1) are consecutive ids but not neighbours
        assert!(grid.is_full(1, 3).unwrap());
        assert!(!grid.is_full(2, 1).unwrap());
    }

    #[test]
    fn test_bottom_row_does_not_backwash() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(3, 1).unwrap();
        grid.open(3, 3).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(3, 1).unwrap());
        assert!(!grid.is_full(3, 3).unwrap());
    }

    #[test]
    fn test_rejected_open_leaves_state_untouched() {
        let mut grid = Percolation::new(2).unwrap();
        assert!(grid.open(3, 1).is_err());
        assert!(grid.open(1, 0).is_err());
        assert_eq!(grid.number_of_open_sites(), 0);
        assert!(grid.sites.iter().all(|&o| !o));
    }

    #[test]
    fn test_percolates_is_stable_across_repeated_queries() {
        let mut grid = Percolation::new(5).unwrap();
        for row in 1..=4 {
            grid.open(row, 2).unwrap();
        }
        assert!(!grid.percolates());
        assert!(!grid.percolates());

        grid.open(5, 2).unwrap();
        // Each query compresses paths; the answer must not change
        for _ in 0..3 {
            assert!(grid.percolates());
        }
        assert_eq!(
            grid.connectivity.find(Percolation::VIRTUAL_TOP).unwrap(),
            grid.connectivity.find(grid.virtual_bottom).unwrap()
        );
    }
}
