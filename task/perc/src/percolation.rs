use std::fmt::{self, Display};

use crate::{
    grid::SiteGrid,
    union_find::{DisjointSet, WeightedQuickUnion},
    Error, Result,
};

////////////////////////////////////////////////////////////////////////////////

/// An `n` x `n` percolation system.
///
/// Connectivity lives in two partitions. `percolation` holds the sites plus a
/// virtual top and a virtual bottom node; `fullness` holds the sites plus the
/// virtual top only. Both receive the same site-to-site unions, only
/// `percolation` is linked to the bottom node. `is_full` asks `fullness`, so an
/// open bottom-row site never looks full just because the system percolates
/// through some other column.
pub struct Percolation<U = WeightedQuickUnion> {
    grid: SiteGrid,
    open_sites: usize,
    percolation: U,
    fullness: U,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl Percolation {
    /// Creates an `n` x `n` grid with all sites blocked.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_disjoint_set(n)
    }
}

impl<U: DisjointSet> Percolation<U> {
    /// Same as [`Percolation::new`], backed by a custom disjoint-set structure.
    pub fn with_disjoint_set(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "grid size must be greater than zero".to_string(),
            ));
        }
        let sites = n
            .checked_mul(n)
            .filter(|sites| sites.checked_add(2).is_some())
            .ok_or_else(|| Error::InvalidArgument(format!("grid size {n} is too large")))?;

        let virtual_top = sites;
        let virtual_bottom = sites + 1;

        let mut percolation = U::with_len(sites + 2);
        let mut fullness = U::with_len(sites + 1);
        for col in 0..n {
            percolation.union(virtual_top, col);
            fullness.union(virtual_top, col);
        }

        Ok(Self {
            grid: SiteGrid::new(n),
            open_sites: 0,
            percolation,
            fullness,
            virtual_top,
            virtual_bottom,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Opens the site if it is not open already.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;
        if !self.grid.open(row, col) {
            return Ok(());
        }
        self.open_sites += 1;

        let site = self.grid.index(row, col);
        for (n_row, n_col) in self.grid.neighbours(row, col) {
            if self.grid.is_open(n_row, n_col) {
                let neighbour = self.grid.index(n_row, n_col);
                self.percolation.union(site, neighbour);
                self.fullness.union(site, neighbour);
            }
        }

        if row == self.size() - 1 {
            self.percolation.union(site, self.virtual_bottom);
        }

        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.grid.is_open(row, col))
    }

    /// An open site is full if it is connected to the top row through open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.grid.is_open(row, col)
            && self
                .fullness
                .connected(self.grid.index(row, col), self.virtual_top))
    }

    pub fn percolates(&self) -> bool {
        self.percolation
            .connected(self.virtual_top, self.virtual_bottom)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Share of open sites among all `n * n` sites.
    pub fn open_fraction(&self) -> f64 {
        let size = self.size() as f64;
        self.open_sites as f64 / (size * size)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if self.grid.contains(row, col) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                size: self.size(),
            })
        }
    }
}

/// One line per row: `#` blocked, `.` open, `o` full.
impl<U: DisjointSet> Display for Percolation<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            for col in 0..self.size() {
                let site = if !self.grid.is_open(row, col) {
                    '#'
                } else if self
                    .fullness
                    .connected(self.grid.index(row, col), self.virtual_top)
                {
                    'o'
                } else {
                    '.'
                };
                write!(f, "{site}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
