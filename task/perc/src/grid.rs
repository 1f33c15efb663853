/// Square grid of open/blocked flags, stored row-major.
#[derive(Clone, Debug)]
pub struct SiteGrid {
    size: usize,
    lattice: Vec<bool>,
}

impl SiteGrid {
    /// Creates a `size` x `size` grid with every site blocked.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            lattice: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Linear id of a site: `row * size + col`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// The caller must ensure that `row` and `col` are inside the grid.
    ///
    /// # Panics
    ///
    /// May panic (or read some other site) if they are not.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.lattice[self.index(row, col)]
    }

    /// Marks the site open and returns `true` if it was blocked before.
    /// Same bounds contract as [`SiteGrid::is_open`].
    pub fn open(&mut self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);
        !std::mem::replace(&mut self.lattice[index], true)
    }

    /// In-grid orthogonal neighbours of a site, in up, down, left, right order.
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        let moves: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

        moves.into_iter().filter_map(move |(dr, dc)| {
            let row = row.checked_add_signed(dr)?;
            let col = col.checked_add_signed(dc)?;
            (row < size && col < size).then_some((row, col))
        })
    }
}

////////////////////////////////////////////////////////////////////////////////
