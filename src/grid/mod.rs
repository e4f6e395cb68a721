use crate::{Cell, GridError, Result};
use tracing::{debug, trace, warn};


#[derive(Clone)]
struct Buffers {
    curr: Vec<Cell>,
    next: Vec<Cell>,
}

/// Bounded Game of Life field that keeps every cell's live-neighbor count cached.
///
/// Both buffers are `(width + 2) x (height + 2)`, row-major, with a dead border
/// around the playable area so that touching the 8 neighbors of any interior
/// cell never needs a bounds check.
///
/// The `next` buffer is always a valid older generation: stepping applies
/// set/unset transitions to it, which rebuilds its counts in the same pass.
#[derive(Clone, Default)]
pub struct Grid {
    buffers: Option<Buffers>,
    width: usize,
    height: usize,
    generation: u64,
}

/// Flat indices of the Moore neighborhood of `idx`.
#[inline(always)]
fn neighbors(idx: usize, stride: usize) -> [usize; 8] {
    [
        idx - stride - 1,
        idx - stride,
        idx - stride + 1,
        idx - 1,
        idx + 1,
        idx + stride - 1,
        idx + stride,
        idx + stride + 1,
    ]
}

#[inline(always)]
fn revive(cells: &mut [Cell], idx: usize, stride: usize) {
    if cells[idx].is_alive() {
        return;
    }
    cells[idx].revive();
    for n in neighbors(idx, stride) {
        cells[n].add_neighbor();
    }
}

#[inline(always)]
fn kill(cells: &mut [Cell], idx: usize, stride: usize) {
    if !cells[idx].is_alive() {
        return;
    }
    cells[idx].kill();
    for n in neighbors(idx, stride) {
        cells[n].remove_neighbor();
    }
}

impl Grid {
    /// Uninitialized grid; every cell operation fails until `set_dimensions`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimensions(width: usize, height: usize) -> Result<Self> {
        let mut grid = Self::new();
        grid.set_dimensions(width, height)?;
        Ok(grid)
    }

    pub fn square(side: usize) -> Result<Self> {
        Self::with_dimensions(side, side)
    }

    fn allocate(width: usize, height: usize) -> Result<Buffers> {
        let overflow = || GridError::DimensionOverflow { width, height };
        let len = width
            .checked_add(2)
            .zip(height.checked_add(2))
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or_else(overflow)?;

        let (mut curr, mut next) = (Vec::new(), Vec::new());
        curr.try_reserve_exact(len).map_err(|_| overflow())?;
        next.try_reserve_exact(len).map_err(|_| overflow())?;
        curr.resize(len, Cell::DEAD);
        next.resize(len, Cell::DEAD);
        Ok(Buffers { curr, next })
    }

    /// (Re)creates a blank `width x height` grid, discarding all previous cells.
    ///
    /// On failure the previous grid is kept as is.
    pub fn set_dimensions(&mut self, width: usize, height: usize) -> Result<()> {
        let buffers = Self::allocate(width, height).inspect_err(|err| {
            warn!(width, height, %err, "grid allocation failed");
        })?;
        self.destroy();
        self.buffers = Some(buffers);
        self.width = width;
        self.height = height;
        debug!(width, height, "grid allocated");
        Ok(())
    }

    pub fn set_square_dimensions(&mut self, side: usize) -> Result<()> {
        self.set_dimensions(side, side)
    }

    /// Releases both buffers and returns to the uninitialized state.
    pub fn destroy(&mut self) {
        if self.buffers.take().is_some() {
            debug!(width = self.width, height = self.height, "grid destroyed");
        }
        self.width = 0;
        self.height = 0;
        self.generation = 0;
    }

    /// Kills every cell. Zero counts are consistent with an all-dead field.
    pub fn clear(&mut self) {
        if let Some(Buffers { curr, next }) = self.buffers.as_mut() {
            curr.fill(Cell::DEAD);
            next.fill(Cell::DEAD);
            self.generation = 0;
            debug!(width = self.width, height = self.height, "grid cleared");
        }
    }

    pub fn exists(&self) -> bool {
        self.buffers.is_some()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations computed since the grid was created or cleared.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn stride(&self) -> usize {
        self.width + 2
    }

    /// Translates an interior coordinate into a flat buffer index.
    fn offset(&self, i: usize, j: usize) -> Result<usize> {
        if self.buffers.is_none() {
            return Err(GridError::UninitializedGrid);
        }
        if i >= self.width || j >= self.height {
            return Err(GridError::IndexOutOfRange {
                i,
                j,
                width: self.width,
                height: self.height,
            });
        }
        Ok(i + 1 + (j + 1) * self.stride())
    }

    fn cell(&self, i: usize, j: usize) -> Result<Cell> {
        let idx = self.offset(i, j)?;
        match &self.buffers {
            Some(buffers) => Ok(buffers.curr[idx]),
            None => Err(GridError::UninitializedGrid),
        }
    }

    fn curr_mut(&mut self) -> Result<&mut Vec<Cell>> {
        match self.buffers.as_mut() {
            Some(buffers) => Ok(&mut buffers.curr),
            None => Err(GridError::UninitializedGrid),
        }
    }

    pub fn is_alive(&self, i: usize, j: usize) -> Result<bool> {
        Ok(self.cell(i, j)?.is_alive())
    }

    /// Cached number of alive cells around `(i, j)`.
    pub fn live_neighbors(&self, i: usize, j: usize) -> Result<u8> {
        Ok(self.cell(i, j)?.live_neighbors())
    }

    /// Makes `(i, j)` alive; does nothing if it already is.
    pub fn set_cell(&mut self, i: usize, j: usize) -> Result<()> {
        let (idx, stride) = (self.offset(i, j)?, self.stride());
        revive(self.curr_mut()?, idx, stride);
        Ok(())
    }

    /// Makes `(i, j)` dead; does nothing if it already is.
    pub fn unset_cell(&mut self, i: usize, j: usize) -> Result<()> {
        let (idx, stride) = (self.offset(i, j)?, self.stride());
        kill(self.curr_mut()?, idx, stride);
        Ok(())
    }

    pub fn set_cell_state(&mut self, i: usize, j: usize, alive: bool) -> Result<()> {
        if alive {
            self.set_cell(i, j)
        } else {
            self.unset_cell(i, j)
        }
    }

    pub fn population(&self) -> usize {
        let Some(buffers) = &self.buffers else {
            return 0;
        };
        let stride = self.stride();
        (0..self.height)
            .map(|j| {
                let row = (j + 1) * stride + 1;
                buffers.curr[row..row + self.width]
                    .iter()
                    .filter(|cell| cell.is_alive())
                    .count()
            })
            .sum()
    }

    /// Row-major snapshot of the current generation, `width * height` entries.
    pub fn get_cells(&self) -> Vec<bool> {
        let Some(buffers) = &self.buffers else {
            return Vec::new();
        };
        let stride = self.stride();
        let mut cells = Vec::with_capacity(self.width * self.height);
        for j in 0..self.height {
            let row = (j + 1) * stride + 1;
            cells.extend(buffers.curr[row..row + self.width].iter().map(|c| c.is_alive()));
        }
        cells
    }

    /// Loads a row-major field of `width * height` states.
    pub fn set_cells(&mut self, states: &[bool]) -> Result<()> {
        if !self.exists() {
            return Err(GridError::UninitializedGrid);
        }
        let expected = self.width * self.height;
        if states.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: states.len(),
            });
        }
        for (k, &state) in states.iter().enumerate() {
            self.set_cell_state(k % self.width, k / self.width, state)?;
        }
        Ok(())
    }

    /// Clears the field and makes every cell alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, fill_rate: f64, seed: Option<u64>) -> Result<()> {
        use rand::{Rng, SeedableRng};

        if !self.exists() {
            return Err(GridError::UninitializedGrid);
        }
        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(GridError::InvalidFillRate(fill_rate));
        }

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        self.clear();
        for j in 0..self.height {
            for i in 0..self.width {
                if rng.gen_bool(fill_rate) {
                    self.set_cell(i, j)?;
                }
            }
        }
        debug!(population = self.population(), fill_rate, "grid randomized");
        Ok(())
    }

    /// Computes one generation of B3/S23.
    ///
    /// Rules are evaluated on `curr` and written into `next`, then the buffers swap.
    pub fn next_gen(&mut self) -> Result<()> {
        let stride = self.stride();
        let Some(Buffers { curr, next }) = self.buffers.as_mut() else {
            return Err(GridError::UninitializedGrid);
        };

        for j in 0..self.height {
            let row = (j + 1) * stride + 1;
            for i in 0..self.width {
                let idx = row + i;
                let cell = curr[idx];
                let alive = match cell.live_neighbors() {
                    2 => cell.is_alive(),
                    3 => true,
                    _ => false,
                };
                if alive {
                    revive(next, idx, stride);
                } else {
                    kill(next, idx, stride);
                }
            }
        }
        std::mem::swap(curr, next);

        self.generation += 1;
        trace!(generation = self.generation, "generation computed");
        Ok(())
    }

    /// Computes `generations` generations in a row.
    pub fn advance(&mut self, generations: u64) -> Result<()> {
        if !self.exists() {
            return Err(GridError::UninitializedGrid);
        }
        for _ in 0..generations {
            self.next_gen()?;
        }
        Ok(())
    }
}
