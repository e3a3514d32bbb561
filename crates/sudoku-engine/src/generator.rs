use crate::{Grid, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of band/stack shuffle rounds applied to the base grid
const SHUFFLE_ROUNDS: usize = 30;

/// Produces fully solved Sudoku grids.
///
/// The generator starts from a shifted Latin-square base pattern that is
/// valid by construction, then scrambles it by swapping rows within a band
/// and columns within a stack. Those swaps never move a row out of its
/// box-row or a column out of its box-column, so every intermediate grid
/// stays valid.
///
/// The swap algebra only reaches a subset of all valid grids, so the output
/// is not uniformly distributed over them. Fine for casual play; use a
/// backtracking generator if you need statistical uniformity.
pub struct SolutionGenerator {
    rng: StdRng,
}

impl Default for SolutionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed for reproducible output
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a fully solved grid
    pub fn generate(&mut self) -> Grid {
        let mut grid = Self::base_grid();
        for _ in 0..SHUFFLE_ROUNDS {
            self.swap_band_rows(&mut grid);
            self.swap_stack_cols(&mut grid);
        }
        grid
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// The base pattern: value(r, c) = ((c + r*3 + r/3) mod 9) + 1.
    ///
    /// The per-row shift of 3 keeps each band's rows disjoint within a box,
    /// and the extra r/3 offset staggers the bands against each other.
    fn base_grid() -> Grid {
        let mut grid = Grid::empty();
        for pos in Position::all() {
            let value = (pos.col + pos.row * 3 + pos.row / 3) % 9 + 1;
            grid.set(pos, value as u8);
        }
        grid
    }

    /// Swap two distinct rows within one random band
    fn swap_band_rows(&mut self, grid: &mut Grid) {
        let band = self.rng.gen_range(0..3) * 3;
        let (a, b) = self.distinct_pair();
        grid.swap_rows(band + a, band + b);
    }

    /// Swap two distinct columns within one random stack
    fn swap_stack_cols(&mut self, grid: &mut Grid) {
        let stack = self.rng.gen_range(0..3) * 3;
        let (a, b) = self.distinct_pair();
        grid.swap_cols(stack + a, stack + b);
    }

    /// Two distinct offsets in 0..3
    fn distinct_pair(&mut self) -> (usize, usize) {
        let a = self.rng.gen_range(0..3);
        let b = (a + self.rng.gen_range(1..3)) % 3;
        (a, b)
    }
}
