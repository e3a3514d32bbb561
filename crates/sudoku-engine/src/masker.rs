use crate::{Grid, Position};
use rand::Rng;

/// Derive a playable puzzle from a solved grid by clearing `hidden_count`
/// uniformly chosen cells.
///
/// Cells are picked by rejection: draw a random cell, clear it if still
/// non-zero, repeat until enough are gone. The result is not checked for a
/// unique solution; that is a documented limitation of this puzzle style,
/// not something to patch up here.
pub fn mask(solution: &Grid, hidden_count: usize, rng: &mut impl Rng) -> Grid {
    debug_assert!(hidden_count <= 81);

    let mut grid = *solution;
    let mut removed = 0;
    while removed < hidden_count {
        let pos = Position::new(rng.gen_range(0..9), rng.gen_range(0..9));
        if grid.get(pos) != 0 {
            grid.set(pos, 0);
            removed += 1;
        }
    }
    grid
}
