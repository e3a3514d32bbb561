use crate::{Grid, Position};

/// Set of cells currently violating a row, column, or box constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Violations {
    marked: [[bool; 9]; 9],
}

impl Violations {
    /// Whether the given cell participates in any duplicate
    pub fn contains(&self, pos: Position) -> bool {
        self.marked[pos.row][pos.col]
    }

    /// Whether the grid is free of duplicates
    pub fn is_empty(&self) -> bool {
        self.marked.iter().flatten().all(|&m| !m)
    }

    /// Number of violating cells
    pub fn len(&self) -> usize {
        self.marked.iter().flatten().filter(|&&m| m).count()
    }

    /// Iterate over all violating cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.contains(p))
    }

    fn mark(&mut self, pos: Position) {
        self.marked[pos.row][pos.col] = true;
    }
}

/// Find every cell that duplicates another cell's digit within its row,
/// column, or box.
///
/// All holders of a duplicated digit are marked, first occurrence included,
/// so the UI can highlight the whole conflicting group. Empty cells never
/// violate. A cell can be marked by more than one scan; the result is the
/// union. O(81), cheap enough to run after every single-cell edit.
pub fn find_violations(grid: &Grid) -> Violations {
    let mut violations = Violations::default();

    for i in 0..9 {
        mark_duplicates(grid, &mut violations, |j| Position::new(i, j));
        mark_duplicates(grid, &mut violations, |j| Position::new(j, i));
        mark_duplicates(grid, &mut violations, |j| {
            Position::new((i / 3) * 3 + j / 3, (i % 3) * 3 + j % 3)
        });
    }

    violations
}

/// Mark every cell of one house (row, column, or box) whose digit occurs
/// more than once in it. `cell_at` maps 0..9 to the house's positions.
fn mark_duplicates(
    grid: &Grid,
    violations: &mut Violations,
    cell_at: impl Fn(usize) -> Position,
) {
    let mut counts = [0u8; 10];
    for j in 0..9 {
        counts[grid.get(cell_at(j)) as usize] += 1;
    }
    for j in 0..9 {
        let pos = cell_at(j);
        let value = grid.get(pos);
        if value != 0 && counts[value as usize] > 1 {
            violations.mark(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SolutionGenerator;

    #[test]
    fn test_empty_grid_has_no_violations() {
        let violations = find_violations(&Grid::empty());
        assert!(violations.is_empty());
        assert_eq!(violations.len(), 0);
    }

    #[test]
    fn test_solved_grid_has_no_violations() {
        let grid = SolutionGenerator::with_seed(3).generate();
        assert!(find_violations(&grid).is_empty());
    }

    #[test]
    fn test_row_duplicate_marks_both_cells() {
        let mut grid = Grid::empty();
        grid.set(Position::new(2, 1), 7);
        grid.set(Position::new(2, 6), 7);

        let violations = find_violations(&grid);
        assert!(violations.contains(Position::new(2, 1)));
        assert!(violations.contains(Position::new(2, 6)));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_column_duplicate_marks_both_cells() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 4), 3);
        grid.set(Position::new(8, 4), 3);

        let violations = find_violations(&grid);
        assert!(violations.contains(Position::new(0, 4)));
        assert!(violations.contains(Position::new(8, 4)));
    }

    #[test]
    fn test_box_duplicate_marks_both_cells() {
        // Same box, different row and column
        let mut grid = Grid::empty();
        grid.set(Position::new(3, 3), 9);
        grid.set(Position::new(5, 5), 9);

        let violations = find_violations(&grid);
        assert!(violations.contains(Position::new(3, 3)));
        assert!(violations.contains(Position::new(5, 5)));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_distinct_digits_do_not_conflict() {
        let mut grid = Grid::empty();
        for col in 0..9 {
            grid.set(Position::new(0, col), col as u8 + 1);
        }
        assert!(find_violations(&grid).is_empty());
    }

    #[test]
    fn test_zeros_never_violate() {
        // A row full of empties plus one digit: nothing to mark
        let mut grid = Grid::empty();
        grid.set(Position::new(4, 4), 1);
        assert!(find_violations(&grid).is_empty());
    }

    #[test]
    fn test_union_of_scans() {
        // (0,0) clashes with (0,5) by row and (5,0) by column
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 2);
        grid.set(Position::new(0, 5), 2);
        grid.set(Position::new(5, 0), 2);

        let violations = find_violations(&grid);
        assert_eq!(violations.len(), 3);
        let marked: Vec<Position> = violations.iter().collect();
        assert_eq!(
            marked,
            vec![
                Position::new(0, 0),
                Position::new(0, 5),
                Position::new(5, 0)
            ]
        );
    }

    #[test]
    fn test_triple_in_one_row_all_marked() {
        let mut grid = Grid::empty();
        for &col in &[0, 4, 8] {
            grid.set(Position::new(6, col), 5);
        }
        assert_eq!(find_violations(&grid).len(), 3);
    }
}
