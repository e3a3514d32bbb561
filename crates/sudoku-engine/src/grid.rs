use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the 9x9 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position; row and col must be in 0..9
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Iterate over all 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..81).map(|i| Position::new(i / 9, i % 9))
    }

    /// Index of the 3x3 box containing this position (0..9, row-major)
    pub fn box_index(self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based, the way players read the board
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

/// A 9x9 Sudoku grid; 0 denotes an empty cell, 1-9 are placed digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Create an empty grid
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Get the value at a position (0 = empty)
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set the value at a position; value must be in 0..=9
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9);
        self.cells[pos.row][pos.col] = value;
    }

    /// Raw row-major view of the cell values
    pub fn rows(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        Position::all().filter(|&p| self.get(p) != 0).count()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }

    /// Swap two entire rows
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    /// Swap two entire columns
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        for row in &mut self.cells {
            row.swap(a, b);
        }
    }

    /// Parse a grid from an 81-character string.
    ///
    /// Digits 1-9 are placed values; '0' and '.' are empty cells. Whitespace
    /// is ignored. Returns `None` if the string does not describe 81 cells.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut grid = Self::empty();
        let mut idx = 0;

        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if idx >= 81 {
                return None;
            }
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            grid.cells[idx / 9][idx % 9] = value;
            idx += 1;
        }

        if idx == 81 {
            Some(grid)
        } else {
            None
        }
    }

    /// Format as a compact 81-character string with '.' for empty cells
    pub fn to_string_compact(&self) -> String {
        let mut s = String::with_capacity(81);
        for pos in Position::all() {
            let value = self.get(pos);
            if value == 0 {
                s.push('.');
            } else {
                s.push((b'0' + value) as char);
            }
        }
        s
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col > 0 && col % 3 == 0 {
                    write!(f, "| ")?;
                }
                if value == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty();
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.empty_count(), 81);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::empty();
        let pos = Position::new(4, 7);
        grid.set(pos, 5);
        assert_eq!(grid.get(pos), 5);
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_from_string() {
        let s = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(s).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), 5);
        assert_eq!(grid.get(Position::new(0, 2)), 0);
        assert_eq!(grid.get(Position::new(8, 8)), 9);
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_from_string_rejects_garbage() {
        assert!(Grid::from_string("123").is_none());
        assert!(Grid::from_string(&"x".repeat(81)).is_none());
        assert!(Grid::from_string(&"1".repeat(82)).is_none());
    }

    #[test]
    fn test_compact_string_uses_dots() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 9);
        let s = grid.to_string_compact();
        assert_eq!(s.len(), 81);
        assert!(s.starts_with('9'));
        assert_eq!(s.chars().filter(|&c| c == '.').count(), 80);
    }

    #[test]
    fn test_swap_rows_and_cols() {
        let s = "123456789".repeat(9);
        let mut grid = Grid::from_string(&s).unwrap();
        grid.set(Position::new(0, 0), 9);
        grid.swap_rows(0, 2);
        assert_eq!(grid.get(Position::new(2, 0)), 9);
        grid.swap_cols(0, 8);
        assert_eq!(grid.get(Position::new(2, 8)), 9);
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }
}
