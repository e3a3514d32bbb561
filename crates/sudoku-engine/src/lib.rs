//! Core engine for a 9x9 Sudoku game.
//!
//! The engine is split along the puzzle's lifecycle:
//!
//! - [`SolutionGenerator`] produces a fully solved grid by shuffling a
//!   valid base pattern with band/stack swaps.
//! - [`mask`] hides a difficulty-determined number of cells to derive the
//!   playable puzzle.
//! - [`find_violations`] scans a grid for row/column/box duplicates.
//! - [`PuzzleSession`] ties it together: it owns the live grid and the
//!   solution and exposes the operations a UI needs (digit entry, hints,
//!   reveal, reset).
//!
//! Everything is synchronous and in-memory; nothing here blocks, fails, or
//! persists. Randomness can be seeded for reproducible puzzles:
//!
//! ```
//! use sudoku_engine::{Difficulty, Position, PuzzleSession};
//!
//! let mut session = PuzzleSession::with_seed(Difficulty::Easy, 42);
//! assert_eq!(session.grid().filled_count(), 46);
//!
//! let pos = Position::all().find(|&p| !session.cell(p).fixed).unwrap();
//! let value = session.solution().get(pos);
//! session.set_cell(pos, value);
//! assert!(!session.cell(pos).has_error);
//! ```

mod checker;
mod difficulty;
mod generator;
mod grid;
mod masker;
mod session;

pub use checker::{find_violations, Violations};
pub use difficulty::Difficulty;
pub use generator::SolutionGenerator;
pub use grid::{Grid, Position};
pub use masker::mask;
pub use session::{CellView, Hint, PuzzleSession, SessionState};
