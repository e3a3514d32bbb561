use crate::{find_violations, mask, Difficulty, Grid, Position, SolutionGenerator, Violations};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a session. Generation happens inside `new_game`, so
/// there is no externally observable intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// The puzzle is being played; edits are accepted
    Playing,
    /// The grid matches the solution; terminal until the next `new_game`
    Solved,
}

/// Outcome of a hint request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// The selected cell was wrong or empty and has been filled in
    Revealed { pos: Position, value: u8 },
    /// Nothing was changed; this is the first empty cell worth looking at
    Suggested(Position),
}

/// Read-only view of one cell, as the UI needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Current digit, 0 if empty
    pub value: u8,
    /// Pre-filled by the puzzle and not editable
    pub fixed: bool,
    /// Participates in a row/column/box duplicate
    pub has_error: bool,
}

/// One live puzzle: the player grid, the target solution, and everything
/// derived from them.
///
/// All operations run to completion synchronously and never fail; invalid
/// actions (editing a fixed cell, out-of-range digits, edits after solving)
/// are silent no-ops. Destructive operations (`solve_all`, `reset_editable`)
/// expect the caller to have confirmed with the user first.
pub struct PuzzleSession {
    grid: Grid,
    solution: Grid,
    fixed: [[bool; 9]; 9],
    difficulty: Difficulty,
    violations: Violations,
    state: SessionState,
    generator: SolutionGenerator,
}

impl PuzzleSession {
    /// Start a session with a fresh puzzle, seeded from OS entropy
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_generator(difficulty, SolutionGenerator::new())
    }

    /// Start a session with a fixed seed for reproducible puzzles
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_generator(difficulty, SolutionGenerator::with_seed(seed))
    }

    fn from_generator(difficulty: Difficulty, generator: SolutionGenerator) -> Self {
        let mut session = Self {
            grid: Grid::empty(),
            solution: Grid::empty(),
            fixed: [[false; 9]; 9],
            difficulty,
            violations: Violations::default(),
            state: SessionState::Playing,
            generator,
        };
        session.new_game(difficulty);
        session
    }

    /// Generate a fresh solution and puzzle, replacing all session state.
    ///
    /// Every non-zero cell of the masked puzzle becomes fixed; player
    /// progress and violation flags are discarded atomically.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.solution = self.generator.generate();
        self.grid = mask(
            &self.solution,
            difficulty.hidden_cells(),
            self.generator.rng_mut(),
        );
        for pos in Position::all() {
            self.fixed[pos.row][pos.col] = self.grid.get(pos) != 0;
        }
        self.violations = Violations::default();
        self.state = SessionState::Playing;
    }

    /// Set a cell to a digit (0 clears it).
    ///
    /// No-op when the cell is fixed, the digit is out of 0..=9, or the
    /// session is already solved. Recomputes violations and flips the
    /// session to `Solved` the moment the grid matches the solution.
    pub fn set_cell(&mut self, pos: Position, digit: u8) {
        if self.state == SessionState::Solved || digit > 9 || self.fixed[pos.row][pos.col] {
            return;
        }

        self.grid.set(pos, digit);
        self.violations = find_violations(&self.grid);

        if self.grid == self.solution {
            self.state = SessionState::Solved;
        }
    }

    /// Whether every cell is filled and matches the solution
    pub fn is_complete(&self) -> bool {
        self.grid == self.solution
    }

    /// Help the player along.
    ///
    /// If the selected cell is editable and does not hold its solution
    /// value, the correct digit is written (through the normal `set_cell`
    /// path, so completion can trigger) and reported as `Revealed`.
    /// Otherwise the first empty cell in row-major order is returned as
    /// `Suggested` with no change to the grid. Returns `None` once nothing
    /// is left to fill.
    pub fn hint(&mut self, selected: Option<Position>) -> Option<Hint> {
        if self.state == SessionState::Solved {
            return None;
        }

        if let Some(pos) = selected {
            if !self.fixed[pos.row][pos.col] && self.grid.get(pos) != self.solution.get(pos) {
                let value = self.solution.get(pos);
                self.set_cell(pos, value);
                return Some(Hint::Revealed { pos, value });
            }
        }

        Position::all()
            .find(|&p| self.grid.get(p) == 0)
            .map(Hint::Suggested)
    }

    /// Reveal the whole solution: every cell filled and fixed, violations
    /// cleared, session solved. Idempotent and irreversible; gate it behind
    /// a user confirmation.
    pub fn solve_all(&mut self) {
        self.grid = self.solution;
        self.fixed = [[true; 9]; 9];
        self.violations = Violations::default();
        self.state = SessionState::Solved;
    }

    /// Clear every editable cell back to empty, keeping the fixed cells and
    /// the solution. No-op after the puzzle is solved.
    pub fn reset_editable(&mut self) {
        if self.state == SessionState::Solved {
            return;
        }

        for pos in Position::all() {
            if !self.fixed[pos.row][pos.col] {
                self.grid.set(pos, 0);
            }
        }
        self.violations = Violations::default();
    }

    /// View of one cell: value, fixedness, and violation flag
    pub fn cell(&self, pos: Position) -> CellView {
        CellView {
            value: self.grid.get(pos),
            fixed: self.fixed[pos.row][pos.col],
            has_error: self.violations.contains(pos),
        }
    }

    /// The current player grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The target solution
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// The difficulty the current puzzle was generated with
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The current violation set
    pub fn violations(&self) -> &Violations {
        &self.violations
    }
}
