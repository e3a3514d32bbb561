//! Basic example of using the Sudoku engine

use sudoku_engine::{Difficulty, Hint, Position, PuzzleSession};

fn main() {
    // Start a session with a generated Medium puzzle
    println!("Generating a Medium difficulty puzzle...\n");
    let mut session = PuzzleSession::new(Difficulty::Medium);

    println!("Puzzle:");
    println!("{}", session.grid());
    println!("Given cells: {}", session.grid().filled_count());
    println!("Empty cells: {}", session.grid().empty_count());

    // Ask for a hint with nothing selected: suggests the first empty cell
    if let Some(Hint::Suggested(pos)) = session.hint(None) {
        println!("\nSuggested cell to fill: {}", pos);

        // Select that cell and ask again: the correct digit gets revealed
        if let Some(Hint::Revealed { value, .. }) = session.hint(Some(pos)) {
            println!("Hint revealed {} at {}", value, pos);
        }
    }

    // Make a deliberate mistake and show the violation flags
    if let Some(pos) = Position::all().find(|&p| !session.cell(p).fixed) {
        let wrong = session.grid().get(Position::new(pos.row, (pos.col + 1) % 9));
        if wrong != 0 {
            session.set_cell(pos, wrong);
            let errors = session.violations().len();
            println!("\nAfter writing {} at {}: {} cells in violation", wrong, pos, errors);
            session.set_cell(pos, 0);
        }
    }

    // Reveal everything
    session.solve_all();
    println!("\nSolution:");
    println!("{}", session.grid());
    println!("Complete: {}", session.is_complete());
}
