use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};
use sudoku_engine::{Difficulty, Hint, Position, PuzzleSession};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Destructive action awaiting user confirmation.
///
/// The engine performs no confirmation itself; the app gates `solve_all`
/// and `reset_editable` behind a y/n prompt and leaves all state untouched
/// when the user declines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Solve,
    Reset,
}

/// Style of the status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// The main application state
pub struct App {
    /// The live puzzle
    pub session: PuzzleSession,
    /// Currently selected cell
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Destructive action waiting for y/n
    pub pending: Option<PendingAction>,
    /// Cell suggested by the last hint, highlighted until the next edit
    pub suggested: Option<Position>,
    /// Message to display
    pub message: Option<(String, MessageKind)>,
    /// Message decay counter, in ticks
    message_timer: u32,
    /// When the current puzzle was started
    start_time: Instant,
    /// Elapsed time frozen at the moment the puzzle was solved
    solved_at: Option<Duration>,
    dark_theme: bool,
}

impl App {
    /// Create the app with a fresh puzzle
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let session = match seed {
            Some(seed) => PuzzleSession::with_seed(difficulty, seed),
            None => PuzzleSession::new(difficulty),
        };

        Self {
            session,
            cursor: Position::new(4, 4),
            theme: Theme::dark(),
            pending: None,
            suggested: None,
            message: None,
            message_timer: 0,
            start_time: Instant::now(),
            solved_at: None,
            dark_theme: true,
        }
    }

    /// Elapsed play time, frozen once the puzzle is solved
    pub fn elapsed(&self) -> Duration {
        self.solved_at.unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Format the elapsed time as MM:SS
    pub fn elapsed_string(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Update the message decay (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, kind: MessageKind, msg: impl Into<String>) {
        self.message = Some((msg.into(), kind));
        self.message_timer = 30; // ~3 seconds at the 100ms tick rate
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if self.pending.is_some() {
            return self.handle_confirm_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            // Cursor movement, vim keys included
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Digit entry
            KeyCode::Char(c @ '1'..='9') => {
                self.enter_digit(c as u8 - b'0');
            }
            KeyCode::Char('0') | KeyCode::Backspace | KeyCode::Delete => {
                self.enter_digit(0);
            }

            // Hint on the selected cell
            KeyCode::Char('?') => self.request_hint(),

            // Validate current fill
            KeyCode::Char('v') => {
                if self.session.is_complete() {
                    self.show_message(
                        MessageKind::Success,
                        "Congratulations! Your solution is correct!",
                    );
                } else {
                    self.show_message(
                        MessageKind::Error,
                        "There are errors in your solution. Keep trying!",
                    );
                }
            }

            // New game at the current difficulty
            KeyCode::Char('n') => {
                let difficulty = self.session.difficulty();
                self.start_new_game(difficulty);
            }

            // Cycle difficulty; switching starts a new puzzle immediately
            KeyCode::Char('d') => {
                let difficulty = self.session.difficulty().next();
                self.start_new_game(difficulty);
            }

            // Destructive actions go through confirmation
            KeyCode::Char('s') => {
                self.pending = Some(PendingAction::Solve);
                self.show_message(MessageKind::Info, "Reveal the full solution? (y/n)");
            }
            KeyCode::Char('r') => {
                self.pending = Some(PendingAction::Reset);
                self.show_message(MessageKind::Info, "Reset the puzzle? (y/n)");
            }

            // Theme toggle
            KeyCode::Char('t') => {
                self.dark_theme = !self.dark_theme;
                self.theme = if self.dark_theme {
                    Theme::dark()
                } else {
                    Theme::light()
                };
            }

            _ => {}
        }

        AppAction::Continue
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> AppAction {
        let action = self.pending.take();
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => match action {
                Some(PendingAction::Solve) => {
                    self.session.solve_all();
                    self.solved_at = Some(self.start_time.elapsed());
                    self.suggested = None;
                    self.show_message(MessageKind::Success, "Puzzle solved!");
                }
                Some(PendingAction::Reset) => {
                    self.session.reset_editable();
                    self.start_time = Instant::now();
                    self.solved_at = None;
                    self.suggested = None;
                    self.show_message(MessageKind::Info, "Puzzle reset to initial state");
                }
                None => {}
            },
            // Any other key declines and leaves all state unchanged
            _ => {
                self.show_message(MessageKind::Info, "Cancelled");
            }
        }
        AppAction::Continue
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = self.cursor.row as isize + d_row;
        let col = self.cursor.col as isize + d_col;
        if (0..9).contains(&row) && (0..9).contains(&col) {
            self.cursor = Position::new(row as usize, col as usize);
        }
    }

    fn enter_digit(&mut self, digit: u8) {
        let was_complete = self.session.is_complete();
        self.session.set_cell(self.cursor, digit);
        self.suggested = None;

        if !was_complete && self.session.is_complete() {
            self.solved_at = Some(self.start_time.elapsed());
            self.show_message(MessageKind::Success, "Congratulations! Puzzle solved!");
        }
    }

    fn request_hint(&mut self) {
        match self.session.hint(Some(self.cursor)) {
            Some(Hint::Revealed { pos, value }) => {
                self.show_message(MessageKind::Info, format!("Revealed {} at {}", value, pos));
                if self.session.is_complete() && self.solved_at.is_none() {
                    self.solved_at = Some(self.start_time.elapsed());
                    self.show_message(MessageKind::Success, "Congratulations! Puzzle solved!");
                }
            }
            Some(Hint::Suggested(pos)) => {
                self.cursor = pos;
                self.suggested = Some(pos);
                self.show_message(MessageKind::Info, format!("Try filling {}", pos));
            }
            None => {
                self.show_message(MessageKind::Info, "Nothing left to fill");
            }
        }
    }

    fn start_new_game(&mut self, difficulty: Difficulty) {
        self.session.new_game(difficulty);
        self.start_time = Instant::now();
        self.solved_at = None;
        self.suggested = None;
        self.message = None;
        self.message_timer = 0;
        self.show_message(MessageKind::Info, format!("New {} puzzle", difficulty));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use sudoku_engine::SessionState;

    fn app() -> App {
        App::new(Difficulty::Easy, Some(42))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_cursor_navigation_and_bounds() {
        let mut app = app();
        assert_eq!(app.cursor, Position::new(4, 4));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, Position::new(3, 4));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.cursor, Position::new(3, 5));

        for _ in 0..20 {
            press(&mut app, KeyCode::Up);
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.cursor, Position::new(0, 0));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, Position::new(0, 0));
    }

    #[test]
    fn test_digit_entry_on_editable_cell() {
        let mut app = app();
        let pos = Position::all()
            .find(|&p| !app.session.cell(p).fixed)
            .unwrap();
        app.cursor = pos;

        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.session.cell(pos).value, 7);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.cell(pos).value, 0);
    }

    #[test]
    fn test_solve_requires_confirmation() {
        let mut app = app();

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.pending, Some(PendingAction::Solve));
        assert!(!app.session.is_complete());

        // Declining leaves everything unchanged
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.pending, None);
        assert!(!app.session.is_complete());

        // Confirming reveals the solution
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.session.is_complete());
        assert_eq!(app.session.state(), SessionState::Solved);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut app = app();
        let pos = Position::all()
            .find(|&p| !app.session.cell(p).fixed)
            .unwrap();
        app.cursor = pos;
        press(&mut app, KeyCode::Char('3'));

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.cell(pos).value, 3, "decline must not reset");

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.session.cell(pos).value, 0);
    }

    #[test]
    fn test_difficulty_cycle_starts_new_game() {
        let mut app = app();
        assert_eq!(app.session.difficulty(), Difficulty::Easy);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.session.difficulty(), Difficulty::Medium);
        assert_eq!(
            app.session.grid().filled_count(),
            Difficulty::Medium.given_cells()
        );
    }

    #[test]
    fn test_hint_key_moves_cursor_to_suggestion() {
        let mut app = app();
        // Park the cursor on a fixed cell so the hint suggests instead
        let fixed = Position::all()
            .find(|&p| app.session.cell(p).fixed)
            .unwrap();
        app.cursor = fixed;

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.suggested, Some(app.cursor));
        assert_eq!(app.session.grid().get(app.cursor), 0);
    }

    #[test]
    fn test_message_decays() {
        let mut app = app();
        app.show_message(MessageKind::Info, "hello");
        assert!(app.message.is_some());
        for _ in 0..30 {
            app.tick();
        }
        assert!(app.message.is_none());
    }
}
