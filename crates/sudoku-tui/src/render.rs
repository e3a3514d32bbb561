use crate::app::{App, MessageKind};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use sudoku_engine::{Position, SessionState};

const GRID_WIDTH: u16 = 25;
const GRID_HEIGHT: u16 = 13;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;
    execute!(stdout, SetBackgroundColor(app.theme.bg))?;

    // Center the grid, leaving room for the info panel on the right
    let total_width = GRID_WIDTH + 28;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > GRID_HEIGHT + 8 { 2 } else { 1 };

    render_grid(stdout, app, start_x, start_y)?;
    render_info_panel(stdout, app, start_x + GRID_WIDTH + 3, start_y)?;
    render_controls(stdout, app, start_x, start_y + GRID_HEIGHT + 1)?;

    if let Some((ref msg, kind)) = app.message {
        render_message(stdout, app, msg, kind, start_y + GRID_HEIGHT + 5, term_width)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    // Layout:
    // +-------+-------+-------+
    // | 5 3 . | . 7 . | . . . |
    // with a separator line after every third row
    for i in 0..4 {
        execute!(
            stdout,
            MoveTo(x, y + i * 4),
            SetForegroundColor(theme.box_border),
            Print("+-------+-------+-------+")
        )?;
    }

    for row in 0..9 {
        let cell_y = y + 1 + row as u16 + row as u16 / 3;
        execute!(stdout, MoveTo(x, cell_y))?;

        for col in 0..9 {
            if col % 3 == 0 {
                execute!(
                    stdout,
                    SetBackgroundColor(theme.bg),
                    SetForegroundColor(theme.box_border),
                    Print("| ")
                )?;
            }
            render_cell(stdout, app, Position::new(row, col))?;
        }
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.box_border),
            Print("|")
        )?;
    }

    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let cell = app.session.cell(pos);

    let fg = if cell.value == 0 {
        theme.border
    } else if cell.has_error {
        theme.error
    } else if cell.fixed {
        theme.given
    } else {
        theme.filled
    };

    let bg = if pos == app.cursor {
        theme.selected_bg
    } else if app.suggested == Some(pos) {
        theme.box_border
    } else {
        theme.bg
    };

    let text = if cell.value == 0 {
        ".".to_string()
    } else {
        cell.value.to_string()
    };

    execute!(
        stdout,
        SetBackgroundColor(bg),
        SetForegroundColor(fg),
        Print(text),
        SetBackgroundColor(theme.bg),
        Print(" ")
    )?;
    Ok(())
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let session = &app.session;

    let state = match session.state() {
        SessionState::Playing => "Playing",
        SessionState::Solved => "Solved",
    };

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.fg),
        Print("S U D O K U")
    )?;

    let lines = [
        format!("Difficulty: {}", session.difficulty()),
        format!("Time:       {}", app.elapsed_string()),
        format!("Conflicts:  {}", session.violations().len()),
        format!("State:      {}", state),
    ];

    for (i, line) in lines.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, y + 2 + i as u16),
            SetForegroundColor(theme.info),
            Print(line)
        )?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let lines = [
        "arrows/hjkl move   1-9 place   0/bksp clear",
        "? hint   v validate   n new   d difficulty",
        "s solve   r reset   t theme   q quit",
    ];

    for (i, line) in lines.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, y + i as u16),
            SetForegroundColor(theme.key),
            Print(line)
        )?;
    }

    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    kind: MessageKind,
    y: u16,
    term_width: u16,
) -> io::Result<()> {
    let color = match kind {
        MessageKind::Info => app.theme.info,
        MessageKind::Success => app.theme.success,
        MessageKind::Error => app.theme.error,
    };

    let x = if (term_width as usize) > msg.len() {
        (term_width - msg.len() as u16) / 2
    } else {
        0
    };

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(color),
        Print(msg),
        SetForegroundColor(Color::Reset)
    )?;
    Ok(())
}
