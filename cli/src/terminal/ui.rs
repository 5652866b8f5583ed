//! Interactive review screen.
//!
//! A raw-mode, alternate-screen list of every reconciled domain. The loop
//! blocks on the next key event; all mutation goes through the selection
//! engine between one frame and the next.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use har2hosts_common::model::{DomainRecord, Provenance};
use har2hosts_core::selection;

use super::format;

const TITLE: &str = "Space to toggle selection, Enter to save, Esc to quit | White=HAR Yellow=Hosts";

/// How the operator left the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Enter: serialize the current selection.
    Commit,
    /// Esc or Ctrl-C: discard the session.
    Quit,
}

/// Puts the terminal back together on every exit path, panics included.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Blocks on key events until the operator commits or quits.
pub fn run(records: &mut [DomainRecord]) -> io::Result<Outcome> {
    let _guard = ScreenGuard::enter()?;
    let mut cursor: usize = 0;

    loop {
        draw(records, cursor)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Up => cursor = selection::move_cursor(cursor, -1, records.len()),
            KeyCode::Down => cursor = selection::move_cursor(cursor, 1, records.len()),
            KeyCode::Char(' ') => selection::toggle_at(records, cursor),
            KeyCode::Enter => return Ok(Outcome::Commit),
            KeyCode::Esc => return Ok(Outcome::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Outcome::Quit);
            }
            _ => {}
        }
    }
}

fn draw(records: &[DomainRecord], cursor: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    let (width, height) = terminal::size()?;
    let width = width as usize;

    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format::clip(TITLE, width))
    )?;

    let (first, last) = window(cursor, records.len(), height as usize);

    for (idx, record) in records.iter().enumerate().take(last).skip(first) {
        let y = (idx - first + 1) as u16;
        queue!(stdout, MoveTo(0, y))?;

        if record.provenance == Provenance::HostsFile {
            queue!(stdout, SetForegroundColor(Color::Yellow))?;
        }
        if idx == cursor {
            queue!(stdout, SetBackgroundColor(Color::DarkGrey))?;
        }

        queue!(
            stdout,
            Print(format::clip(&format::row(record), width)),
            ResetColor
        )?;
    }

    stdout.flush()
}

/// Visible index range for the current cursor and screen height.
///
/// Row 0 is the title; the list gets the rest. The window slides only as
/// far as needed to keep the cursor row on screen.
fn window(cursor: usize, len: usize, height: usize) -> (usize, usize) {
    let first = cursor.saturating_sub(height.saturating_sub(3));
    let last = (first + height.saturating_sub(2)).min(len);
    (first, last)
}
