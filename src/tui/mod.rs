//! Terminal UI for tictactoe_rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{digit_cell, move_cursor};
pub use ui::draw;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument, warn};

/// Runs the terminal UI until the user quits.
///
/// Expects [`init_tracing`](crate::init_tracing) with a file target, since
/// anything written to stdout or stderr would corrupt the screen.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            restore_terminal(&mut io::stdout());
            return Err(err);
        }
    };

    let res = run_app(&mut terminal, App::new(), config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI error");
    }
    info!("Terminal UI closed");

    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Leaves raw mode and the alternate screen after a failed setup.
fn restore_terminal(out: &mut impl Write) {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Draw, read one key, handle it; repeat until quit.
#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    config: &AppConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app, config))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code);
            if app.should_quit() {
                info!(step = app.state().current_step(), "User quit");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_terminal_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out);
        assert!(String::from_utf8_lossy(&out).contains("\x1b[?1049l"));
    }
}
