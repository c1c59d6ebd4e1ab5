//! Terminal user interface hosting the model drawer

mod input;
mod render;

use anyhow::Result;
use model_picker::app::App;
use ratatui::crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Run the TUI application
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let poll_interval = Duration::from_millis(app.config.poll_interval_ms);
    let result = run_loop(&mut terminal, &mut app, poll_interval);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| render::render(frame, app))?;

        // Resizes and idle ticks only need the redraw above
        if let Some(key) = next_key(poll_interval)? {
            input::handle_key_event(app, key.code, key.modifiers);
        }
    }

    Ok(())
}

/// Wait up to `timeout` for a key press or repeat
fn next_key(timeout: Duration) -> Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(key),
        _ => None,
    })
}
