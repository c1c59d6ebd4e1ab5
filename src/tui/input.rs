//! Key handling for the main screen and the model drawer

use model_picker::app::App;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Route a key press to the drawer when it is open, otherwise to the main screen
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.host.drawer_open {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('u') {
            app.clear_search();
            return;
        }
        handle_drawer_key(app, code);
    } else {
        handle_main_key(app, code);
    }
}

fn handle_drawer_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_drawer(),
        KeyCode::Enter => {
            app.confirm_selection();
        }
        KeyCode::Up => app.select_prev(),
        KeyCode::Down | KeyCode::Tab => app.select_next(),
        KeyCode::Backspace => app.handle_backspace(),
        KeyCode::Char(c) => app.handle_char(c),
        _ => {}
    }
}

fn handle_main_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('m') | KeyCode::Enter => app.open_drawer(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}
