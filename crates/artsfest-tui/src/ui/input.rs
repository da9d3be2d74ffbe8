//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState, Tab, PAGE_SCROLL_SIZE};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    match app.state {
        AppState::Welcome => {
            app.dismiss_welcome();
            false
        }
        AppState::ShowingHelp => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.state = AppState::Normal;
            }
            false
        }
        AppState::ConfirmingQuit => handle_quit_confirmation(app, key),
        AppState::Searching => {
            handle_search_input(app, key);
            false
        }
        AppState::Quitting => true,
        AppState::Normal => handle_normal_input(app, key),
    }
}

fn handle_quit_confirmation(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.state = AppState::Quitting;
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.state = AppState::Normal;
            false
        }
        _ => false,
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.clear_search();
            app.state = AppState::Normal;
        }
        KeyCode::Enter => app.state = AppState::Normal,
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}

fn handle_normal_input(app: &mut App, key: KeyEvent) -> bool {
    app.status_message = None;

    match key.code {
        KeyCode::Char('q') => app.state = AppState::ConfirmingQuit,
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,
        KeyCode::Char('r') => app.refresh_now(),

        KeyCode::Char('1') => app.current_tab = Tab::Standings,
        KeyCode::Char('2') => app.current_tab = Tab::TopPerformers,
        KeyCode::Char('3') => app.current_tab = Tab::Results,
        KeyCode::Char('4') => app.current_tab = Tab::Events,
        KeyCode::Right | KeyCode::Tab => app.current_tab = app.current_tab.next(),
        KeyCode::Left | KeyCode::BackTab => app.current_tab = app.current_tab.prev(),

        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-(PAGE_SCROLL_SIZE as isize)),
        KeyCode::PageDown => app.move_selection(PAGE_SCROLL_SIZE as isize),
        KeyCode::Home => app.move_selection(isize::MIN),
        KeyCode::End => app.move_selection(isize::MAX),

        KeyCode::Char('/') => {
            app.current_tab = Tab::Results;
            app.state = AppState::Searching;
        }
        KeyCode::Esc if !app.search_query.is_empty() => app.clear_search(),
        KeyCode::Enter if app.current_tab == Tab::Events => app.view_selected_event(),
        _ => {}
    }

    false
}
