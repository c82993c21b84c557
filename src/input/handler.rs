use crate::app::{App, Focus};
use crate::persistence::StoragePort;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<P: StoragePort>(app: &mut App<P>, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.focus {
        Focus::Form => handle_form_keys(app, key),
        Focus::List => handle_list_keys(app, key),
    }
}

/// Handle keys while the input form has focus
fn handle_form_keys<P: StoragePort>(app: &mut App<P>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_form()?;
            Ok(false)
        }

        KeyCode::Esc | KeyCode::Tab => {
            app.focus_list();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }

        // Chords like Ctrl+W or Alt+B are not text
        KeyCode::Char(c) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
            app.form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while the task list has focus
fn handle_list_keys<P: StoragePort>(app: &mut App<P>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Delete control of the selected row
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.delete_selected()?;
            Ok(false)
        }

        KeyCode::Tab | KeyCode::Char('a') | KeyCode::Char('A') => {
            app.focus_form();
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}
