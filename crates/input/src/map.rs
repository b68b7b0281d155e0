//! Key mapping from terminal events to session actions.

use crate::types::SessionAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to session actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SessionAction> {
    if should_quit(key) {
        return Some(SessionAction::Quit);
    }
    match key.code {
        KeyCode::Char('l') | KeyCode::Char('L') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SessionAction::Redraw)
        }
        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
