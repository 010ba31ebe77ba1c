/// Keyboard event to action mapping
///
/// This module converts crossterm KeyEvents into the actions the live view
/// understands.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowLive,
    ShowStats,
}

/// Map a key press to an action; releases, repeats and unbound keys map to None
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::ShowStats),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Action::ShowLive),
        _ => None,
    };
    trace!("KEY: {:?} -> {:?}", key.code, action);
    action
}
