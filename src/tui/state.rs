use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

use crate::data_provider::GameStatus;
use crate::tui::keys::{key_to_action, Action};

/// Which screen the live loop draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Live,
    Stats,
}

/// Where the program is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingGameSelection,
    /// Selected game has not started; a key press exits
    Preview,
    /// Live view with the refresh task running
    Running,
    Terminating,
}

impl Phase {
    /// Phase entered once a game with `status` is chosen
    pub fn after_selection(status: GameStatus) -> Self {
        match status {
            GameStatus::Preview => Phase::Preview,
            GameStatus::InProgress => Phase::Running,
            // Highlights are printed on the way out
            GameStatus::Final => Phase::Terminating,
        }
    }
}

/// Foreground state: lifecycle phase plus the active view
#[derive(Debug, Clone, Default)]
pub struct App {
    phase: Phase,
    mode: ViewMode,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.phase == Phase::Terminating
    }

    pub fn select_game(&mut self, status: GameStatus) -> Phase {
        if self.phase == Phase::AwaitingGameSelection {
            self.phase = Phase::after_selection(status);
            debug!("STATE: selected {} game -> {:?}", status, self.phase);
        }
        self.phase
    }

    pub fn apply(&mut self, action: Action) {
        if self.phase != Phase::Running {
            return;
        }
        match action {
            Action::Quit => self.phase = Phase::Terminating,
            Action::ShowLive => self.mode = ViewMode::Live,
            Action::ShowStats => self.mode = ViewMode::Stats,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.phase {
            Phase::Preview if key.kind == KeyEventKind::Press => self.phase = Phase::Terminating,
            Phase::Running => {
                if let Some(action) = key_to_action(key) {
                    self.apply(action);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    #[test]
    fn test_selection_transitions() {
        assert_eq!(App::new().select_game(GameStatus::Preview), Phase::Preview);
        assert_eq!(App::new().select_game(GameStatus::InProgress), Phase::Running);
        assert_eq!(App::new().select_game(GameStatus::Final), Phase::Terminating);
    }

    #[test]
    fn test_selection_happens_once() {
        let mut app = App::new();
        app.select_game(GameStatus::InProgress);
        assert_eq!(app.select_game(GameStatus::Final), Phase::Running);
    }

    #[test]
    fn test_preview_exits_on_any_key() {
        let mut app = App::new();
        app.select_game(GameStatus::Preview);
        app.handle_key(key('x'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_running_switches_views_then_quits() {
        let mut app = App::new();
        app.select_game(GameStatus::InProgress);
        assert_eq!(app.mode(), ViewMode::Live);

        app.handle_key(key('s'));
        assert_eq!(app.mode(), ViewMode::Stats);
        app.handle_key(key('x'));
        assert_eq!(app.phase(), Phase::Running);
        app.handle_key(key('l'));
        assert_eq!(app.mode(), ViewMode::Live);

        app.handle_key(key('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_actions_ignored_before_running() {
        let mut app = App::new();
        app.apply(Action::Quit);
        assert_eq!(app.phase(), Phase::AwaitingGameSelection);
    }
}
