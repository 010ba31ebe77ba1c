/// PreviewScreen widget - shown for a game that has not started

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use crate::config::DisplayConfig;
use crate::tui::widgets::{put_str, RenderableWidget};

pub const NOT_STARTED: &str = "Game has not started yet!";
pub const PRESS_ANY_KEY: &str = "Press any key to exit";

#[derive(Debug, Clone)]
pub struct PreviewScreen {
    pub away_team: String,
    pub home_team: String,
    /// Start time already formatted in local time
    pub start: String,
}

impl RenderableWidget for PreviewScreen {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let text = Style::default().fg(config.theme.text_fg);
        let header = Style::default()
            .fg(config.theme.header_fg())
            .add_modifier(Modifier::BOLD);

        put_str(buf, area, 0, 0, NOT_STARTED, header);
        put_str(buf, area, 2, 0, &format!("{} @ {}", self.away_team, self.home_team), text);
        put_str(buf, area, 3, 0, &format!("First pitch: {}", self.start), text);
        put_str(buf, area, 5, 0, PRESS_ANY_KEY, text);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(6)
    }
}
