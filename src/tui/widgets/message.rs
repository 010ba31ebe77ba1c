/// CenteredMessage widget - a single line of text centred horizontally

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;
use crate::formatting::centered_start;
use crate::tui::widgets::{put_str, RenderableWidget};

pub const WAITING_FOR_DATA: &str = "Waiting for game data...";
pub const WAITING_FOR_PITCH: &str = "Waiting for first pitch";

#[derive(Debug, Clone)]
pub struct CenteredMessage {
    pub text: String,
    /// Row to draw on; the middle row of the area when unset
    pub row: Option<u16>,
}

impl CenteredMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            row: None,
        }
    }

    pub fn at_row(mut self, row: u16) -> Self {
        self.row = Some(row);
        self
    }
}

impl RenderableWidget for CenteredMessage {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let row = self.row.unwrap_or(area.height / 2);
        let col = centered_start(area.width / 2, &self.text);
        put_str(buf, area, row, col, &self.text, Style::default().fg(config.theme.text_fg));
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
