/// ResultBanner widget - description of the concluded at-bat, wrapped and
/// centred below the zone

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;
use crate::formatting::{centered_start, collapse_whitespace, wrap_words};
use crate::tui::transform::TerminalFrame;
use crate::tui::widgets::{put_str, RenderableWidget};

#[derive(Debug, Clone, Copy)]
pub struct ResultBanner<'a> {
    pub frame: TerminalFrame,
    pub text: &'a str,
}

impl<'a> ResultBanner<'a> {
    pub fn new(frame: TerminalFrame, text: &'a str) -> Self {
        Self { frame, text }
    }

    pub fn lines(&self) -> Vec<String> {
        wrap_words(&collapse_whitespace(self.text), self.frame.result_width() as usize)
    }
}

impl RenderableWidget for ResultBanner<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let style = Style::default().fg(config.theme.text_fg);
        let first_row = self.frame.result_row();

        // The last row belongs to the footer
        for (i, line) in self.lines().iter().enumerate() {
            let row = first_row + i as u16;
            if row >= self.frame.footer_row() {
                break;
            }
            put_str(buf, area, row, centered_start(self.frame.mid_col, line), line, style);
        }
    }
}
