/// MatchupTitle widget - pitcher and batter names centred above the zone

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use crate::config::DisplayConfig;
use crate::formatting::centered_start;
use crate::tui::transform::TerminalFrame;
use crate::tui::widgets::{put_str, RenderableWidget};

#[derive(Debug, Clone, Copy)]
pub struct MatchupTitle<'a> {
    pub frame: TerminalFrame,
    pub pitcher: &'a str,
    pub batter: &'a str,
}

impl<'a> MatchupTitle<'a> {
    pub fn new(frame: TerminalFrame, pitcher: &'a str, batter: &'a str) -> Self {
        Self {
            frame,
            pitcher,
            batter,
        }
    }
}

impl RenderableWidget for MatchupTitle<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let style = Style::default()
            .fg(config.theme.header_fg())
            .add_modifier(Modifier::BOLD);
        let row = self.frame.title_row();

        for (offset, text) in [
            format!("Pitcher: {}", self.pitcher),
            format!("Batter: {}", self.batter),
        ]
        .iter()
        .enumerate()
        {
            let col = centered_start(self.frame.mid_col, text);
            put_str(buf, area, row + offset as u16, col, text, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
