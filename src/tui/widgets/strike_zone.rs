/// StrikeZoneBox widget - outline of the strike zone centred on the screen

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;
use crate::tui::transform::TerminalFrame;
use crate::tui::widgets::{put_str, RenderableWidget};

#[derive(Debug, Clone, Copy)]
pub struct StrikeZoneBox {
    pub frame: TerminalFrame,
}

impl StrikeZoneBox {
    pub fn new(frame: TerminalFrame) -> Self {
        Self { frame }
    }
}

impl RenderableWidget for StrikeZoneBox {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let f = &self.frame;
        let chars = &config.box_chars;
        let style = Style::default().fg(config.theme.zone_fg);
        let inner = f.box_right.saturating_sub(f.box_left + 1) as usize;

        let top = format!("{}{}{}", chars.top_left, chars.horizontal.repeat(inner), chars.top_right);
        let bottom = format!(
            "{}{}{}",
            chars.bottom_left,
            chars.horizontal.repeat(inner),
            chars.bottom_right
        );

        put_str(buf, area, f.box_top, f.box_left, &top, style);
        for row in f.box_top + 1..f.box_bottom {
            put_str(buf, area, row, f.box_left, &chars.vertical, style);
            put_str(buf, area, row, f.box_right, &chars.vertical, style);
        }
        put_str(buf, area, f.box_bottom, f.box_left, &bottom, style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.frame.box_height + 1)
    }
}
