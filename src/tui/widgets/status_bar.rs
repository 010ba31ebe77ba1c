/// StatusBar widget - key hints on the last row, active view on the right

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use crate::config::DisplayConfig;
use crate::tui::state::ViewMode;
use crate::tui::widgets::{put_str, RenderableWidget};

pub const KEY_HINTS: &str = "q quit  l live  s stats";

#[derive(Debug, Clone, Copy)]
pub struct StatusBar {
    pub mode: ViewMode,
}

impl StatusBar {
    pub fn new(mode: ViewMode) -> Self {
        Self { mode }
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            ViewMode::Live => "LIVE",
            ViewMode::Stats => "STATS",
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let row = area.height - 1;
        put_str(buf, area, row, 0, KEY_HINTS, Style::default().fg(config.theme.fallback_pitch_fg));

        let label = self.mode_label();
        let col = area.width.saturating_sub(label.len() as u16);
        if col as usize > KEY_HINTS.len() {
            let style = Style::default()
                .fg(config.theme.header_fg())
                .add_modifier(Modifier::BOLD);
            put_str(buf, area, row, col, label, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_hints_and_mode_on_last_row() {
        let buf = render_widget(&StatusBar::new(ViewMode::Stats), 60, 3);
        let line = buffer_line(&buf, 2);
        assert!(line.starts_with(KEY_HINTS));
        assert!(line.ends_with("STATS"));
        assert!(buffer_line(&buf, 0).trim().is_empty());
    }

    #[test]
    fn test_mode_label_dropped_when_narrow() {
        let buf = render_widget(&StatusBar::new(ViewMode::Live), 26, 1);
        assert_eq!(buffer_line(&buf, 0).trim_end(), KEY_HINTS);
    }
}
