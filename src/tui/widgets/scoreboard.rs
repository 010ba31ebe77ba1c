/// Scoreboard widget - inning, score, count, expected call and the umpire's call
///
/// Drawn left of the strike zone box and clipped so it never runs into it.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;
use crate::model::{Count, GameSnapshot};
use crate::tui::transform::TerminalFrame;
use crate::tui::widgets::{put_str, RenderableWidget};

#[derive(Debug, Clone, Copy)]
pub struct Scoreboard<'a> {
    pub frame: TerminalFrame,
    pub snapshot: &'a GameSnapshot,
}

impl<'a> Scoreboard<'a> {
    pub fn new(frame: TerminalFrame, snapshot: &'a GameSnapshot) -> Self {
        Self { frame, snapshot }
    }

    /// Scoreboard lines top to bottom; `None` leaves its row blank.
    /// An at-bat without events shows a fresh `0-0 O: 0` count.
    pub fn lines(&self) -> [Option<String>; 5] {
        let s = self.snapshot;
        [
            Some(format!("I: {}", s.inning)),
            Some(format!("R: {}-{}", s.score.away, s.score.home)),
            Some(count_line(s.count.unwrap_or_default())),
            s.expected_call().map(|call| format!("EC: {}", call)),
            s.pitch_call.clone(),
        ]
    }
}

fn count_line(count: Count) -> String {
    format!("{}-{} O: {}", count.balls, count.strikes, count.outs)
}

impl RenderableWidget for Scoreboard<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let anchor = self.frame.scoreboard_anchor();
        let style = Style::default().fg(config.theme.text_fg);
        let max_width = self.frame.box_left.saturating_sub(anchor.col + 1) as usize;

        for (i, line) in self.lines().iter().enumerate() {
            if let Some(text) = line {
                let clipped: String = text.chars().take(max_width).collect();
                put_str(buf, area, anchor.row + i as u16, anchor.col, &clipped, style);
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(5)
    }
}
