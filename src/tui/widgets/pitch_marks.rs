/// PitchMarks widget - one coloured `X` per pitch of the at-bat with its speed
/// written below-left of the mark

use phf::phf_map;
use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}};
use crate::config::DisplayConfig;
use crate::model::PitchHistory;
use crate::tui::transform::TerminalFrame;
use crate::tui::widgets::{put_str, RenderableWidget};

pub const PITCH_MARK: &str = "X";

static PITCH_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "FF" => Color::Blue,
    "SL" => Color::Indexed(208),
    "CU" => Color::Red,
    "CH" => Color::Green,
    "FS" => Color::Yellow,
    "FC" => Color::Indexed(218),
    "SI" => Color::Indexed(129),
    "FT" => Color::Indexed(230),
};

/// Colour of a pitch type; unknown codes use the theme's fallback colour
pub fn pitch_color(type_code: &str, config: &DisplayConfig) -> Color {
    PITCH_COLORS
        .get(type_code)
        .copied()
        .unwrap_or(config.theme.fallback_pitch_fg)
}

#[derive(Debug, Clone, Copy)]
pub struct PitchMarks<'a> {
    pub frame: TerminalFrame,
    pub history: &'a PitchHistory,
}

impl<'a> PitchMarks<'a> {
    pub fn new(frame: TerminalFrame, history: &'a PitchHistory) -> Self {
        Self { frame, history }
    }
}

impl RenderableWidget for PitchMarks<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        // Later pitches are drawn over earlier ones sharing a cell
        for pitch in &self.history.pitches {
            let cell = self.frame.pitch_cell(pitch.px, pitch.pz);
            let style = Style::default().fg(pitch_color(&pitch.type_code, config));
            let speed = format!("{}", pitch.speed.round() as i64);

            put_str(buf, area, cell.row, cell.col, PITCH_MARK, style);
            put_str(buf, area, cell.row + 1, cell.col - 1, &speed, style);
        }
    }
}
