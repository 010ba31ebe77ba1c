/// PitchLegend widget - one line per pitch type thrown in the at-bat
///
/// Types appear once each in the order they were first thrown, in the colour
/// their marks use. Wide terminals also get the pitch name.

use phf::phf_map;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;
use crate::layout_constants::LEGEND_NAMES_MIN_WIDTH;
use crate::model::PitchHistory;
use crate::tui::transform::TerminalFrame;
use crate::tui::widgets::pitch_marks::{pitch_color, PITCH_MARK};
use crate::tui::widgets::{put_str, RenderableWidget};

static PITCH_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "FF" => "Four-Seam Fastball",
    "FT" => "Two-Seam Fastball",
    "SI" => "Sinker",
    "FC" => "Cutter",
    "SL" => "Slider",
    "ST" => "Sweeper",
    "SV" => "Slurve",
    "CU" => "Curveball",
    "KC" => "Knuckle Curve",
    "CH" => "Changeup",
    "FS" => "Splitter",
    "FO" => "Forkball",
    "SC" => "Screwball",
    "KN" => "Knuckleball",
    "EP" => "Eephus",
};

pub fn pitch_name(type_code: &str) -> Option<&'static str> {
    PITCH_NAMES.get(type_code).copied()
}

/// Legend entry for one pitch type
pub fn legend_line(type_code: &str, with_name: bool) -> String {
    match pitch_name(type_code) {
        Some(name) if with_name => format!("{} - {} {}", PITCH_MARK, type_code, name),
        _ => format!("{} - {}", PITCH_MARK, type_code),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PitchLegend<'a> {
    pub frame: TerminalFrame,
    pub history: &'a PitchHistory,
}

impl<'a> PitchLegend<'a> {
    pub fn new(frame: TerminalFrame, history: &'a PitchHistory) -> Self {
        Self { frame, history }
    }
}

impl RenderableWidget for PitchLegend<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let anchor = self.frame.legend_anchor();
        let with_names = self.frame.cols >= LEGEND_NAMES_MIN_WIDTH;

        for (i, type_code) in self.history.distinct_types().into_iter().enumerate() {
            let row = anchor.row + i as u16;
            if row >= self.frame.footer_row() {
                break;
            }
            let style = Style::default().fg(pitch_color(type_code, config));
            put_str(buf, area, row, anchor.col, &legend_line(type_code, with_names), style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.history.distinct_types().len() as u16)
    }
}
