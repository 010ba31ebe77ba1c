/// Widget-based rendering infrastructure for the live view
///
/// Every element of the screen is a small widget that draws itself into a
/// ratatui Buffer at positions computed from a `TerminalFrame`. Widgets never
/// fail: a position outside the drawing area is skipped.

#[cfg(test)]
pub mod testing;

pub mod matchup_title;
pub use matchup_title::MatchupTitle;

pub mod message;
pub use message::CenteredMessage;

pub mod pitch_legend;
pub use pitch_legend::PitchLegend;

pub mod pitch_marks;
pub use pitch_marks::{pitch_color, PitchMarks};

pub mod preview;
pub use preview::PreviewScreen;

pub mod result_banner;
pub use result_banner::ResultBanner;

pub mod scoreboard;
pub use scoreboard::Scoreboard;

pub mod stats_table;
pub use stats_table::{PlayerLine, StatsTable};

pub mod status_bar;
pub use status_bar::StatusBar;

pub mod strike_zone;
pub use strike_zone::StrikeZoneBox;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding
/// string-based intermediate representations, and can be rendered into test
/// buffers.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

/// Write `text` at `(row, col)` relative to `area`, clipped at its right edge
///
/// Positions outside `area` are skipped.
pub fn put_str(buf: &mut Buffer, area: Rect, row: u16, col: u16, text: &str, style: Style) {
    if row >= area.height || col >= area.width {
        return;
    }
    let max_width = (area.width - col) as usize;
    buf.set_stringn(area.x + col, area.y + row, text, max_width, style);
}
