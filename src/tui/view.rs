//! Composition of one screen from the latest update.
//!
//! Rendering is a pure function of the slot contents, the view mode and the
//! drawing area: the same inputs always produce the same buffer.

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::DisplayConfig;
use crate::layout_constants::{MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS};
use crate::model::{GameSnapshot, LiveUpdate};
use crate::tui::state::ViewMode;
use crate::tui::transform::{TerminalFrame, DEFAULT_ZONE};
use crate::tui::widgets::message::{WAITING_FOR_DATA, WAITING_FOR_PITCH};
use crate::tui::widgets::stats_table::StatsView;
use crate::tui::widgets::{
    CenteredMessage, MatchupTitle, PitchLegend, PitchMarks, RenderableWidget, ResultBanner,
    Scoreboard, StatusBar, StrikeZoneBox,
};

pub fn render_frame(
    buf: &mut Buffer,
    area: Rect,
    update: Option<&LiveUpdate>,
    mode: ViewMode,
    config: &DisplayConfig,
) {
    if area.height < MIN_TERMINAL_ROWS || area.width < MIN_TERMINAL_COLS {
        let text = format!(
            "Terminal too small ({}x{}), need {}x{}",
            area.width, area.height, MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS
        );
        CenteredMessage::new(text).render(area, buf, config);
        return;
    }

    StatusBar::new(mode).render(area, buf, config);

    let Some(update) = update else {
        CenteredMessage::new(WAITING_FOR_DATA).render(area, buf, config);
        return;
    };

    match mode {
        ViewMode::Live => render_live(&update.snapshot, area, buf, config),
        ViewMode::Stats => StatsView::new(update).render(area, buf, config),
    }
}

fn render_live(snapshot: &GameSnapshot, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let history = snapshot.pitch_history.as_ref();
    let zone = history.and_then(|h| h.strike_zone()).unwrap_or(DEFAULT_ZONE);
    let frame = TerminalFrame::new(area.height, area.width, zone);

    StrikeZoneBox::new(frame).render(area, buf, config);
    Scoreboard::new(frame, snapshot).render(area, buf, config);
    MatchupTitle::new(frame, &snapshot.pitcher.name, &snapshot.batter.name).render(area, buf, config);

    match history {
        // Pitches were thrown but none carried tracking data
        Some(history) if history.is_empty() => {}
        Some(history) => {
            PitchMarks::new(frame, history).render(area, buf, config);
            PitchLegend::new(frame, history).render(area, buf, config);
        }
        None => CenteredMessage::new(WAITING_FOR_PITCH)
            .at_row(frame.box_bottom + 1)
            .render(area, buf, config),
    }

    if let Some(result) = &snapshot.at_bat_result {
        ResultBanner::new(frame, result).render(area, buf, config);
    }
}
