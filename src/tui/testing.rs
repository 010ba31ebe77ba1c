//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::DisplayConfig;
use crate::fixtures::{
    create_mock_feed, create_mock_hitting_stats, create_mock_pitching_stats, MOCK_BATTER_ID,
    MOCK_LIVE_GAME, MOCK_PITCHER_ID,
};
use crate::model::{BatterStats, GameSnapshot, LiveUpdate, PitcherStats};
use crate::tui::state::ViewMode;
use crate::tui::view::render_frame;

/// Update built from the mock live feed and mock stat lines
pub fn mock_live_update() -> LiveUpdate {
    LiveUpdate {
        snapshot: GameSnapshot::from_feed(&create_mock_feed(MOCK_LIVE_GAME))
            .expect("mock feed is well-formed"),
        batter_stats: BatterStats::from_people(&create_mock_hitting_stats(MOCK_BATTER_ID)),
        pitcher_stats: PitcherStats::from_people(&create_mock_pitching_stats(MOCK_PITCHER_ID)),
    }
}

/// Render a full frame into a fresh buffer of the given size
pub fn render_to_buffer(
    update: Option<&LiveUpdate>,
    mode: ViewMode,
    width: u16,
    height: u16,
) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render_frame(&mut buf, area, update, mode, &DisplayConfig::default());
    buf
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}
