//! Mapping from physical pitch locations to terminal cells.
//!
//! The plate and the zone have a fixed physical size while the terminal can
//! be resized at any time, so a `TerminalFrame` is rebuilt for every redraw.
//! Rows grow downward and the horizontal axis is mirrored: a pitch on the
//! pitcher's right (positive `px`) lands on the left of the screen.

use crate::layout_constants::{
    ZONE_BOX_ASPECT, ZONE_BOX_MAX_HEIGHT_SEVENTHS, ZONE_BOX_WIDTH_DIVISOR,
};
use crate::model::{PitchHistory, StrikeZoneRect};

/// Width of home plate (ft)
pub const PLATE_WIDTH_FT: f64 = 17.0 / 12.0;

/// Zone drawn before the first tracked pitch of an at-bat
pub const DEFAULT_ZONE: StrikeZoneRect = StrikeZoneRect {
    top: 3.5,
    bottom: 1.5,
};

/// Rows kept free below a pitch mark for its speed label
const MARK_BOTTOM_INSET: u16 = 1;

/// Columns kept free left and right of a pitch mark for its speed label
const MARK_LEFT_INSET: u16 = 1;
const MARK_RIGHT_INSET: u16 = 2;

/// `value * num / den` without overflowing for `num <= den`
fn fraction(value: u16, num: u16, den: u16) -> u16 {
    (u32::from(value) * u32::from(num) / u32::from(den)) as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub row: u16,
    pub col: u16,
}

/// Geometry of one redraw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalFrame {
    pub rows: u16,
    pub cols: u16,
    pub mid_row: u16,
    pub mid_col: u16,
    pub box_width: u16,
    pub box_height: u16,
    pub box_top: u16,
    pub box_bottom: u16,
    pub box_left: u16,
    pub box_right: u16,
    pub zone: StrikeZoneRect,
}

impl TerminalFrame {
    pub fn new(rows: u16, cols: u16, zone: StrikeZoneRect) -> Self {
        let mid_row = rows / 2;
        let mid_col = cols / 2;

        let box_width = (cols / ZONE_BOX_WIDTH_DIVISOR).max(2);
        let max_height = fraction(rows, ZONE_BOX_MAX_HEIGHT_SEVENTHS, 7).saturating_sub(1).max(2);
        let box_height = ((box_width as f64 / ZONE_BOX_ASPECT).round() as u16).clamp(2, max_height);

        let box_top = mid_row.saturating_sub(box_height / 2);
        let box_left = mid_col.saturating_sub(box_width / 2);

        Self {
            rows,
            cols,
            mid_row,
            mid_col,
            box_width,
            box_height,
            box_top,
            box_bottom: box_top + box_height,
            box_left,
            box_right: box_left + box_width,
            zone,
        }
    }

    /// Cells per foot horizontally
    pub fn x_scale(&self) -> f64 {
        self.box_width as f64 / PLATE_WIDTH_FT
    }

    /// Cells per foot vertically; a zone with no height is drawn as the default one
    pub fn y_scale(&self) -> f64 {
        let height = self.zone.height();
        let height = if height.is_finite() && height > 0.0 {
            height
        } else {
            DEFAULT_ZONE.height()
        };
        self.box_height as f64 / height
    }

    /// Cell of a pitch at `(px, pz)` feet, clamped so its label stays on screen
    pub fn pitch_cell(&self, px: f64, pz: f64) -> CellPos {
        let pz = pz.max(0.0);
        let rel_z = pz - self.zone.bottom;
        let row = (self.box_bottom as f64 - rel_z * self.y_scale()).round();
        let col = (self.mid_col as f64 - px * self.x_scale()).round();

        let max_row = self.rows.saturating_sub(1 + MARK_BOTTOM_INSET);
        let max_col = self.cols.saturating_sub(1 + MARK_RIGHT_INSET).max(MARK_LEFT_INSET);

        CellPos {
            row: clamp_cell(row, 0, max_row),
            col: clamp_cell(col, MARK_LEFT_INSET, max_col),
        }
    }

    pub fn pitch_cells(&self, history: &PitchHistory) -> Vec<CellPos> {
        history
            .pitches
            .iter()
            .map(|p| self.pitch_cell(p.px, p.pz))
            .collect()
    }

    /// Top-left of the inning/score/count block
    pub fn scoreboard_anchor(&self) -> CellPos {
        CellPos {
            row: self.rows / 4,
            col: self.cols / 8,
        }
    }

    /// Top-left of the pitch legend
    pub fn legend_anchor(&self) -> CellPos {
        CellPos {
            row: self.rows / 4,
            col: fraction(self.cols, 5, 6),
        }
    }

    /// Row of the pitcher line; the batter line follows
    pub fn title_row(&self) -> u16 {
        self.rows / 7
    }

    /// First row of the at-bat result banner
    pub fn result_row(&self) -> u16 {
        fraction(self.rows, 6, 7)
    }

    /// Width the result banner wraps to
    pub fn result_width(&self) -> u16 {
        self.cols - self.cols / 4
    }

    pub fn footer_row(&self) -> u16 {
        self.rows.saturating_sub(1)
    }
}

fn clamp_cell(value: f64, min: u16, max: u16) -> u16 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min as f64, max.max(min) as f64) as u16
}
