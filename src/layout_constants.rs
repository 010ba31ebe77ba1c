//! Shared layout constants used across CLI and TUI components.
//!
//! This module centralizes common layout values to ensure consistency
//! and make it easier to adjust layouts globally.

/// Smallest terminal height the live view is laid out for
pub const MIN_TERMINAL_ROWS: u16 = 20;

/// Smallest terminal width the live view is laid out for
pub const MIN_TERMINAL_COLS: u16 = 60;

/// Colours needed to tell the pitch types apart
pub const MIN_COLOR_COUNT: u16 = 256;

/// Terminal width from which the stats view shows full counting stats
pub const FULL_STATS_MIN_WIDTH: u16 = 110;

/// Strike zone box width as a fraction of terminal width (1/N)
pub const ZONE_BOX_WIDTH_DIVISOR: u16 = 6;

/// Width-to-height ratio of the strike zone box in cells
pub const ZONE_BOX_ASPECT: f64 = 1.5;

/// Largest share of the terminal height the zone box may take (N/7), leaving
/// the title and result rows free
pub const ZONE_BOX_MAX_HEIGHT_SEVENTHS: u16 = 4;

// Stat table formatting constants

/// Width of the player name column in stat tables
pub const PLAYER_NAME_COL_WIDTH: usize = 24;

/// Width of counting stat columns (G, AB, HR, ...)
pub const COUNT_COL_WIDTH: usize = 4;

/// Width of rate stat columns (AVG, ERA, ...)
pub const RATE_COL_WIDTH: usize = 6;

/// Terminal width from which the pitch legend spells out pitch names
pub const LEGEND_NAMES_MIN_WIDTH: u16 = 120;
