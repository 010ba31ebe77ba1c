pub mod highlights;
pub mod schedule;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parse optional date string, `None` meaning today
///
/// Accepts dates in YYYY-MM-DD format. Returns an error if the date string is
/// malformed.
pub fn parse_game_date(date: Option<String>) -> Result<Option<NaiveDate>> {
    date.map(|date_str| {
        NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))
    })
    .transpose()
}
