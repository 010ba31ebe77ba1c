/// Trait for providing MLB data, abstracting over the real API client and mock implementations
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::fmt;

use crate::error::ApiError;

/// Coarse state of a game, as reported by `abstractGameState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Preview,
    InProgress,
    Final,
}

impl GameStatus {
    /// Parse the feed's `abstractGameState` value
    ///
    /// Anything the API reports that is neither live nor final is treated as
    /// not started yet.
    pub fn from_abstract_state(state: &str) -> Self {
        match state {
            "Live" => GameStatus::InProgress,
            "Final" => GameStatus::Final,
            _ => GameStatus::Preview,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Preview => write!(f, "Preview"),
            GameStatus::InProgress => write!(f, "Live"),
            GameStatus::Final => write!(f, "Final"),
        }
    }
}

/// One game from the daily schedule
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleGame {
    pub game_pk: i64,
    pub away_team: String,
    pub home_team: String,
    pub start_time: DateTime<Utc>,
    pub status: GameStatus,
}

/// One highlight clip of a finished game
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub headline: String,
    pub blurb: String,
    pub url: Option<String>,
}

/// Which stat group to request for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatGroup {
    Hitting,
    Pitching,
}

impl StatGroup {
    pub fn as_api_str(&self) -> &'static str {
        match self {
            StatGroup::Hitting => "hitting",
            StatGroup::Pitching => "pitching",
        }
    }
}

/// Trait for MLB data providers, implemented by both the real Client and MockClient
#[async_trait]
pub trait MlbDataProvider: Send + Sync {
    /// Get the schedule of games for a date (today when `None`)
    async fn schedule(&self, date: Option<NaiveDate>) -> Result<Vec<ScheduleGame>, ApiError>;

    /// Get the raw live feed of a game
    async fn game_feed(&self, game_pk: i64) -> Result<Value, ApiError>;

    /// Get the coarse status of a game
    async fn game_status(&self, game_pk: i64) -> Result<GameStatus, ApiError>;

    /// Get the highlight clips of a game
    async fn highlights(&self, game_pk: i64) -> Result<Vec<Highlight>, ApiError>;

    /// Get the raw season stats payload of a player
    async fn player_stats(&self, player_id: i64, group: StatGroup) -> Result<Value, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_status_from_abstract_state() {
        assert_eq!(GameStatus::from_abstract_state("Live"), GameStatus::InProgress);
        assert_eq!(GameStatus::from_abstract_state("Final"), GameStatus::Final);
        assert_eq!(GameStatus::from_abstract_state("Preview"), GameStatus::Preview);
        assert_eq!(GameStatus::from_abstract_state("Other"), GameStatus::Preview);
    }

    #[test]
    fn test_stat_group_api_str() {
        assert_eq!(StatGroup::Hitting.as_api_str(), "hitting");
        assert_eq!(StatGroup::Pitching.as_api_str(), "pitching");
    }
}
