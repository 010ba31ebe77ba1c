/// Mock MLB API client for development and testing
use crate::data_provider::{GameStatus, Highlight, MlbDataProvider, ScheduleGame, StatGroup};
use crate::error::ApiError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

use crate::fixtures;

/// Mock client that returns fixture data instead of making real API calls
///
/// The first `feed_failures` calls to `game_feed` fail, which lets tests drive
/// the refresh loop through a run of transient errors. A `feed_delay` holds
/// every `game_feed` call open to simulate a slow server.
pub struct MockClient {
    feed_failures: AtomicUsize,
    feed_calls: AtomicUsize,
    feed_delay: Duration,
}

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self::with_feed_failures(0)
    }

    pub fn with_feed_failures(failures: usize) -> Self {
        Self {
            feed_failures: AtomicUsize::new(failures),
            feed_calls: AtomicUsize::new(0),
            feed_delay: Duration::ZERO,
        }
    }

    pub fn with_feed_delay(delay: Duration) -> Self {
        Self {
            feed_delay: delay,
            ..Self::with_feed_failures(0)
        }
    }

    /// Number of `game_feed` calls made so far, failed ones included
    pub fn feed_calls(&self) -> usize {
        self.feed_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MlbDataProvider for MockClient {
    async fn schedule(&self, date: Option<NaiveDate>) -> Result<Vec<ScheduleGame>, ApiError> {
        info!("MockClient: Returning mock schedule for date: {:?}", date);
        Ok(fixtures::create_mock_schedule(date))
    }

    async fn game_feed(&self, game_pk: i64) -> Result<Value, ApiError> {
        self.feed_calls.fetch_add(1, Ordering::SeqCst);
        if !self.feed_delay.is_zero() {
            tokio::time::sleep(self.feed_delay).await;
        }
        let failing = self
            .feed_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            info!("MockClient: Simulating feed failure for game {}", game_pk);
            return Err(ApiError::Mock(format!("feed unavailable for {}", game_pk)));
        }
        info!("MockClient: Returning mock feed for game {}", game_pk);
        Ok(fixtures::create_mock_feed(game_pk))
    }

    async fn game_status(&self, game_pk: i64) -> Result<GameStatus, ApiError> {
        Ok(fixtures::create_mock_status(game_pk))
    }

    async fn highlights(&self, game_pk: i64) -> Result<Vec<Highlight>, ApiError> {
        info!("MockClient: Returning mock highlights for game {}", game_pk);
        Ok(fixtures::create_mock_highlights(game_pk))
    }

    async fn player_stats(&self, player_id: i64, group: StatGroup) -> Result<Value, ApiError> {
        info!("MockClient: Returning mock {} stats for {}", group.as_api_str(), player_id);
        Ok(match group {
            StatGroup::Hitting => fixtures::create_mock_hitting_stats(player_id),
            StatGroup::Pitching => fixtures::create_mock_pitching_stats(player_id),
        })
    }
}
