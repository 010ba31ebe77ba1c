use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cache::fetch_player_stats_cached;
use crate::data_provider::{MlbDataProvider, StatGroup};
use crate::error::RefreshError;
use crate::model::{BatterStats, GameSnapshot, LiveUpdate, PitcherStats};

/// Latest update shared between the refresh task and the render loop.
/// `None` means the last fetch failed or nothing has been fetched yet.
pub type SnapshotSlot = Option<Arc<LiveUpdate>>;

/// Fetch the game feed and the stat lines of the players in it
///
/// Stat lines are secondary: a failure there leaves them empty but still
/// yields the snapshot.
pub async fn fetch_update(
    client: &dyn MlbDataProvider,
    game_pk: i64,
) -> Result<LiveUpdate, RefreshError> {
    let feed = client.game_feed(game_pk).await?;
    let snapshot = GameSnapshot::from_feed(&feed)?;

    let batter_stats = match fetch_player_stats_cached(client, snapshot.batter.id, StatGroup::Hitting).await {
        Ok(payload) => BatterStats::from_people(&payload),
        Err(e) => {
            debug!("Failed to fetch batter stats for {}: {}", snapshot.batter.id, e);
            None
        }
    };
    let pitcher_stats = match fetch_player_stats_cached(client, snapshot.pitcher.id, StatGroup::Pitching).await {
        Ok(payload) => PitcherStats::from_people(&payload),
        Err(e) => {
            debug!("Failed to fetch pitcher stats for {}: {}", snapshot.pitcher.id, e);
            None
        }
    };

    Ok(LiveUpdate {
        snapshot,
        batter_stats,
        pitcher_stats,
    })
}

/// Run one refresh and publish the outcome, replacing whatever the slot held
///
/// Returns whether fresh data was published.
pub async fn refresh_once(
    client: &dyn MlbDataProvider,
    game_pk: i64,
    slot: &watch::Sender<SnapshotSlot>,
) -> bool {
    match fetch_update(client, game_pk).await {
        Ok(update) => {
            debug!("REFRESH: published snapshot for game {}", game_pk);
            slot.send_replace(Some(Arc::new(update)));
            true
        }
        Err(e) => {
            warn!("REFRESH: game {} unavailable this tick: {}", game_pk, e);
            slot.send_replace(None);
            false
        }
    }
}

/// Background task loop that periodically refreshes the game snapshot
///
/// The first refresh happens one `interval` after start; callers fetch the
/// initial snapshot themselves. Exits when `stop_rx` changes or its sender is
/// dropped, including in the middle of a fetch.
pub async fn refresh_loop(
    client: Arc<dyn MlbDataProvider>,
    game_pk: i64,
    slot: watch::Sender<SnapshotSlot>,
    interval: Duration,
    mut stop_rx: watch::Receiver<bool>,
) {
    let mut interval_timer = tokio::time::interval(interval);
    interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval_timer.tick().await; // First tick completes immediately

    loop {
        if *stop_rx.borrow() {
            break;
        }

        tokio::select! {
            _ = interval_timer.tick() => {}
            _ = stop_rx.changed() => break,
        }

        tokio::select! {
            _ = refresh_once(client.as_ref(), game_pk, &slot) => {}
            _ = stop_rx.changed() => break,
        }
    }

    info!("REFRESH: loop for game {} stopped", game_pk);
}
