use crate::data_provider::{MlbDataProvider, StatGroup};
use crate::error::ApiError;
use cached::proc_macro::cached;
use serde_json::Value;

pub use cached::Cached;

#[cfg(test)]
pub async fn clear_all_caches() {
    PLAYER_STATS_CACHE.lock().await.cache_clear();
}

/// Season stats change at most once per game, so an hour-long lifespan only
/// costs a refetch when the batter or pitcher changes.
#[cached(
    name = "PLAYER_STATS_CACHE",
    type = "cached::TimedSizedCache<(i64, StatGroup), Value>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(64, 3600) }",
    convert = r#"{ (player_id, group) }"#,
    result = true
)]
pub async fn fetch_player_stats_cached(
    client: &dyn MlbDataProvider,
    player_id: i64,
    group: StatGroup,
) -> Result<Value, ApiError> {
    client.player_stats(player_id, group).await
}
