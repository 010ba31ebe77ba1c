//! HTTP client for the public MLB Stats API.

use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::data_provider::{GameStatus, Highlight, MlbDataProvider, ScheduleGame, StatGroup};
use crate::error::ApiError;

const BASE_URL: &str = "https://statsapi.mlb.com";

/// Request timeout; a slow API must not hold a refresh tick for long
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Playback name of the progressive mp4 rendition in content payloads
const PREFERRED_PLAYBACK: &str = "mp4Avc";

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);
        let response = self.http.get(&url).query(query).send().await?;
        match response.status() {
            StatusCode::OK => Ok(response.json::<Value>().await?),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(url)),
            status => Err(ApiError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }
}

#[async_trait]
impl MlbDataProvider for Client {
    async fn schedule(&self, date: Option<NaiveDate>) -> Result<Vec<ScheduleGame>, ApiError> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let payload = self
            .get_json(
                "/api/v1/schedule",
                &[
                    ("sportId", "1".to_string()),
                    ("date", date.format("%Y-%m-%d").to_string()),
                ],
            )
            .await?;
        parse_schedule(payload)
    }

    async fn game_feed(&self, game_pk: i64) -> Result<Value, ApiError> {
        self.get_json(&format!("/api/v1.1/game/{}/feed/live", game_pk), &[])
            .await
    }

    async fn game_status(&self, game_pk: i64) -> Result<GameStatus, ApiError> {
        let feed = self.game_feed(game_pk).await?;
        parse_game_status(&feed)
    }

    async fn highlights(&self, game_pk: i64) -> Result<Vec<Highlight>, ApiError> {
        let payload = self
            .get_json(&format!("/api/v1/game/{}/content", game_pk), &[])
            .await?;
        parse_highlights(payload)
    }

    async fn player_stats(&self, player_id: i64, group: StatGroup) -> Result<Value, ApiError> {
        let hydrate = format!("stats(group=[{}],type=[season])", group.as_api_str());
        self.get_json(
            &format!("/api/v1/people/{}", player_id),
            &[("hydrate", hydrate)],
        )
        .await
    }
}

#[derive(Debug, Deserialize)]
struct ScheduleResponse {
    #[serde(default)]
    dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
struct ScheduleDate {
    #[serde(default)]
    games: Vec<RawScheduleGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScheduleGame {
    game_pk: i64,
    game_date: DateTime<Utc>,
    status: RawStatus,
    teams: RawTeams,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatus {
    abstract_game_state: String,
}

#[derive(Debug, Deserialize)]
struct RawTeams {
    away: RawTeamSide,
    home: RawTeamSide,
}

#[derive(Debug, Deserialize)]
struct RawTeamSide {
    team: RawTeam,
}

#[derive(Debug, Deserialize)]
struct RawTeam {
    name: String,
}

/// Flatten a schedule payload into games, in API order
pub fn parse_schedule(payload: Value) -> Result<Vec<ScheduleGame>, ApiError> {
    let response: ScheduleResponse = serde_json::from_value(payload)?;
    Ok(response
        .dates
        .into_iter()
        .flat_map(|d| d.games)
        .map(|g| ScheduleGame {
            game_pk: g.game_pk,
            away_team: g.teams.away.team.name,
            home_team: g.teams.home.team.name,
            start_time: g.game_date,
            status: GameStatus::from_abstract_state(&g.status.abstract_game_state),
        })
        .collect())
}

/// Read `gameData.status.abstractGameState` from a live feed
pub fn parse_game_status(feed: &Value) -> Result<GameStatus, ApiError> {
    feed.pointer("/gameData/status/abstractGameState")
        .and_then(Value::as_str)
        .map(GameStatus::from_abstract_state)
        .ok_or_else(|| ApiError::NotFound("gameData.status.abstractGameState".to_string()))
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    highlights: Option<ContentHighlights>,
}

#[derive(Debug, Deserialize)]
struct ContentHighlights {
    #[serde(default)]
    highlights: Option<ContentItems>,
}

#[derive(Debug, Deserialize)]
struct ContentItems {
    #[serde(default)]
    items: Vec<ContentItem>,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
    #[serde(default)]
    headline: String,
    #[serde(default)]
    blurb: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    playbacks: Vec<Playback>,
}

#[derive(Debug, Deserialize)]
struct Playback {
    name: String,
    url: String,
}

/// Extract highlight clips from a game content payload
pub fn parse_highlights(payload: Value) -> Result<Vec<Highlight>, ApiError> {
    let response: ContentResponse = serde_json::from_value(payload)?;
    let items = response
        .highlights
        .and_then(|h| h.highlights)
        .map(|h| h.items)
        .unwrap_or_default();

    Ok(items
        .into_iter()
        .map(|item| {
            let url = item
                .playbacks
                .iter()
                .find(|p| p.name == PREFERRED_PLAYBACK)
                .or_else(|| item.playbacks.first())
                .map(|p| p.url.clone());
            Highlight {
                headline: item.headline,
                blurb: item.blurb.or(item.description).unwrap_or_default(),
                url,
            }
        })
        .collect())
}
