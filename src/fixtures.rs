/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app with fake data for screenshots and debugging
/// 3. Benchmarks - providing consistent data for performance testing
///
/// Feeds are built as raw JSON so they go through the same extraction path as
/// real API responses.
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};

use crate::data_provider::{GameStatus, Highlight, ScheduleGame};

pub const MOCK_PREVIEW_GAME: i64 = 745000;
pub const MOCK_LIVE_GAME: i64 = 745001;
pub const MOCK_FINAL_GAME: i64 = 745002;

pub const MOCK_BATTER_ID: i64 = 665489;
pub const MOCK_PITCHER_ID: i64 = 519242;

/// Create a mock schedule with one game in each state
pub fn create_mock_schedule(date: Option<NaiveDate>) -> Vec<ScheduleGame> {
    let date = date.unwrap_or_else(|| NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default());
    let at = |hour: u32| {
        Utc.from_utc_datetime(&date.and_hms_opt(hour, 5, 0).unwrap_or_default())
    };

    vec![
        ScheduleGame {
            game_pk: MOCK_FINAL_GAME,
            away_team: "New York Yankees".to_string(),
            home_team: "Baltimore Orioles".to_string(),
            start_time: at(17),
            status: GameStatus::Final,
        },
        ScheduleGame {
            game_pk: MOCK_LIVE_GAME,
            away_team: "Toronto Blue Jays".to_string(),
            home_team: "Atlanta Braves".to_string(),
            start_time: at(20),
            status: GameStatus::InProgress,
        },
        ScheduleGame {
            game_pk: MOCK_PREVIEW_GAME,
            away_team: "Seattle Mariners".to_string(),
            home_team: "Los Angeles Dodgers".to_string(),
            start_time: at(23),
            status: GameStatus::Preview,
        },
    ]
}

pub fn create_mock_status(game_pk: i64) -> GameStatus {
    match game_pk {
        MOCK_PREVIEW_GAME => GameStatus::Preview,
        MOCK_FINAL_GAME => GameStatus::Final,
        _ => GameStatus::InProgress,
    }
}

/// One pitch event with full tracking data
pub fn pitch_event(code: &str, speed: f64, px: f64, pz: f64, sz_top: f64, sz_bottom: f64) -> Value {
    json!({
        "isPitch": true,
        "count": { "balls": 0, "strikes": 0, "outs": 0 },
        "details": {
            "description": "Called Strike",
            "type": { "code": code }
        },
        "pitchData": {
            "startSpeed": speed,
            "strikeZoneTop": sz_top,
            "strikeZoneBottom": sz_bottom,
            "coordinates": { "pX": px, "pZ": pz }
        }
    })
}

/// Minimal well-formed feed whose current at-bat holds `events`
pub fn feed_with_events(events: Vec<Value>) -> Value {
    json!({
        "gameData": { "status": { "abstractGameState": "Live" } },
        "liveData": {
            "plays": {
                "currentPlay": {
                    "matchup": {
                        "batter": { "id": MOCK_BATTER_ID, "fullName": "Vladimir Guerrero Jr." },
                        "pitcher": { "id": MOCK_PITCHER_ID, "fullName": "Chris Sale" }
                    },
                    "about": { "inning": 3, "halfInning": "top" },
                    "result": { "awayScore": 1, "homeScore": 2 },
                    "playEvents": events
                }
            }
        }
    })
}

/// Create a mock live feed for an at-bat in progress
pub fn create_mock_feed(game_pk: i64) -> Value {
    let mut last = pitch_event("CH", 84.6, -0.52, 1.38, 3.49, 1.6);
    last["count"] = json!({ "balls": 1, "strikes": 2, "outs": 1 });
    last["details"]["description"] = json!("Foul");

    let mut feed = feed_with_events(vec![
        pitch_event("FF", 95.2, 0.31, 2.71, 3.49, 1.6),
        pitch_event("SL", 86.9, 1.12, 1.95, 3.47, 1.58),
        json!({
            "isPitch": false,
            "count": { "balls": 1, "strikes": 1, "outs": 1 },
            "details": { "description": "Mound Visit." }
        }),
        pitch_event("FF", 96.0, -0.2, 3.3, 3.49, 1.6),
        last,
    ]);
    feed["gamePk"] = json!(game_pk);
    feed
}

pub fn create_mock_highlights(game_pk: i64) -> Vec<Highlight> {
    vec![
        Highlight {
            headline: format!("Recap #{}: Orioles rally late", game_pk),
            blurb: "A three-run eighth decides it.".to_string(),
            url: Some("https://example.com/recap.mp4".to_string()),
        },
        Highlight {
            headline: "Judge goes deep".to_string(),
            blurb: "A 450-foot solo shot to center.".to_string(),
            url: None,
        },
    ]
}

pub fn create_mock_hitting_stats(player_id: i64) -> Value {
    json!({
        "people": [{
            "id": player_id,
            "fullName": "Vladimir Guerrero Jr.",
            "stats": [{
                "group": { "displayName": "hitting" },
                "type": { "displayName": "season" },
                "splits": [{
                    "season": "2024",
                    "stat": {
                        "gamesPlayed": 159, "atBats": 616, "runs": 98, "hits": 177,
                        "doubles": 44, "triples": 1, "homeRuns": 30, "rbi": 103,
                        "baseOnBalls": 72, "strikeOuts": 98, "stolenBases": 2,
                        "avg": ".288", "obp": ".361", "slg": ".496", "ops": ".857"
                    }
                }]
            }]
        }]
    })
}

pub fn create_mock_pitching_stats(player_id: i64) -> Value {
    json!({
        "people": [{
            "id": player_id,
            "fullName": "Chris Sale",
            "stats": [{
                "group": { "displayName": "pitching" },
                "type": { "displayName": "season" },
                "splits": [{
                    "season": "2024",
                    "stat": {
                        "wins": 18, "losses": 3, "gamesPlayed": 29, "gamesStarted": 29,
                        "inningsPitched": "177.2", "hits": 141, "earnedRuns": 47,
                        "baseOnBalls": 39, "strikeOuts": 225, "saves": 0,
                        "era": "2.38", "whip": "1.01",
                        "strikeoutWalkRatio": "5.92", "homeRunsPer9": "0.79"
                    }
                }]
            }]
        }]
    })
}
