//! Normalization of a raw live game feed into a flat, typed snapshot.
//!
//! The feed is walked once per poll; everything the display needs is pulled
//! out here so the render loop never digs through nested JSON.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use super::pitch_call::{expected_call, Call};
use crate::error::SnapshotError;

/// Type code recorded when a pitch's type cannot be resolved
pub const UNDEFINED_PITCH_TYPE: &str = "undefined";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Count {
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub name: String,
}

/// Location of the most recent pitch, with the zone it was thrown against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchLocation {
    pub px: f64,
    pub pz: f64,
    pub sz_top: f64,
    pub sz_bottom: f64,
}

impl PitchLocation {
    pub fn expected_call(&self) -> Call {
        expected_call(self.px, self.pz, self.sz_top, self.sz_bottom)
    }
}

/// One location-bearing pitch of the current at-bat
#[derive(Debug, Clone, PartialEq)]
pub struct PitchRecord {
    pub speed: f64,
    pub sz_top: f64,
    pub sz_bottom: f64,
    pub px: f64,
    pub pz: f64,
    pub type_code: String,
}

/// Physical strike zone of the batter at the plate (ft)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeZoneRect {
    pub top: f64,
    pub bottom: f64,
}

impl StrikeZoneRect {
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Pitches of the current at-bat, in the order they were thrown
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PitchHistory {
    pub pitches: Vec<PitchRecord>,
}

impl PitchHistory {
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    /// Zone of the first pitch; zone dimensions do not change within an at-bat
    pub fn strike_zone(&self) -> Option<StrikeZoneRect> {
        self.pitches.first().map(|p| StrikeZoneRect {
            top: p.sz_top,
            bottom: p.sz_bottom,
        })
    }

    /// Distinct type codes, each once, in first-thrown order
    pub fn distinct_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for pitch in &self.pitches {
            if !types.contains(&pitch.type_code.as_str()) {
                types.push(&pitch.type_code);
            }
        }
        types
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inning {
    pub number: u32,
    pub half: String,
}

impl fmt::Display for Inning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.half)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub away: u32,
    pub home: u32,
}

/// Everything the live view shows, taken from one poll of the game feed
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub count: Option<Count>,
    pub batter: Player,
    pub pitcher: Player,
    pub current_pitch: Option<PitchLocation>,
    pub pitch_call: Option<String>,
    /// `None` when nothing has been pitched this at-bat. May be empty when
    /// pitches were thrown but none carried full tracking data.
    pub pitch_history: Option<PitchHistory>,
    pub inning: Inning,
    pub score: Score,
    pub at_bat_result: Option<String>,
}

impl GameSnapshot {
    /// Build a snapshot from a raw `feed/live` payload
    pub fn from_feed(feed: &Value) -> Result<Self, SnapshotError> {
        let raw = RawFeed::deserialize(feed).map_err(|e| SnapshotError::Malformed(e.to_string()))?;
        let play = raw.live_data.plays.current_play;

        let last_event = play.play_events.last();
        let count = last_event.and_then(|e| e.count).map(|c| Count {
            balls: c.balls,
            strikes: c.strikes,
            outs: c.outs,
        });
        let current_pitch = last_event
            .and_then(|e| e.pitch_data.as_ref())
            .and_then(RawPitchData::location);
        let pitch_call = last_event
            .and_then(|e| e.details.as_ref())
            .and_then(|d| d.description.clone());

        let at_bat_result = match (&play.result.event, play.result.description) {
            (Some(_), Some(description)) => Some(description),
            _ => None,
        };

        Ok(GameSnapshot {
            count,
            batter: play.matchup.batter.into_player(),
            pitcher: play.matchup.pitcher.into_player(),
            current_pitch,
            pitch_call,
            pitch_history: extract_history(&play.play_events),
            inning: Inning {
                number: play.about.inning,
                half: play.about.half_inning,
            },
            score: Score {
                away: play.result.away_score,
                home: play.result.home_score,
            },
            at_bat_result,
        })
    }

    /// Expected call of the current pitch only, independent of history
    pub fn expected_call(&self) -> Option<Call> {
        self.current_pitch.map(|p| p.expected_call())
    }
}

/// Collect the location-bearing pitches of an at-bat
///
/// Returns `None` when no event carries pitch data at all. A pitch missing
/// any of speed, zone or coordinates is left out entirely.
fn extract_history(events: &[RawEvent]) -> Option<PitchHistory> {
    if !events.iter().any(|e| e.pitch_data.is_some()) {
        return None;
    }

    let pitches = events
        .iter()
        .filter(|e| e.is_pitch)
        .filter_map(|event| {
            let data = event.pitch_data.as_ref()?;
            let location = data.location()?;
            Some(PitchRecord {
                speed: data.start_speed?,
                sz_top: location.sz_top,
                sz_bottom: location.sz_bottom,
                px: location.px,
                pz: location.pz,
                type_code: event.type_code(),
            })
        })
        .collect();

    Some(PitchHistory { pitches })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFeed {
    live_data: RawLiveData,
}

#[derive(Debug, Deserialize)]
struct RawLiveData {
    plays: RawPlays,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlays {
    current_play: RawPlay,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlay {
    matchup: RawMatchup,
    #[serde(default)]
    about: RawAbout,
    #[serde(default)]
    result: RawResult,
    #[serde(default)]
    play_events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
struct RawMatchup {
    batter: RawPerson,
    pitcher: RawPerson,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPerson {
    id: i64,
    #[serde(default)]
    full_name: String,
}

impl RawPerson {
    fn into_player(self) -> Player {
        Player {
            id: self.id,
            name: self.full_name,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawAbout {
    #[serde(default)]
    inning: u32,
    #[serde(default)]
    half_inning: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    event: Option<String>,
    description: Option<String>,
    #[serde(default)]
    away_score: u32,
    #[serde(default)]
    home_score: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    #[serde(default)]
    is_pitch: bool,
    count: Option<RawCount>,
    details: Option<RawDetails>,
    pitch_data: Option<RawPitchData>,
}

impl RawEvent {
    fn type_code(&self) -> String {
        self.details
            .as_ref()
            .and_then(|d| d.pitch_type.as_ref())
            .and_then(|t| t.code.clone())
            .unwrap_or_else(|| UNDEFINED_PITCH_TYPE.to_string())
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
struct RawCount {
    #[serde(default)]
    balls: u8,
    #[serde(default)]
    strikes: u8,
    #[serde(default)]
    outs: u8,
}

#[derive(Debug, Deserialize)]
struct RawDetails {
    description: Option<String>,
    #[serde(rename = "type")]
    pitch_type: Option<RawPitchType>,
}

#[derive(Debug, Deserialize)]
struct RawPitchType {
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPitchData {
    start_speed: Option<f64>,
    strike_zone_top: Option<f64>,
    strike_zone_bottom: Option<f64>,
    coordinates: Option<RawCoordinates>,
}

impl RawPitchData {
    fn location(&self) -> Option<PitchLocation> {
        let coordinates = self.coordinates.as_ref()?;
        Some(PitchLocation {
            px: coordinates.p_x?,
            pz: coordinates.p_z?,
            sz_top: self.strike_zone_top?,
            sz_bottom: self.strike_zone_bottom?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawCoordinates {
    #[serde(rename = "pX")]
    p_x: Option<f64>,
    #[serde(rename = "pZ")]
    p_z: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{feed_with_events, pitch_event, create_mock_feed};
    use serde_json::json;

    #[test]
    fn test_missing_live_data_is_malformed() {
        let result = GameSnapshot::from_feed(&json!({ "gameData": {} }));
        assert!(matches!(result, Err(SnapshotError::Malformed(_))));
    }

    #[test]
    fn test_missing_matchup_is_malformed() {
        let feed = json!({ "liveData": { "plays": { "currentPlay": { "playEvents": [] } } } });
        assert!(matches!(
            GameSnapshot::from_feed(&feed),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn test_no_events_yields_empty_facts() {
        let snapshot = GameSnapshot::from_feed(&feed_with_events(vec![])).unwrap();
        assert_eq!(snapshot.count, None);
        assert_eq!(snapshot.current_pitch, None);
        assert_eq!(snapshot.pitch_call, None);
        assert_eq!(snapshot.pitch_history, None);
        assert_eq!(snapshot.expected_call(), None);
        assert_eq!(snapshot.at_bat_result, None);
    }

    #[test]
    fn test_single_strike_scenario() {
        let feed = feed_with_events(vec![pitch_event("FF", 95.4, 0.0, 2.5, 3.5, 1.5)]);
        let snapshot = GameSnapshot::from_feed(&feed).unwrap();

        let history = snapshot.pitch_history.as_ref().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.pitches[0].type_code, "FF");
        assert_eq!(history.pitches[0].speed, 95.4);
        assert_eq!(snapshot.expected_call(), Some(Call::Strike));
    }

    #[test]
    fn test_wide_and_edge_pitches() {
        let wide = feed_with_events(vec![pitch_event("SL", 86.0, 1.0, 2.5, 3.5, 1.5)]);
        assert_eq!(
            GameSnapshot::from_feed(&wide).unwrap().expected_call(),
            Some(Call::Ball)
        );

        let edge = feed_with_events(vec![pitch_event("CU", 79.0, 0.8, 2.5, 3.5, 1.5)]);
        assert_eq!(
            GameSnapshot::from_feed(&edge).unwrap().expected_call(),
            Some(Call::MarginOfError)
        );
    }

    #[test]
    fn test_non_pitch_events_are_skipped() {
        let feed = feed_with_events(vec![
            pitch_event("FF", 95.0, 0.1, 2.4, 3.5, 1.5),
            json!({
                "isPitch": false,
                "count": { "balls": 0, "strikes": 1, "outs": 0 },
                "details": { "description": "Mound Visit." }
            }),
            pitch_event("CH", 84.0, -0.3, 1.9, 3.5, 1.5),
        ]);
        let snapshot = GameSnapshot::from_feed(&feed).unwrap();
        let history = snapshot.pitch_history.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.distinct_types(), vec!["FF", "CH"]);
    }

    #[test]
    fn test_pitch_missing_speed_is_excluded_entirely() {
        let mut incomplete = pitch_event("SI", 93.0, 0.2, 2.0, 3.4, 1.6);
        incomplete["pitchData"]
            .as_object_mut()
            .unwrap()
            .remove("startSpeed");
        let feed = feed_with_events(vec![
            incomplete,
            pitch_event("SI", 92.0, 0.3, 2.1, 3.4, 1.6),
        ]);

        let history = GameSnapshot::from_feed(&feed).unwrap().pitch_history.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.pitches[0].speed, 92.0);
    }

    #[test]
    fn test_pitch_without_location_still_counts_as_pitch() {
        let feed = feed_with_events(vec![json!({
            "isPitch": true,
            "count": { "balls": 1, "strikes": 0, "outs": 1 },
            "details": { "description": "Ball", "type": { "code": "FF" } },
            "pitchData": { "startSpeed": 94.1 }
        })]);
        let snapshot = GameSnapshot::from_feed(&feed).unwrap();

        let history = snapshot.pitch_history.unwrap();
        assert!(history.is_empty());
        assert_eq!(history.strike_zone(), None);
        assert_eq!(snapshot.current_pitch, None);
        assert_eq!(snapshot.pitch_call.as_deref(), Some("Ball"));
    }

    #[test]
    fn test_unresolvable_type_code_is_undefined() {
        let mut event = pitch_event("FF", 90.0, 0.0, 2.0, 3.5, 1.5);
        event["details"].as_object_mut().unwrap().remove("type");
        let history = GameSnapshot::from_feed(&feed_with_events(vec![event]))
            .unwrap()
            .pitch_history
            .unwrap();
        assert_eq!(history.pitches[0].type_code, UNDEFINED_PITCH_TYPE);
    }

    #[test]
    fn test_mock_feed_facts() {
        let snapshot = GameSnapshot::from_feed(&create_mock_feed(745001)).unwrap();
        assert_eq!(snapshot.batter.name, "Vladimir Guerrero Jr.");
        assert_eq!(snapshot.pitcher.name, "Chris Sale");
        assert_eq!(snapshot.inning.to_string(), "3 top");
        assert_eq!(snapshot.score, Score { away: 1, home: 2 });
        assert_eq!(
            snapshot.count,
            Some(Count { balls: 1, strikes: 2, outs: 1 })
        );
        assert_eq!(
            snapshot.pitch_history.unwrap().strike_zone(),
            Some(StrikeZoneRect { top: 3.49, bottom: 1.6 })
        );
    }

    #[test]
    fn test_result_only_when_event_present() {
        let mut feed = feed_with_events(vec![pitch_event("FF", 95.0, 0.0, 2.5, 3.5, 1.5)]);
        feed["liveData"]["plays"]["currentPlay"]["result"] = json!({
            "description": "Pending",
            "awayScore": 0,
            "homeScore": 0
        });
        assert_eq!(GameSnapshot::from_feed(&feed).unwrap().at_bat_result, None);

        feed["liveData"]["plays"]["currentPlay"]["result"] = json!({
            "event": "Strikeout",
            "description": "Bo Bichette strikes out swinging.",
            "awayScore": 0,
            "homeScore": 0
        });
        assert_eq!(
            GameSnapshot::from_feed(&feed).unwrap().at_bat_result.as_deref(),
            Some("Bo Bichette strikes out swinging.")
        );
    }
}
