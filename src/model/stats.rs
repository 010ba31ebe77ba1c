//! Season stat lines of the current batter and pitcher.

use serde::Deserialize;
use serde_json::Value;

use crate::data_provider::StatGroup;

fn dash() -> String {
    "-".to_string()
}

/// Season hitting line
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatterStats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub at_bats: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub doubles: u32,
    #[serde(default)]
    pub triples: u32,
    #[serde(default)]
    pub home_runs: u32,
    #[serde(default)]
    pub rbi: u32,
    #[serde(default)]
    pub base_on_balls: u32,
    #[serde(default)]
    pub strike_outs: u32,
    #[serde(default)]
    pub stolen_bases: u32,
    #[serde(default = "dash")]
    pub avg: String,
    #[serde(default = "dash")]
    pub obp: String,
    #[serde(default = "dash")]
    pub slg: String,
    #[serde(default = "dash")]
    pub ops: String,
}

/// Season pitching line
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitcherStats {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_started: u32,
    #[serde(default = "dash")]
    pub innings_pitched: String,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub earned_runs: u32,
    #[serde(default)]
    pub base_on_balls: u32,
    #[serde(default)]
    pub strike_outs: u32,
    #[serde(default)]
    pub saves: u32,
    #[serde(default = "dash")]
    pub era: String,
    #[serde(default = "dash")]
    pub whip: String,
    #[serde(default = "dash", rename = "strikeoutWalkRatio")]
    pub k_bb: String,
    #[serde(default = "dash", rename = "homeRunsPer9")]
    pub hr9: String,
}

impl BatterStats {
    pub fn from_people(payload: &Value) -> Option<Self> {
        season_stat(payload, StatGroup::Hitting).and_then(|s| Self::deserialize(s).ok())
    }
}

impl PitcherStats {
    pub fn from_people(payload: &Value) -> Option<Self> {
        season_stat(payload, StatGroup::Pitching).and_then(|s| Self::deserialize(s).ok())
    }
}

/// Locate `people[0].stats[group].splits[last].stat` in a hydrated people payload
///
/// The last split is the most recent one; traded players carry one split per team
/// followed by a combined line.
fn season_stat(payload: &Value, group: StatGroup) -> Option<&Value> {
    payload
        .pointer("/people/0/stats")?
        .as_array()?
        .iter()
        .find(|s| {
            s.pointer("/group/displayName").and_then(Value::as_str) == Some(group.as_api_str())
        })?
        .get("splits")?
        .as_array()?
        .last()?
        .get("stat")
}
