pub mod pitch_call;
pub mod snapshot;
pub mod stats;

pub use pitch_call::{expected_call, Call};
pub use snapshot::{
    Count, GameSnapshot, Inning, PitchHistory, PitchLocation, PitchRecord, Player, Score,
    StrikeZoneRect, UNDEFINED_PITCH_TYPE,
};
pub use stats::{BatterStats, PitcherStats};

/// Value published by the refresh loop: one snapshot and the stat lines of
/// the players in it
#[derive(Debug, Clone, PartialEq)]
pub struct LiveUpdate {
    pub snapshot: GameSnapshot,
    pub batter_stats: Option<BatterStats>,
    pub pitcher_stats: Option<PitcherStats>,
}
