use serde::{Deserialize, Serialize};

/// Match-wide values shared by every player in the lobby.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchContext {
    /// Average level of the players in the match
    pub average_level: f64,
    /// Level of the player being scored
    pub player_level: f64,
    /// Match duration in minutes
    pub game_length: f64
}

/// One player's statistics for a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub place_finished: u32,
    pub kills: u32,
    /// Times the player was downed and had to be revived
    pub downs: u32,
    pub assists: u32,
    /// Fraction of shots hit, 0.0 to 1.0
    pub accuracy: f64,
    /// Minutes the player was alive
    pub time_survived: f64
}
