use serde::{Deserialize, Serialize};

// Input bounds
pub const MAX_PLAYER_LVL: f64 = 100.0;
pub const MAX_GAME_SIZE: u32 = 100; // players
pub const MAX_GAME_TIME: f64 = 100.0; // minutes

// Scaling bonus
pub const SCALING_BONUS_BASE: f64 = 0.75;
pub const SCALING_BONUS_MOD: f64 = 0.25;

// Component scores
pub const PLACE_FINISHED_BASE: f64 = 51.0;
pub const PLACE_FINISHED_MULT: f64 = 2.0;
pub const DOWNED_MULT: f64 = -10.0;
pub const KILLS_MULT: f64 = 5.0;
pub const KILLS_MOD: f64 = 5.0;
pub const ASSISTS_MULT: f64 = 5.0;
pub const ASSISTS_MOD: f64 = 5.0;
pub const ASSISTS_DIV: f64 = 2.0;
pub const ACCURACY_BASE: f64 = 0.95;
pub const ACCURACY_MULT: f64 = 0.1;

// Outcome terms
pub const DEATH_PENALTY: f64 = -75.0;
pub const VICTORY_BONUS: f64 = 100.0;
pub const STAYED_BONUS: f64 = 25.0;

// Multipliers
pub const LOSS_BASE: f64 = 1.0;
pub const LOSS_MULT: f64 = 0.04;
pub const TIME_SURV_BASE: f64 = 0.5;

pub const DEFAULT_CONSTANTS: ScoringConstants = default_constants();

/// A complete set of scoring coefficients.
///
/// Every scorer reads its coefficients from one of these. The published tuning is
/// [`DEFAULT_CONSTANTS`]; alternate sets can be deserialized from JSON, where any
/// field left out keeps its default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConstants {
    pub scaling_bonus_base: f64,
    pub scaling_bonus_mod: f64,
    pub place_finished_base: f64,
    pub place_finished_mult: f64,
    pub downed_mult: f64,
    pub kills_mult: f64,
    pub kills_mod: f64,
    pub assists_mult: f64,
    pub assists_mod: f64,
    pub assists_div: f64,
    pub accuracy_base: f64,
    pub accuracy_mult: f64,
    pub death_penalty: f64,
    pub victory_bonus: f64,
    pub stayed_bonus: f64,
    pub loss_base: f64,
    pub loss_mult: f64,
    pub time_surv_base: f64
}

pub const fn default_constants() -> ScoringConstants {
    ScoringConstants {
        scaling_bonus_base: SCALING_BONUS_BASE,
        scaling_bonus_mod: SCALING_BONUS_MOD,
        place_finished_base: PLACE_FINISHED_BASE,
        place_finished_mult: PLACE_FINISHED_MULT,
        downed_mult: DOWNED_MULT,
        kills_mult: KILLS_MULT,
        kills_mod: KILLS_MOD,
        assists_mult: ASSISTS_MULT,
        assists_mod: ASSISTS_MOD,
        assists_div: ASSISTS_DIV,
        accuracy_base: ACCURACY_BASE,
        accuracy_mult: ACCURACY_MULT,
        death_penalty: DEATH_PENALTY,
        victory_bonus: VICTORY_BONUS,
        stayed_bonus: STAYED_BONUS,
        loss_base: LOSS_BASE,
        loss_mult: LOSS_MULT,
        time_surv_base: TIME_SURV_BASE
    }
}

impl Default for ScoringConstants {
    fn default() -> Self {
        DEFAULT_CONSTANTS
    }
}
