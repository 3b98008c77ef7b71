use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{
    constants::{MAX_GAME_SIZE, MAX_GAME_TIME, MAX_PLAYER_LVL},
    error::EloError,
    structures::match_context::{MatchContext, PlayerPerformance}
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject only inputs the formulas cannot handle.
    #[default]
    Lenient,
    /// Additionally enforce the level, lobby size and match time caps.
    Strict
}

/// Checks a match and performance before any score is computed.
///
/// Levels and game length are divisors and must be positive and finite in every mode.
pub fn validate(
    context: &MatchContext,
    performance: &PlayerPerformance,
    mode: ValidationMode
) -> Result<(), EloError> {
    let result = validate_inner(context, performance, mode);

    if let Err(e) = &result {
        warn!("Rejected match input: {}", e);
    }

    result
}

fn validate_inner(
    context: &MatchContext,
    performance: &PlayerPerformance,
    mode: ValidationMode
) -> Result<(), EloError> {
    positive_divisor("average_level", context.average_level)?;
    positive_divisor("player_level", context.player_level)?;
    positive_divisor("game_length", context.game_length)?;

    if performance.place_finished == 0 {
        return Err(EloError::InvalidPlacement);
    }

    in_range("accuracy", performance.accuracy, 0.0, 1.0)?;
    in_range("time_survived", performance.time_survived, 0.0, context.game_length)?;

    if mode == ValidationMode::Strict {
        in_range("average_level", context.average_level, 0.0, MAX_PLAYER_LVL)?;
        in_range("player_level", context.player_level, 0.0, MAX_PLAYER_LVL)?;
        in_range("game_length", context.game_length, 0.0, MAX_GAME_TIME)?;
        in_range(
            "place_finished",
            performance.place_finished as f64,
            1.0,
            MAX_GAME_SIZE as f64
        )?;
    }

    Ok(())
}

fn positive_divisor(field: &'static str, value: f64) -> Result<(), EloError> {
    if !value.is_finite() {
        return Err(EloError::NotFinite { field });
    }

    if value == 0.0 {
        return Err(EloError::ZeroDenominator { field });
    }

    if value < 0.0 {
        return Err(EloError::NonPositive { field, value });
    }

    Ok(())
}

fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), EloError> {
    if !value.is_finite() {
        return Err(EloError::NotFinite { field });
    }

    if value < min || value > max {
        return Err(EloError::OutOfRange { field, value, min, max });
    }

    Ok(())
}
