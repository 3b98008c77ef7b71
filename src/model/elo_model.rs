use strum::IntoEnumIterator;
use tracing::debug;

use crate::model::{
    constants::{ScoringConstants, DEFAULT_CONSTANTS},
    error::EloError,
    structures::{
        elo_change::{EloChange, EloChangeReport},
        intermediate_scores::IntermediateScores,
        match_context::{MatchContext, PlayerPerformance},
        outcome::Outcome
    },
    validation::{validate, ValidationMode}
};

/// Scores a player's match with a fixed set of constants.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EloModel {
    pub constants: ScoringConstants,
    pub validation: ValidationMode
}

impl EloModel {
    pub fn new(constants: ScoringConstants, validation: ValidationMode) -> EloModel {
        EloModel { constants, validation }
    }

    /// # Elo change report
    ///
    /// Validates the input, computes the intermediate scores once and then
    /// aggregates them for each [`Outcome`] in canonical order. Either the whole
    /// report is returned or nothing is.
    pub fn elo_change_scores(
        &self,
        context: &MatchContext,
        performance: &PlayerPerformance
    ) -> Result<EloChangeReport, EloError> {
        validate(context, performance, self.validation)?;

        let scores = self.intermediate_scores(context, performance);
        debug!(?scores, "Computed intermediate scores");

        let mut report = EloChangeReport::new();
        for outcome in Outcome::iter() {
            let change = self.calc_elo(&scores, outcome);
            debug!(
                outcome = %outcome,
                score = change.score,
                score_with_bonus = change.score_with_bonus,
                "Computed elo change"
            );

            report.insert(outcome, change);
        }

        Ok(report)
    }

    /// Computes every outcome-independent score. Does not validate; division by a
    /// zero level or game length yields non-finite values.
    pub fn intermediate_scores(&self, context: &MatchContext, performance: &PlayerPerformance) -> IntermediateScores {
        let c = &self.constants;

        IntermediateScores {
            place_score: c.place_score(performance.place_finished),
            down_score: c.down_score(performance.downs),
            kill_score: c.kill_score(performance.kills),
            assist_score: c.assist_score(performance.assists),
            accuracy_score: c.accuracy_score(performance.accuracy),
            loss_mult: c.loss_mult(context.average_level, context.player_level),
            time_mult: c.time_survived_mult(performance.time_survived, context.game_length),
            scaling_bonus: c.scale_bonus(context.average_level, context.player_level)
        }
    }

    /// Aggregates intermediate scores into the elo change for one outcome.
    ///
    /// A win adds the victory bonus, a stayed bonus (or penalty for leaving) and the
    /// death penalty if the player died; `score_with_bonus` scales only the victory
    /// bonus by the scaling bonus. A loss applies the death penalty and down score
    /// through the loss multiplier and ignores whether the player stayed.
    pub fn calc_elo(&self, scores: &IntermediateScores, outcome: Outcome) -> EloChange {
        let c = &self.constants;
        let flags = outcome.flags();
        let combat = scores.combat_score();

        if !flags.won {
            let score = combat + scores.place_score + (scores.loss_mult * (scores.down_score + c.death_penalty));

            return EloChange {
                score,
                score_with_bonus: score
            };
        }

        let death_penalty = if flags.died { c.death_penalty } else { 0.0 };
        let stayed_bonus = if flags.stayed { c.stayed_bonus } else { -c.stayed_bonus };
        let flat = death_penalty + scores.down_score + stayed_bonus + scores.place_score;

        EloChange {
            score: combat + (flat + c.victory_bonus),
            score_with_bonus: combat + flat + (c.victory_bonus * scores.scaling_bonus)
        }
    }
}

/// Aggregates intermediate scores for one outcome with the default constants.
pub fn calc_elo(scores: &IntermediateScores, outcome: Outcome) -> EloChange {
    EloModel::new(DEFAULT_CONSTANTS, ValidationMode::Lenient).calc_elo(scores, outcome)
}

/// Elo changes for all four outcomes of a match, using the default constants.
#[allow(clippy::too_many_arguments)]
pub fn get_elo_change_scores(
    average_level: f64,
    player_level: f64,
    place_finished: u32,
    kills: u32,
    downs: u32,
    assists: u32,
    accuracy: f64,
    time_survived: f64,
    game_length: f64
) -> Result<EloChangeReport, EloError> {
    let context = MatchContext {
        average_level,
        player_level,
        game_length
    };
    let performance = PlayerPerformance {
        place_finished,
        kills,
        downs,
        assists,
        accuracy,
        time_survived
    };

    EloModel::default().elo_change_scores(&context, &performance)
}
