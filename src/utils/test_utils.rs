use crate::model::structures::{
    intermediate_scores::IntermediateScores,
    match_context::{MatchContext, PlayerPerformance}
};

pub fn generate_match_context(average_level: f64, player_level: f64, game_length: f64) -> MatchContext {
    MatchContext {
        average_level,
        player_level,
        game_length
    }
}

pub fn generate_performance(
    place_finished: u32,
    kills: u32,
    downs: u32,
    assists: u32,
    accuracy: f64,
    time_survived: f64
) -> PlayerPerformance {
    PlayerPerformance {
        place_finished,
        kills,
        downs,
        assists,
        accuracy,
        time_survived
    }
}

#[allow(clippy::too_many_arguments)]
pub fn generate_intermediate_scores(
    place_score: f64,
    down_score: f64,
    kill_score: f64,
    assist_score: f64,
    accuracy_score: f64,
    loss_mult: f64,
    time_mult: f64,
    scaling_bonus: f64
) -> IntermediateScores {
    IntermediateScores {
        place_score,
        down_score,
        kill_score,
        assist_score,
        accuracy_score,
        loss_mult,
        time_mult,
        scaling_bonus
    }
}

/// A spread of plausible lobbies: every level pair and match length is valid under
/// strict validation.
pub fn generate_match_contexts() -> Vec<MatchContext> {
    let mut contexts = Vec::new();
    for average_level in [1.0, 12.5, 50.0, 100.0] {
        for player_level in [1.0, 33.0, 75.0, 100.0] {
            for game_length in [5.0, 25.0, 100.0] {
                contexts.push(generate_match_context(average_level, player_level, game_length));
            }
        }
    }

    contexts
}
