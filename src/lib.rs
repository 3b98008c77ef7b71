pub mod args;
pub mod model;
pub mod utils;

pub use model::{
    constants::{ScoringConstants, DEFAULT_CONSTANTS},
    elo_model::{calc_elo, get_elo_change_scores, EloModel},
    error::EloError,
    structures::{
        elo_change::{EloChange, EloChangeReport},
        intermediate_scores::IntermediateScores,
        match_context::{MatchContext, PlayerPerformance},
        outcome::{Outcome, OutcomeFlags}
    },
    validation::ValidationMode
};
