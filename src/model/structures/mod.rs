pub mod elo_change;
pub mod intermediate_scores;
pub mod match_context;
pub mod outcome;
