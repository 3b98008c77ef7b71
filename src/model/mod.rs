//! Per-match elo change scoring.
//!
//! Raw statistics flow one way: [`scores`] turns each statistic into an intermediate
//! score, and [`elo_model`] combines those into a report covering every outcome.

pub mod constants;
pub mod elo_model;
pub mod error;
pub mod scores;
pub mod structures;
pub mod validation;
