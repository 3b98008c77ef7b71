use serde::{Deserialize, Serialize};

/// Per-match scores derived from a performance. These do not depend on the outcome,
/// so one set is shared by every outcome of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntermediateScores {
    pub place_score: f64,
    pub down_score: f64,
    pub kill_score: f64,
    pub assist_score: f64,
    pub accuracy_score: f64,
    pub loss_mult: f64,
    pub time_mult: f64,
    pub scaling_bonus: f64
}

impl IntermediateScores {
    /// Kill and assist contribution, weighted by accuracy and survival time.
    pub fn combat_score(&self) -> f64 {
        ((self.kill_score + self.assist_score) * self.accuracy_score) * self.time_mult
    }
}
