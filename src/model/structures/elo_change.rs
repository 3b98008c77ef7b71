use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::model::structures::outcome::Outcome;

/// Rating delta for one outcome. `score_with_bonus` carries the level-scaled
/// victory bonus; for a loss both values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloChange {
    pub score: f64,
    pub score_with_bonus: f64
}

impl EloChange {
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.score, self.score_with_bonus)
    }

    /// Difference contributed by the scaling bonus.
    pub fn bonus(&self) -> f64 {
        self.score_with_bonus - self.score
    }
}

impl From<EloChange> for (f64, f64) {
    fn from(change: EloChange) -> Self {
        change.as_tuple()
    }
}

/// Elo changes for every [`Outcome`] of a single match, keyed in canonical order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EloChangeReport {
    changes: IndexMap<Outcome, EloChange>
}

impl EloChangeReport {
    pub fn new() -> EloChangeReport {
        EloChangeReport {
            changes: IndexMap::new()
        }
    }

    pub fn insert(&mut self, outcome: Outcome, change: EloChange) {
        self.changes.insert(outcome, change);
    }

    pub fn get(&self, outcome: Outcome) -> Option<&EloChange> {
        self.changes.get(&outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Outcome, &EloChange)> {
        self.changes.iter()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl Index<Outcome> for EloChangeReport {
    type Output = EloChange;

    fn index(&self, outcome: Outcome) -> &Self::Output {
        self.changes
            .get(&outcome)
            .unwrap_or_else(|| panic!("Expected report to contain outcome {}", outcome))
    }
}
