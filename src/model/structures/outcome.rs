use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, str::FromStr};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::model::error::EloError;

/// The four match endings a player is scored against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Outcome {
    /// Team lost; the player died.
    Lost,
    /// Team won; the player died and kept spectating.
    WonStayed,
    /// Team won; the player died and left the match.
    WonLeft,
    /// Team won with the player alive at the end.
    WonLived
}

/// Raw `(won, died, stayed)` triple behind an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeFlags {
    pub won: bool,
    pub died: bool,
    pub stayed: bool
}

impl Outcome {
    pub fn flags(self) -> OutcomeFlags {
        let (won, died, stayed) = match self {
            Outcome::Lost => (false, true, false),
            Outcome::WonStayed => (true, true, true),
            Outcome::WonLeft => (true, true, false),
            Outcome::WonLived => (true, false, true)
        };

        OutcomeFlags { won, died, stayed }
    }

    pub fn is_win(self) -> bool {
        self.flags().won
    }
}

impl FromStr for Outcome {
    type Err = EloError;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        Outcome::iter()
            .find(|outcome| outcome.as_ref() == v)
            .ok_or_else(|| EloError::UnknownOutcome(v.to_string()))
    }
}

impl TryFrom<&str> for Outcome {
    type Error = EloError;

    fn try_from(v: &str) -> Result<Self, Self::Error> {
        v.parse()
    }
}
