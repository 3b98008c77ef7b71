use clap::Parser;
use std::path::PathBuf;

use crate::model::{
    structures::{
        match_context::{MatchContext, PlayerPerformance},
        outcome::Outcome
    },
    validation::ValidationMode
};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Elo Change",
    long_about = "Calculates the elo change of a player for every possible ending of a finished match"
)]
pub struct Args {
    /// Average level of the players in the match
    #[arg(long, env = "AVERAGE_LEVEL")]
    pub average_level: f64,

    /// Level of the player being scored
    #[arg(long, env = "PLAYER_LEVEL")]
    pub player_level: f64,

    /// Place the player finished, starting at 1
    #[arg(long, env = "PLACE_FINISHED")]
    pub place_finished: u32,

    #[arg(long, env = "KILLS", default_value_t = 0)]
    pub kills: u32,

    /// Number of times the player was downed and had to be revived
    #[arg(long, env = "DOWNS", default_value_t = 0)]
    pub downs: u32,

    #[arg(long, env = "ASSISTS", default_value_t = 0)]
    pub assists: u32,

    /// Fraction of shots hit, 0.0 to 1.0
    #[arg(long, env = "ACCURACY")]
    pub accuracy: f64,

    /// Minutes the player was alive
    #[arg(long, env = "TIME_SURVIVED")]
    pub time_survived: f64,

    /// Match length in minutes
    #[arg(long, env = "GAME_LENGTH")]
    pub game_length: f64,

    /// JSON file overriding some or all scoring constants
    #[arg(
        short,
        long,
        env = "ELO_CONSTANTS",
        help = "Path to a JSON file of scoring constants",
        long_help = "Fields left out of the file keep their default values, e.g. {\"victory_bonus\": 150.0}"
    )]
    pub constants: Option<PathBuf>,

    /// Also enforce the level, lobby size and match time caps
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub strict: bool,

    /// Print only the change for this outcome
    #[arg(short, long, value_enum)]
    pub outcome: Option<Outcome>,

    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub pretty: bool,

    /// Log level (trace, debug, info, warn, error). Without it, RUST_LOG
    /// directives are used, falling back to info
    #[arg(
        short,
        long,
        env = "ELO_LOG_LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: Option<String>
}

impl Args {
    pub fn match_context(&self) -> MatchContext {
        MatchContext {
            average_level: self.average_level,
            player_level: self.player_level,
            game_length: self.game_length
        }
    }

    pub fn performance(&self) -> PlayerPerformance {
        PlayerPerformance {
            place_finished: self.place_finished,
            kills: self.kills,
            downs: self.downs,
            assists: self.assists,
            accuracy: self.accuracy,
            time_survived: self.time_survived
        }
    }

    pub fn validation_mode(&self) -> ValidationMode {
        if self.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }
}
