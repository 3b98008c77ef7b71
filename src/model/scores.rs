//! Component scorers. Each turns one raw statistic into an intermediate score or
//! multiplier.
//!
//! The `calc_*` free functions use [`DEFAULT_CONSTANTS`]; the methods on
//! [`ScoringConstants`] compute the same values for any tuning set. Ratio scorers do
//! not guard their denominators; callers go through
//! [`validation`](crate::model::validation) first.

use crate::model::constants::{ScoringConstants, DEFAULT_CONSTANTS};

impl ScoringConstants {
    pub fn kill_score(&self, kills: u32) -> f64 {
        let kills = kills as f64;
        ((kills * self.kills_mult) + self.kills_mod) * kills
    }

    pub fn down_score(&self, downs: u32) -> f64 {
        downs as f64 * self.downed_mult
    }

    /// First place scores highest; places past `place_finished_base` go negative.
    pub fn place_score(&self, place_finished: u32) -> f64 {
        (self.place_finished_base - place_finished as f64) * self.place_finished_mult
    }

    pub fn assist_score(&self, assists: u32) -> f64 {
        let assists = assists as f64;
        (((assists * self.assists_mult) + self.assists_mod) * assists) / self.assists_div
    }

    /// Maps an accuracy fraction in [0, 1] onto [0.95, 1.05] with default tuning.
    pub fn accuracy_score(&self, accuracy: f64) -> f64 {
        self.accuracy_base + (accuracy * self.accuracy_mult)
    }

    pub fn loss_mult(&self, average_level: f64, player_level: f64) -> f64 {
        self.loss_base + (self.loss_mult * (player_level / average_level))
    }

    pub fn time_survived_mult(&self, time_survived: f64, game_length: f64) -> f64 {
        self.time_surv_base + (time_survived / game_length)
    }

    /// Grows as the player's level falls below the match average.
    pub fn scale_bonus(&self, average_level: f64, player_level: f64) -> f64 {
        self.scaling_bonus_base + (self.scaling_bonus_mod * (average_level / player_level))
    }
}

pub fn calc_kill_score(kills: u32) -> f64 {
    DEFAULT_CONSTANTS.kill_score(kills)
}

pub fn calc_down_score(downs: u32) -> f64 {
    DEFAULT_CONSTANTS.down_score(downs)
}

pub fn calc_place_score(place_finished: u32) -> f64 {
    DEFAULT_CONSTANTS.place_score(place_finished)
}

pub fn calc_assist_score(assists: u32) -> f64 {
    DEFAULT_CONSTANTS.assist_score(assists)
}

pub fn calc_accuracy_score(accuracy: f64) -> f64 {
    DEFAULT_CONSTANTS.accuracy_score(accuracy)
}

pub fn calc_loss_mult(average_level: f64, player_level: f64) -> f64 {
    DEFAULT_CONSTANTS.loss_mult(average_level, player_level)
}

pub fn calc_time_survived_mult(time_survived: f64, game_length: f64) -> f64 {
    DEFAULT_CONSTANTS.time_survived_mult(time_survived, game_length)
}

pub fn calc_scale_bonus(average_level: f64, player_level: f64) -> f64 {
    DEFAULT_CONSTANTS.scale_bonus(average_level, player_level)
}
