//! Scoring rules configured per tournament.

use serde::{Deserialize, Serialize};

/// How a set at the game-count boundary is decided.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakType {
    /// Tie-break game at games_per_set all; the set can reach games_per_set + 1.
    #[default]
    Normal,
    /// Decider set is replaced by a first-to-10 super tie-break.
    SuperTieBreak,
    /// No cap: play on until one side leads by two games.
    NoTieBreak,
}

/// Scoring rules for every match of a tournament.
///
/// Immutable once the match schedule exists; changing them is an explicit
/// operator action and never reinterprets already-finished matches.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentRules {
    /// Sets needed to win the match (best of 2*sets_to_win - 1).
    #[serde(default = "default_sets_to_win")]
    pub sets_to_win: u32,
    /// Games needed to win a set (before tie-break handling).
    #[serde(default = "default_games_per_set")]
    pub games_per_set: u32,
    #[serde(default)]
    pub tie_break: TieBreakType,
}

fn default_sets_to_win() -> u32 {
    2
}

fn default_games_per_set() -> u32 {
    6
}

impl Default for TournamentRules {
    fn default() -> Self {
        Self {
            sets_to_win: default_sets_to_win(),
            games_per_set: default_games_per_set(),
            tie_break: TieBreakType::default(),
        }
    }
}

impl TournamentRules {
    /// Both counts must be at least 1; `max_sets` is meaningless otherwise.
    pub fn validate(&self) -> Result<(), crate::models::TournamentError> {
        if self.sets_to_win == 0 || self.games_per_set == 0 {
            return Err(crate::models::TournamentError::InvalidRules);
        }
        Ok(())
    }

    /// Longest possible match under these rules.
    pub fn max_sets(&self) -> usize {
        (2 * self.sets_to_win - 1) as usize
    }
}
