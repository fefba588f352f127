//! Data structures for the tennis tournament: rules, matches, players, tournament state.

mod game;
mod player;
mod rules;
mod tournament;

pub use game::{Match, MatchId, MatchOutcome, MatchStatus, SetScore, Side};
pub use player::{Player, PlayerId};
pub use rules::{TieBreakType, TournamentRules};
pub use tournament::{Tournament, TournamentError, TournamentId};
