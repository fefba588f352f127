//! Tennis tournament web app: scoring rules, round mapping, bracket and
//! standings assembly, and live score synchronization.

pub mod live;
pub mod logic;
pub mod models;

pub use live::{LiveHub, LiveScoreView, MatchMessage, MatchMessageKind, Session, TournamentMessage};
pub use logic::{
    assign_referee, assign_referee_bulk, bracket_columns, commit_score, eligible_players,
    generate_group_stage, generate_knockout_skeleton, group_standings, record_score_edit,
    reset_group_stage, reset_knockout_from, seed_first_round, set_pairing, visible_rounds,
    BracketColumn, RefereeReport, RoundStage, ScoreCommit, SeedOptions, StandingsPolicy,
};
pub use models::{
    Match, MatchId, MatchOutcome, MatchStatus, Player, PlayerId, SetScore, Side, TieBreakType,
    Tournament, TournamentError, TournamentId, TournamentRules,
};
