//! Tournament business logic: scoring, rounds, bracket assembly, standings, referees.

pub mod bracket;
pub mod referee;
pub mod rounds;
pub mod scoring;
pub mod standings;

pub use bracket::{
    bracket_columns, eligible_players, generate_group_stage, generate_knockout_skeleton,
    reset_group_stage, reset_knockout_from, seed_first_round, set_pairing, visible_rounds,
    BracketColumn, RoundSection, SeedOptions, SeedReport,
};
pub use referee::{assign_referee, assign_referee_bulk, RefereeReport};
pub use rounds::{base_round, classify, match_label, match_sequence, BaseRound, RoundStage};
pub use scoring::{
    auto_advance, commit_score, count_won_sets, is_match_decided, is_set_complete,
    max_legal_value, record_score_edit, validate_score_edit, winner_side, ScoreCommit, ScoreEdit,
};
pub use standings::{group_standings, GroupTable, StandingsPolicy, StandingsRow, StandingsTieBreak};
