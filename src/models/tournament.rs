//! Tournament aggregate and TournamentError.

use crate::models::game::{Match, MatchId, MatchStatus};
use crate::models::player::{Player, PlayerId};
use crate::models::rules::TournamentRules;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// Player not found in the entrant list.
    PlayerNotFound(PlayerId),
    /// Match not found in the schedule.
    MatchNotFound(MatchId),
    /// Rules cannot change once the match schedule exists.
    RulesLocked,
    /// Rules with a zero count are rejected before any scoring runs on them.
    InvalidRules,
    /// Not enough entrants for the requested draw.
    NotEnoughPlayers { required: usize },
    /// A game count exceeds the maximum legal value for that set.
    ScoreOutOfRange { set_number: usize, value: u32, max: u32 },
    /// The match is already decided; scores may be corrected down but not increased.
    ScoreLockedByResult,
    /// A set before the last one does not satisfy the completion predicate.
    InvalidSetSequence { set_number: usize },
    /// Submitted sets do not produce a winner and no administrative outcome was given.
    NoWinnerFromSets,
    /// The same player cannot occupy both slots of a match.
    DuplicatePlayer,
    /// The referee is also a player in this match.
    RefereeIsPlayer(MatchId),
    /// Player already placed in another match of the same base round.
    SlotTakenInRound(PlayerId),
    /// Round label does not name a known elimination stage.
    UnknownStage(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::DuplicatePlayerName => write!(f, "A player with this name already exists"),
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::RulesLocked => {
                write!(f, "Scoring rules cannot change once matches exist")
            }
            TournamentError::InvalidRules => {
                write!(f, "Rules need at least one set to win and one game per set")
            }
            TournamentError::NotEnoughPlayers { required } => {
                write!(f, "Need at least {} players for this draw", required)
            }
            TournamentError::ScoreOutOfRange { set_number, value, max } => {
                write!(f, "Set {}: score {} exceeds the maximum of {}", set_number, value, max)
            }
            TournamentError::ScoreLockedByResult => {
                write!(f, "Match already decided; scores may only be corrected downwards")
            }
            TournamentError::InvalidSetSequence { set_number } => {
                write!(f, "Set {} is not complete but is followed by further sets", set_number)
            }
            TournamentError::NoWinnerFromSets => {
                write!(f, "Submitted sets do not decide the match")
            }
            TournamentError::DuplicatePlayer => {
                write!(f, "The same player cannot be on both sides of a match")
            }
            TournamentError::RefereeIsPlayer(id) => {
                write!(f, "Referee is also a player in match {}", id)
            }
            TournamentError::SlotTakenInRound(id) => {
                write!(f, "Player {} is already placed in another match of this round", id)
            }
            TournamentError::UnknownStage(label) => {
                write!(f, "Unknown elimination stage: {}", label)
            }
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: rules, entrants and the match schedule.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub rules: TournamentRules,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Create a new tournament with no entrants or matches.
    pub fn new(
        name: impl Into<String>,
        rules: TournamentRules,
    ) -> Result<Self, TournamentError> {
        rules.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rules,
            players: Vec::new(),
            matches: Vec::new(),
        })
    }

    /// Add an entrant. Names must be unique (case-insensitive); closed once matches exist.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<&Player, TournamentError> {
        if !self.matches.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName);
        }
        self.players.push(Player::new(name_trimmed));
        self.players.last().ok_or(TournamentError::InvalidState)
    }

    /// Remove an entrant (only before any matches exist).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        if !self.matches.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Replace the scoring rules. Locked once the schedule exists; finished
    /// matches are never reinterpreted.
    pub fn set_rules(&mut self, rules: TournamentRules) -> Result<(), TournamentError> {
        rules.validate()?;
        if !self.matches.is_empty() {
            return Err(TournamentError::RulesLocked);
        }
        self.rules = rules;
        Ok(())
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Matches filtered by status; None returns the whole schedule.
    pub fn matches_by_status(&self, status: Option<MatchStatus>) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|m| status.map_or(true, |s| m.status == s))
            .collect()
    }
}
