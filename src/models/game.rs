//! Match, SetScore and the match-level enums.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which side of a match (slot 1 or slot 2).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

/// Lifecycle state of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Finished,
}

/// How a finished match was decided.
///
/// Anything other than `Normal` carries a winner and an empty set list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    #[default]
    Normal,
    Walkover,
    Disqualification,
    Retirement,
}

/// Game counts for one set, in slot order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetScore {
    pub player1: u32,
    pub player2: u32,
}

impl SetScore {
    pub fn new(player1: u32, player2: u32) -> Self {
        Self { player1, player2 }
    }

    /// (leader, trailer) game counts, ignoring which slot leads.
    pub fn leader_trailer(&self) -> (u32, u32) {
        if self.player1 >= self.player2 {
            (self.player1, self.player2)
        } else {
            (self.player2, self.player1)
        }
    }

    /// Slot with the higher game count, None when level.
    pub fn leading_side(&self) -> Option<Side> {
        match self.player1.cmp(&self.player2) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// A single match in the schedule. Unresolved slots are None ("TBD").
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Free-text round label, e.g. "Quarterfinal – Match 3" or "Group A".
    pub round: String,
    pub status: MatchStatus,
    pub player1: Option<PlayerId>,
    pub player2: Option<PlayerId>,
    pub referee: Option<PlayerId>,
    /// Set only when status is Finished.
    pub winner: Option<PlayerId>,
    pub outcome: MatchOutcome,
    pub sets: Vec<SetScore>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl Match {
    pub fn new(round: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            round: round.into(),
            status: MatchStatus::Scheduled,
            player1: None,
            player2: None,
            referee: None,
            winner: None,
            outcome: MatchOutcome::Normal,
            sets: Vec::new(),
            scheduled_at: None,
        }
    }

    pub fn with_players(round: impl Into<String>, p1: PlayerId, p2: PlayerId) -> Self {
        let mut m = Self::new(round);
        m.player1 = Some(p1);
        m.player2 = Some(p2);
        m
    }

    /// Player id in the given slot.
    pub fn player_on(&self, side: Side) -> Option<PlayerId> {
        match side {
            Side::One => self.player1,
            Side::Two => self.player2,
        }
    }

    /// True when the player occupies either slot.
    pub fn involves(&self, player: PlayerId) -> bool {
        self.player1 == Some(player) || self.player2 == Some(player)
    }

    /// Placeholder: scheduled with neither slot assigned.
    pub fn is_unassigned(&self) -> bool {
        self.status == MatchStatus::Scheduled && self.player1.is_none() && self.player2.is_none()
    }
}
