//! Client-side merge of provisional and confirmed match messages.

use crate::live::hub::{MatchMessage, MatchMessageKind};
use crate::models::{Match, SetScore};

/// Per-match view state for a subscriber.
///
/// Confirmed snapshots are authoritative: a provisional overlay is kept only
/// while its seq is newer than the last confirmed message, so a confirmed
/// update wins regardless of delivery order.
#[derive(Debug, Default)]
pub struct LiveScoreView {
    confirmed: Option<Match>,
    confirmed_seq: u64,
    provisional: Option<(u64, Vec<SetScore>)>,
}

impl LiveScoreView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the view from a fetched snapshot (seq 0: any live message wins).
    pub fn with_snapshot(game: Match) -> Self {
        Self {
            confirmed: Some(game),
            confirmed_seq: 0,
            provisional: None,
        }
    }

    pub fn apply(&mut self, msg: MatchMessage) {
        match msg.kind {
            MatchMessageKind::Confirmed { game } => {
                if msg.seq >= self.confirmed_seq {
                    self.confirmed_seq = msg.seq;
                    self.confirmed = Some(game);
                }
                if let Some((pseq, _)) = self.provisional {
                    if pseq <= self.confirmed_seq {
                        self.provisional = None;
                    }
                }
            }
            MatchMessageKind::Provisional { sets } => {
                let newer_than_confirmed = msg.seq > self.confirmed_seq;
                let newer_than_overlay = self
                    .provisional
                    .as_ref()
                    .map_or(true, |(pseq, _)| msg.seq > *pseq);
                if newer_than_confirmed && newer_than_overlay {
                    self.provisional = Some((msg.seq, sets));
                }
            }
        }
    }

    /// Last confirmed snapshot, if any.
    pub fn confirmed(&self) -> Option<&Match> {
        self.confirmed.as_ref()
    }

    /// Sets to display: the live overlay when present, else the confirmed
    /// ones.
    pub fn sets(&self) -> &[SetScore] {
        if let Some((_, sets)) = &self.provisional {
            return sets;
        }
        self.confirmed.as_ref().map_or(&[], |g| g.sets.as_slice())
    }

    /// A provisional overlay is currently shown.
    pub fn is_live(&self) -> bool {
        self.provisional.is_some()
    }
}
