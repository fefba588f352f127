//! Broadcast hub: per-match and per-tournament topics over tokio broadcast
//! channels, with scoped subscription handles.
//!
//! Topics are created on first subscribe and removed when the last
//! subscription drops, so an abandoned session can never leak a "room".

use crate::models::{Match, MatchId, MatchStatus, PlayerId, SetScore, TournamentId};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

/// Buffered messages per topic before slow subscribers start lagging.
const TOPIC_CAPACITY: usize = 64;

/// Match-scoped message. `seq` is stamped per match by the hub and increases
/// monotonically; a confirmed message supersedes every provisional with a
/// lower seq regardless of arrival order.
#[derive(Clone, Debug, Serialize)]
pub struct MatchMessage {
    pub seq: u64,
    #[serde(flatten)]
    pub kind: MatchMessageKind,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchMessageKind {
    /// Ephemeral mirror of a referee's in-progress edits. Last write wins,
    /// never persisted.
    Provisional { sets: Vec<SetScore> },
    /// Authoritative match snapshot after a confirmed state change.
    Confirmed { game: Match },
}

/// Tournament-scoped confirmed notifications.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TournamentMessage {
    MatchUpdated { game: Match },
    MatchStatusChanged { match_id: MatchId, status: MatchStatus },
    RefereeChanged { match_id: MatchId, referee: Option<PlayerId> },
    /// Group standings are stale; refetch.
    StandingsInvalidated,
    /// Bracket layout is stale (regeneration, seeding, reset); refetch.
    BracketInvalidated,
}

struct MatchTopic {
    tx: broadcast::Sender<MatchMessage>,
    next_seq: u64,
}

#[derive(Default)]
struct HubInner {
    matches: HashMap<MatchId, MatchTopic>,
    tournaments: HashMap<TournamentId, broadcast::Sender<TournamentMessage>>,
}

/// Cheaply cloneable handle to the broadcast state. All publishes are
/// fire-and-forget: with no subscribers they are dropped.
#[derive(Clone, Default)]
pub struct LiveHub {
    inner: Arc<Mutex<HubInner>>,
}

impl LiveHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one match's provisional and confirmed messages.
    pub fn subscribe_match(&self, match_id: MatchId) -> MatchSubscription {
        let mut inner = self.inner.lock().unwrap();
        let topic = inner.matches.entry(match_id).or_insert_with(|| MatchTopic {
            tx: broadcast::channel(TOPIC_CAPACITY).0,
            next_seq: 1,
        });
        MatchSubscription {
            rx: topic.tx.subscribe(),
            hub: self.clone(),
            match_id,
        }
    }

    /// Subscribe to a tournament's confirmed notifications.
    pub fn subscribe_tournament(&self, tournament_id: TournamentId) -> TournamentSubscription {
        let mut inner = self.inner.lock().unwrap();
        let tx = inner
            .tournaments
            .entry(tournament_id)
            .or_insert_with(|| broadcast::channel(TOPIC_CAPACITY).0);
        TournamentSubscription {
            rx: tx.subscribe(),
            hub: self.clone(),
            tournament_id,
        }
    }

    fn send_match(&self, match_id: MatchId, make: impl FnOnce(u64) -> MatchMessageKind) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(topic) = inner.matches.get_mut(&match_id) {
            let seq = topic.next_seq;
            topic.next_seq += 1;
            let _ = topic.tx.send(MatchMessage {
                seq,
                kind: make(seq),
            });
        }
    }

    fn send_tournament(&self, tournament_id: TournamentId, msg: TournamentMessage) {
        let inner = self.inner.lock().unwrap();
        if let Some(tx) = inner.tournaments.get(&tournament_id) {
            let _ = tx.send(msg);
        }
    }

    /// Relay an in-progress score edit to the match's subscribers.
    pub fn publish_provisional(&self, match_id: MatchId, sets: Vec<SetScore>) {
        self.send_match(match_id, |_| MatchMessageKind::Provisional { sets });
    }

    /// Fan out a confirmed match change: snapshot to the match topic and a
    /// MatchUpdated to the tournament topic.
    pub fn publish_match_update(&self, tournament_id: TournamentId, game: &Match) {
        self.send_match(game.id, |_| MatchMessageKind::Confirmed { game: game.clone() });
        self.send_tournament(
            tournament_id,
            TournamentMessage::MatchUpdated { game: game.clone() },
        );
    }

    pub fn publish_status_change(
        &self,
        tournament_id: TournamentId,
        match_id: MatchId,
        status: MatchStatus,
    ) {
        self.send_tournament(
            tournament_id,
            TournamentMessage::MatchStatusChanged { match_id, status },
        );
    }

    pub fn publish_referee_change(
        &self,
        tournament_id: TournamentId,
        match_id: MatchId,
        referee: Option<PlayerId>,
    ) {
        self.send_tournament(
            tournament_id,
            TournamentMessage::RefereeChanged { match_id, referee },
        );
    }

    pub fn publish_standings_invalidated(&self, tournament_id: TournamentId) {
        self.send_tournament(tournament_id, TournamentMessage::StandingsInvalidated);
    }

    pub fn publish_bracket_invalidated(&self, tournament_id: TournamentId) {
        self.send_tournament(tournament_id, TournamentMessage::BracketInvalidated);
    }

    fn release_match(&self, match_id: MatchId) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(topic) = inner.matches.get(&match_id) {
            // The dropping subscription's receiver is still counted here.
            if topic.tx.receiver_count() <= 1 {
                inner.matches.remove(&match_id);
            }
        }
    }

    fn release_tournament(&self, tournament_id: TournamentId) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(tx) = inner.tournaments.get(&tournament_id) {
            if tx.receiver_count() <= 1 {
                inner.tournaments.remove(&tournament_id);
            }
        }
    }
}

/// Scoped handle to one match topic; dropping it releases the topic.
pub struct MatchSubscription {
    rx: broadcast::Receiver<MatchMessage>,
    hub: LiveHub,
    match_id: MatchId,
}

impl MatchSubscription {
    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    /// Next message, skipping over any lagged gap. None once the topic is
    /// gone and drained.
    pub async fn recv(&mut self) -> Option<MatchMessage> {
        loop {
            match self.rx.recv().await {
                Ok(msg) => return Some(msg),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    log::warn!("match {} subscriber lagged by {} messages", self.match_id, n);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

impl Drop for MatchSubscription {
    fn drop(&mut self) {
        self.hub.release_match(self.match_id);
    }
}

/// Scoped handle to one tournament topic; dropping it releases the topic.
pub struct TournamentSubscription {
    rx: broadcast::Receiver<TournamentMessage>,
    hub: LiveHub,
    tournament_id: TournamentId,
}

impl TournamentSubscription {
    pub fn tournament_id(&self) -> TournamentId {
        self.tournament_id
    }

    pub async fn recv(&mut self) -> Option<TournamentMessage> {
        loop {
            match self.rx.recv().await {
                Ok(msg) => return Some(msg),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    log::warn!(
                        "tournament {} subscriber lagged by {} messages",
                        self.tournament_id,
                        n
                    );
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

impl Drop for TournamentSubscription {
    fn drop(&mut self) {
        self.hub.release_tournament(self.tournament_id);
    }
}
