//! Per-client session: one optional tournament scope plus any number of
//! match scopes.

use crate::live::hub::{LiveHub, MatchSubscription, TournamentSubscription};
use crate::models::{MatchId, TournamentId};
use std::collections::HashMap;

/// A connected client session.
///
/// Connecting yields a session with no subscriptions; subscribing acquires
/// scoped handles and unsubscribing (or dropping the session) releases them
/// immediately. No delivery is guaranteed after release.
pub struct Session {
    hub: LiveHub,
    tournament: Option<TournamentSubscription>,
    matches: HashMap<MatchId, MatchSubscription>,
}

impl Session {
    pub fn connect(hub: &LiveHub) -> Self {
        Self {
            hub: hub.clone(),
            tournament: None,
            matches: HashMap::new(),
        }
    }

    /// Subscribe the single tournament scope, replacing any previous one.
    pub fn subscribe_tournament(&mut self, tournament_id: TournamentId) {
        if self
            .tournament
            .as_ref()
            .is_some_and(|s| s.tournament_id() == tournament_id)
        {
            return;
        }
        self.tournament = Some(self.hub.subscribe_tournament(tournament_id));
    }

    pub fn unsubscribe_tournament(&mut self) {
        self.tournament = None;
    }

    pub fn subscribe_match(&mut self, match_id: MatchId) {
        self.matches
            .entry(match_id)
            .or_insert_with(|| self.hub.subscribe_match(match_id));
    }

    pub fn unsubscribe_match(&mut self, match_id: MatchId) {
        self.matches.remove(&match_id);
    }

    pub fn tournament_scope_mut(&mut self) -> Option<&mut TournamentSubscription> {
        self.tournament.as_mut()
    }

    pub fn match_scope_mut(&mut self, match_id: MatchId) -> Option<&mut MatchSubscription> {
        self.matches.get_mut(&match_id)
    }

    pub fn subscribed_matches(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.matches.keys().copied()
    }
}
