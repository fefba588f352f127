//! Referee assignment: single matches and bulk batches.

use crate::models::{Match, MatchId, PlayerId, Tournament, TournamentError};
use serde::Serialize;

/// Outcome of a bulk assignment. Conflicting entries are skipped, never
/// failing the rest of the batch.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RefereeReport {
    pub updated: usize,
    pub skipped: Vec<MatchId>,
}

/// Assign (or with None, clear) the referee of one match. A referee who is
/// also a player in the match is rejected.
pub fn assign_referee(
    tournament: &mut Tournament,
    match_id: MatchId,
    referee: Option<PlayerId>,
) -> Result<&Match, TournamentError> {
    let game = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if let Some(id) = referee {
        if game.involves(id) {
            return Err(TournamentError::RefereeIsPlayer(match_id));
        }
    }
    game.referee = referee;
    Ok(&*game)
}

/// Assign (or clear) the referee across a batch of matches. Matches where
/// the referee plays, and unknown match ids, are reported as skipped.
pub fn assign_referee_bulk(
    tournament: &mut Tournament,
    match_ids: &[MatchId],
    referee: Option<PlayerId>,
) -> RefereeReport {
    let mut report = RefereeReport::default();
    for &match_id in match_ids {
        match assign_referee(tournament, match_id, referee) {
            Ok(_) => report.updated += 1,
            Err(_) => report.skipped.push(match_id),
        }
    }
    report
}
