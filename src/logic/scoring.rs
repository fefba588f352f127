//! Scoring rules evaluator: set completion, match decision, score edits.
//!
//! Everything up to `commit_score` is pure and free of display or session
//! state, so the same checks run on the server and in every viewer.

use crate::models::{
    Match, MatchId, MatchOutcome, MatchStatus, PlayerId, SetScore, Side, TieBreakType, Tournament,
    TournamentError, TournamentRules,
};

/// Highest value either game count may take in the given set.
/// None means uncapped (no tie-break: completion is lead-driven).
pub fn max_legal_value(
    set_index: usize,
    sets: &[SetScore],
    rules: &TournamentRules,
) -> Option<u32> {
    match rules.tie_break {
        TieBreakType::NoTieBreak => None,
        TieBreakType::Normal => Some(rules.games_per_set + 1),
        TieBreakType::SuperTieBreak => {
            if is_decider(set_index, sets, rules) {
                Some(10)
            } else {
                Some(rules.games_per_set + 1)
            }
        }
    }
}

/// A decider: the last possible set of the match with the prior sets split
/// evenly between both sides.
fn is_decider(set_index: usize, sets: &[SetScore], rules: &TournamentRules) -> bool {
    if set_index + 1 != rules.max_sets() {
        return false;
    }
    let prior = &sets[..set_index.min(sets.len())];
    let (one, two) = count_won_sets(prior, rules);
    one == two
}

fn normal_complete(leader: u32, trailer: u32, games_per_set: u32) -> bool {
    (leader == games_per_set && leader >= trailer + 2)
        || (leader == games_per_set + 1 && (trailer == games_per_set || trailer + 2 == leader))
}

/// Whether the set at `set_index` satisfies the completion predicate.
pub fn is_set_complete(set_index: usize, sets: &[SetScore], rules: &TournamentRules) -> bool {
    let Some(set) = sets.get(set_index) else {
        return false;
    };
    let (leader, trailer) = set.leader_trailer();
    match rules.tie_break {
        TieBreakType::NoTieBreak => leader >= rules.games_per_set && leader >= trailer + 2,
        TieBreakType::Normal => normal_complete(leader, trailer, rules.games_per_set),
        TieBreakType::SuperTieBreak => {
            if is_decider(set_index, sets, rules) {
                // Source behavior: a one-point lead at 10 decides the super
                // tie-break (loser < 10 suffices). Flagged for confirmation
                // against the governing rulebook, preserved as-is.
                leader == 10 && trailer < 10
            } else {
                normal_complete(leader, trailer, rules.games_per_set)
            }
        }
    }
}

/// Complete sets won per side, considering at most the theoretical maximum
/// number of sets. Invariant under appending further incomplete sets.
pub fn count_won_sets(sets: &[SetScore], rules: &TournamentRules) -> (u32, u32) {
    let mut one = 0;
    let mut two = 0;
    for (i, set) in sets.iter().take(rules.max_sets()).enumerate() {
        if is_set_complete(i, sets, rules) {
            match set.leading_side() {
                Some(Side::One) => one += 1,
                Some(Side::Two) => two += 1,
                None => {}
            }
        }
    }
    (one, two)
}

/// True when either side has reached the required number of won sets.
pub fn is_match_decided(sets: &[SetScore], rules: &TournamentRules) -> bool {
    let (one, two) = count_won_sets(sets, rules);
    one >= rules.sets_to_win || two >= rules.sets_to_win
}

/// Winning side, if the sets decide the match.
pub fn winner_side(sets: &[SetScore], rules: &TournamentRules) -> Option<Side> {
    let (one, two) = count_won_sets(sets, rules);
    if one >= rules.sets_to_win {
        Some(Side::One)
    } else if two >= rules.sets_to_win {
        Some(Side::Two)
    } else {
        None
    }
}

/// Shortest prefix of `sets` that already decides the match, if any.
fn decided_prefix_len(sets: &[SetScore], rules: &TournamentRules) -> Option<usize> {
    (1..=sets.len()).find(|&n| is_match_decided(&sets[..n], rules))
}

/// Validate a proposed edit against the current sets.
///
/// Range-checks every proposed value, and applies the soft lock: once the
/// match is decided, no score may increase past the deciding point, while
/// decreases stay legal so a typo can be corrected without structurally
/// reopening the match.
pub fn validate_score_edit(
    current: &[SetScore],
    proposed: &[SetScore],
    rules: &TournamentRules,
) -> Result<(), TournamentError> {
    for (i, set) in proposed.iter().enumerate() {
        if let Some(max) = max_legal_value(i, proposed, rules) {
            for value in [set.player1, set.player2] {
                if value > max {
                    return Err(TournamentError::ScoreOutOfRange {
                        set_number: i + 1,
                        value,
                        max,
                    });
                }
            }
        }
    }

    if is_match_decided(current, rules) {
        for (i, set) in proposed.iter().enumerate() {
            let before = current.get(i).copied().unwrap_or_default();
            if set.player1 > before.player1 || set.player2 > before.player2 {
                return Err(TournamentError::ScoreLockedByResult);
            }
        }
    }

    // Independent of history: scores entered beyond a deciding prefix are
    // increases past the deciding point.
    if let Some(n) = decided_prefix_len(proposed, rules) {
        for set in &proposed[n..] {
            if set.player1 > 0 || set.player2 > 0 {
                return Err(TournamentError::ScoreLockedByResult);
            }
        }
    }

    Ok(())
}

/// Append an empty set when the last set just completed, the match is still
/// open and the sequence is below the theoretical maximum. Returns whether a
/// set was appended.
pub fn auto_advance(sets: &mut Vec<SetScore>, rules: &TournamentRules) -> bool {
    if sets.is_empty() || sets.len() >= rules.max_sets() {
        return false;
    }
    if !is_set_complete(sets.len() - 1, sets, rules) {
        return false;
    }
    if is_match_decided(sets, rules) {
        return false;
    }
    sets.push(SetScore::default());
    true
}

/// Result of a provisional score edit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScoreEdit {
    /// Sets to mirror to spectators, after auto-advance.
    pub sets: Vec<SetScore>,
    /// The edit started the match (scheduled -> in_progress).
    pub started: bool,
    /// The sets now decide the match.
    pub decided: bool,
}

/// Validate a provisional (unpersisted) score edit and derive its effects.
///
/// The only durable change is the `scheduled -> in_progress` transition on
/// the first edit; the sets themselves are returned for broadcast, never
/// stored on the match.
pub fn record_score_edit(
    tournament: &mut Tournament,
    match_id: MatchId,
    proposed: Vec<SetScore>,
) -> Result<ScoreEdit, TournamentError> {
    let rules = tournament.rules;
    let game = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if game.player1.is_none() || game.player2.is_none() {
        return Err(TournamentError::InvalidState);
    }

    validate_score_edit(&game.sets, &proposed, &rules)?;

    let mut sets = proposed;
    auto_advance(&mut sets, &rules);

    let started = game.status == MatchStatus::Scheduled;
    if started {
        game.status = MatchStatus::InProgress;
    }

    Ok(ScoreEdit {
        decided: is_match_decided(&sets, &rules),
        sets,
        started,
    })
}

/// An authoritative result to record on a match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoreCommit {
    /// A played-out result: the sets must decide the match.
    Played(Vec<SetScore>),
    /// Administrative result (walkover, disqualification, retirement).
    Administrative {
        outcome: MatchOutcome,
        winner: PlayerId,
    },
}

/// Record a final result: sets that decide the match, or an administrative
/// outcome with an explicit winner and no sets.
pub fn commit_score(
    tournament: &mut Tournament,
    match_id: MatchId,
    commit: ScoreCommit,
) -> Result<&Match, TournamentError> {
    let rules = tournament.rules;
    let game = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;

    match commit {
        ScoreCommit::Played(sets) => {
            if game.player1.is_none() || game.player2.is_none() {
                return Err(TournamentError::InvalidState);
            }
            if game.status == MatchStatus::Finished && game.outcome == MatchOutcome::Normal {
                validate_score_edit(&game.sets, &sets, &rules)?;
            } else {
                validate_score_edit(&[], &sets, &rules)?;
            }
            // Every set but the last must be complete; the sequence may not
            // continue past an unfinished set.
            for i in 0..sets.len().saturating_sub(1) {
                if !is_set_complete(i, &sets, &rules) {
                    return Err(TournamentError::InvalidSetSequence { set_number: i + 1 });
                }
            }
            let side = winner_side(&sets, &rules).ok_or(TournamentError::NoWinnerFromSets)?;
            game.sets = sets;
            game.winner = game.player_on(side);
            game.outcome = MatchOutcome::Normal;
            game.status = MatchStatus::Finished;
        }
        ScoreCommit::Administrative { outcome, winner } => {
            if outcome == MatchOutcome::Normal {
                return Err(TournamentError::NoWinnerFromSets);
            }
            if !game.involves(winner) {
                return Err(TournamentError::PlayerNotFound(winner));
            }
            game.sets.clear();
            game.winner = Some(winner);
            game.outcome = outcome;
            game.status = MatchStatus::Finished;
        }
    }

    Ok(&*game)
}
