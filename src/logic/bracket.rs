//! Bracket assembler: display grouping, draw generation, seeding, pairing
//! and stage resets.

use crate::logic::rounds::{
    base_round, classify, match_label, match_sequence, BaseRound, RoundStage, ELIMINATION_STAGES,
};
use crate::models::{
    Match, MatchId, MatchOutcome, MatchStatus, Player, PlayerId, Tournament, TournamentError,
};
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::BTreeMap;

/// One column of the knockout bracket view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BracketColumn {
    pub stage: RoundStage,
    pub title: String,
    pub matches: Vec<Match>,
}

/// Within a round: embedded sequence number first, stable identity order as
/// the fallback.
fn round_position(a: &Match, b: &Match) -> std::cmp::Ordering {
    match (match_sequence(&a.round), match_sequence(&b.round)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

/// Knockout matches bucketed into columns, ordered by canonical stage.
pub fn bracket_columns(matches: &[Match]) -> Vec<BracketColumn> {
    let mut buckets: BTreeMap<RoundStage, Vec<Match>> = BTreeMap::new();
    for m in matches {
        if let Some(stage) = classify(&m.round) {
            if stage.is_elimination() {
                buckets.entry(stage).or_default().push(m.clone());
            }
        }
    }
    buckets
        .into_iter()
        .map(|(stage, mut matches)| {
            matches.sort_by(round_position);
            BracketColumn {
                stage,
                title: stage.label().to_string(),
                matches,
            }
        })
        .collect()
}

/// One displayed round section of the match list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RoundSection {
    pub title: String,
    pub matches: Vec<Match>,
}

/// All matches bucketed by base round in display order. Elimination buckets
/// whose matches are still fully unassigned placeholders are dropped from
/// display only; the matches themselves stay in the schedule.
pub fn visible_rounds(matches: &[Match]) -> Vec<RoundSection> {
    let mut buckets: BTreeMap<BaseRound, Vec<Match>> = BTreeMap::new();
    for m in matches {
        buckets.entry(base_round(&m.round)).or_default().push(m.clone());
    }
    buckets
        .into_iter()
        .filter(|(base, matches)| {
            let placeholder_bucket = matches.iter().all(Match::is_unassigned);
            !(matches!(base, BaseRound::Stage(s) if s.is_elimination()) && placeholder_bucket)
        })
        .map(|(base, mut matches)| {
            matches.sort_by(round_position);
            RoundSection {
                title: base.to_string(),
                matches,
            }
        })
        .collect()
}

fn has_group_matches(t: &Tournament) -> bool {
    t.matches
        .iter()
        .any(|m| classify(&m.round) == Some(RoundStage::Group))
}

fn has_elimination_matches(t: &Tournament) -> bool {
    t.matches
        .iter()
        .any(|m| classify(&m.round).is_some_and(RoundStage::is_elimination))
}

const GROUP_LETTERS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// Draw the group stage plus an elimination skeleton sized for the top two
/// of each group. Returns the number of matches created.
pub fn generate_group_stage(
    tournament: &mut Tournament,
    group_count: usize,
) -> Result<usize, TournamentError> {
    if has_group_matches(tournament) {
        return Err(TournamentError::InvalidState);
    }
    if group_count == 0 || group_count > GROUP_LETTERS.len() {
        return Err(TournamentError::InvalidState);
    }
    let required = group_count * 2;
    if tournament.players.len() < required {
        return Err(TournamentError::NotEnoughPlayers { required });
    }

    let mut order: Vec<PlayerId> = tournament.players.iter().map(|p| p.id).collect();
    order.shuffle(&mut rand::thread_rng());

    // Deal players into lettered groups round-robin.
    let mut groups: Vec<(String, Vec<PlayerId>)> = GROUP_LETTERS[..group_count]
        .iter()
        .map(|c| (format!("Group {}", c), Vec::new()))
        .collect();
    for (i, id) in order.into_iter().enumerate() {
        groups[i % group_count].1.push(id);
    }
    for (name, members) in &groups {
        for id in members {
            if let Some(p) = tournament.players.iter_mut().find(|p| p.id == *id) {
                p.group = Some(name.clone());
            }
        }
    }

    let mut created = 0;
    for (name, members) in &groups {
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                tournament
                    .matches
                    .push(Match::with_players(name.clone(), members[i], members[j]));
                created += 1;
            }
        }
    }

    // Top two per group advance into the knockout skeleton.
    created += knockout_skeleton(tournament, group_count * 2)?;
    Ok(created)
}

/// Create an empty elimination bracket sized for every entrant (knockout-only
/// format). Returns the number of matches created.
pub fn generate_knockout_skeleton(tournament: &mut Tournament) -> Result<usize, TournamentError> {
    let entrants = tournament.players.len();
    if entrants < 2 {
        return Err(TournamentError::NotEnoughPlayers { required: 2 });
    }
    knockout_skeleton(tournament, entrants)
}

fn knockout_skeleton(
    tournament: &mut Tournament,
    entrants: usize,
) -> Result<usize, TournamentError> {
    if has_elimination_matches(tournament) {
        return Err(TournamentError::InvalidState);
    }
    let entry = RoundStage::entry_stage_for(entrants);
    let mut created = 0;
    let mut stage = Some(entry);
    while let Some(s) = stage {
        for n in 1..=s.matches_in_round() {
            tournament.matches.push(Match::new(match_label(s, n)));
            created += 1;
        }
        stage = s.next();
    }
    Ok(created)
}

/// Seeding options for the first elimination round.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedOptions {
    /// Best effort: avoid pairing two players from the same group.
    pub avoid_same_group: bool,
}

/// Report of a seeding pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SeedReport {
    pub updated: usize,
}

/// Randomly place every entrant into the first elimination round's slots.
/// Finished matches are left alone; unfilled slots stay TBD (byes).
pub fn seed_first_round(
    tournament: &mut Tournament,
    options: SeedOptions,
) -> Result<SeedReport, TournamentError> {
    let entry = ELIMINATION_STAGES
        .iter()
        .copied()
        .find(|s| {
            tournament
                .matches
                .iter()
                .any(|m| classify(&m.round) == Some(*s))
        })
        .ok_or(TournamentError::InvalidState)?;

    let mut pool: Vec<Player> = tournament.players.clone();
    if pool.len() > entry.bracket_size() as usize {
        return Err(TournamentError::InvalidState);
    }
    pool.shuffle(&mut rand::thread_rng());

    let pairs = if options.avoid_same_group {
        pair_avoiding_groups(pool)
    } else {
        pool.chunks(2)
            .map(|c| (c[0].id, c.get(1).map(|p| p.id)))
            .collect()
    };

    let mut round: Vec<&mut Match> = tournament
        .matches
        .iter_mut()
        .filter(|m| classify(&m.round) == Some(entry))
        .collect();
    round.sort_by(|a, b| round_position(a, b));

    let mut updated = 0;
    let mut pairs = pairs.into_iter();
    for m in round {
        if m.status != MatchStatus::Scheduled {
            continue;
        }
        let Some((p1, p2)) = pairs.next() else { break };
        m.player1 = Some(p1);
        m.player2 = p2;
        updated += 1;
    }
    Ok(SeedReport { updated })
}

/// Greedy pairing over a shuffled pool: each pick prefers the first
/// remaining player from a different group.
fn pair_avoiding_groups(mut pool: Vec<Player>) -> Vec<(PlayerId, Option<PlayerId>)> {
    let mut pairs = Vec::new();
    while !pool.is_empty() {
        let first = pool.remove(0);
        if pool.is_empty() {
            pairs.push((first.id, None));
            break;
        }
        let partner = pool
            .iter()
            .position(|p| p.group != first.group || first.group.is_none())
            .unwrap_or(0);
        let second = pool.remove(partner);
        pairs.push((first.id, Some(second.id)));
    }
    pairs
}

/// Entrants not yet placed in another match of the given match's base round.
pub fn eligible_players<'a>(
    tournament: &'a Tournament,
    match_id: MatchId,
) -> Result<Vec<&'a Player>, TournamentError> {
    let game = tournament
        .get_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    let base = base_round(&game.round);
    Ok(tournament
        .players
        .iter()
        .filter(|p| {
            !tournament.matches.iter().any(|m| {
                m.id != match_id && base_round(&m.round) == base && m.involves(p.id)
            })
        })
        .collect())
}

/// Manually assign an elimination slot pairing. None clears a slot.
pub fn set_pairing(
    tournament: &mut Tournament,
    match_id: MatchId,
    player1: Option<PlayerId>,
    player2: Option<PlayerId>,
) -> Result<&Match, TournamentError> {
    let game = tournament
        .get_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if !classify(&game.round).is_some_and(RoundStage::is_elimination)
        || game.status == MatchStatus::Finished
    {
        return Err(TournamentError::InvalidState);
    }
    if player1.is_some() && player1 == player2 {
        return Err(TournamentError::DuplicatePlayer);
    }
    let base = base_round(&game.round);
    for id in [player1, player2].into_iter().flatten() {
        if tournament.get_player(id).is_none() {
            return Err(TournamentError::PlayerNotFound(id));
        }
        let taken = tournament
            .matches
            .iter()
            .any(|m| m.id != match_id && base_round(&m.round) == base && m.involves(id));
        if taken {
            return Err(TournamentError::SlotTakenInRound(id));
        }
    }
    let game = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    game.player1 = player1;
    game.player2 = player2;
    Ok(&*game)
}

/// Blank every elimination match at or beyond the given stage: players,
/// sets, winner and status are cleared, earlier rounds and the group stage
/// stay untouched. Returns how many matches were cleared.
pub fn reset_knockout_from(
    tournament: &mut Tournament,
    stage: RoundStage,
) -> Result<usize, TournamentError> {
    if !stage.is_elimination() {
        return Err(TournamentError::InvalidState);
    }
    let mut cleared = 0;
    for m in &mut tournament.matches {
        let Some(s) = classify(&m.round) else { continue };
        if !s.is_elimination() || s < stage {
            continue;
        }
        m.player1 = None;
        m.player2 = None;
        m.winner = None;
        m.outcome = MatchOutcome::Normal;
        m.sets.clear();
        m.status = MatchStatus::Scheduled;
        cleared += 1;
    }
    Ok(cleared)
}

/// Delete all group-stage matches, optionally cascading into the
/// elimination bracket. Returns how many matches were removed.
pub fn reset_group_stage(tournament: &mut Tournament, also_knockout: bool) -> usize {
    let before = tournament.matches.len();
    tournament.matches.retain(|m| match classify(&m.round) {
        Some(RoundStage::Group) => false,
        Some(s) if s.is_elimination() => !also_knockout,
        _ => true,
    });
    if !has_group_matches(tournament) {
        for p in &mut tournament.players {
            p.group = None;
        }
    }
    before - tournament.matches.len()
}
