//! Group-stage standings: per-player aggregates over finished matches.

use crate::logic::rounds::{classify, RoundStage};
use crate::logic::scoring;
use crate::models::{Match, MatchStatus, PlayerId, Tournament};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tiebreak ordering applied after wins. The exact policy belongs to the
/// surrounding application; this is the configurable hook plus a default.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingsTieBreak {
    #[default]
    SetsThenGames,
    GamesThenSets,
}

/// Ranking policy for group tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsPolicy {
    pub points_per_win: u32,
    pub points_per_loss: u32,
    #[serde(default)]
    pub tie_break: StandingsTieBreak,
}

impl Default for StandingsPolicy {
    fn default() -> Self {
        Self {
            points_per_win: 2,
            points_per_loss: 1,
            tie_break: StandingsTieBreak::default(),
        }
    }
}

/// One row of a group table. Derived on demand, never mutated directly.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub player: PlayerId,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub points: u32,
}

impl StandingsRow {
    fn set_diff(&self) -> i64 {
        i64::from(self.sets_won) - i64::from(self.sets_lost)
    }

    fn game_diff(&self) -> i64 {
        i64::from(self.games_won) - i64::from(self.games_lost)
    }
}

/// Ranked standings for one group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupTable {
    pub group: String,
    pub rows: Vec<StandingsRow>,
}

fn is_group_match(m: &Match) -> bool {
    classify(&m.round) == Some(RoundStage::Group)
}

/// Recompute all group tables from the finished group-stage matches.
pub fn group_standings(tournament: &Tournament, policy: &StandingsPolicy) -> Vec<GroupTable> {
    let mut groups: BTreeMap<String, Vec<&Match>> = BTreeMap::new();
    for m in tournament.matches.iter().filter(|m| is_group_match(m)) {
        groups.entry(m.round.trim().to_string()).or_default().push(m);
    }

    groups
        .into_iter()
        .map(|(group, matches)| GroupTable {
            rows: group_rows(tournament, &matches, policy),
            group,
        })
        .collect()
}

fn group_rows(
    tournament: &Tournament,
    matches: &[&Match],
    policy: &StandingsPolicy,
) -> Vec<StandingsRow> {
    let mut rows: BTreeMap<PlayerId, StandingsRow> = BTreeMap::new();
    let blank = |id: PlayerId| StandingsRow {
        player: id,
        name: tournament
            .get_player(id)
            .map(|p| p.name.clone())
            .unwrap_or_default(),
        ..StandingsRow::default()
    };

    // Seed rows for everyone drawn into the group, so unplayed entrants
    // still appear in the table.
    for m in matches {
        for id in [m.player1, m.player2].into_iter().flatten() {
            rows.entry(id).or_insert_with(|| blank(id));
        }
    }

    for m in matches.iter().filter(|m| m.status == MatchStatus::Finished) {
        let (Some(p1), Some(p2), Some(winner)) = (m.player1, m.player2, m.winner) else {
            continue;
        };
        let (sets1, sets2) = scoring::count_won_sets(&m.sets, &tournament.rules);
        let games1: u32 = m.sets.iter().map(|s| s.player1).sum();
        let games2: u32 = m.sets.iter().map(|s| s.player2).sum();

        for (id, won, sets_won, sets_lost, games_won, games_lost) in [
            (p1, winner == p1, sets1, sets2, games1, games2),
            (p2, winner == p2, sets2, sets1, games2, games1),
        ] {
            let r = rows.entry(id).or_insert_with(|| blank(id));
            r.played += 1;
            if won {
                r.wins += 1;
                r.points += policy.points_per_win;
            } else {
                r.losses += 1;
                r.points += policy.points_per_loss;
            }
            r.sets_won += sets_won;
            r.sets_lost += sets_lost;
            r.games_won += games_won;
            r.games_lost += games_lost;
        }
    }

    let mut out: Vec<StandingsRow> = rows.into_values().collect();
    out.sort_by(|a, b| {
        b.wins.cmp(&a.wins).then_with(|| match policy.tie_break {
            StandingsTieBreak::SetsThenGames => b
                .set_diff()
                .cmp(&a.set_diff())
                .then_with(|| b.game_diff().cmp(&a.game_diff())),
            StandingsTieBreak::GamesThenSets => b
                .game_diff()
                .cmp(&a.game_diff())
                .then_with(|| b.set_diff().cmp(&a.set_diff())),
        })
        .then_with(|| a.name.cmp(&b.name))
    });
    out
}
