use tennis_tournament_web::logic::standings::StandingsTieBreak;
use tennis_tournament_web::{
    commit_score, group_standings, Match, ScoreCommit, SetScore, StandingsPolicy, Tournament,
    TournamentRules,
};

fn sets(pairs: &[(u32, u32)]) -> Vec<SetScore> {
    pairs.iter().map(|&(a, b)| SetScore::new(a, b)).collect()
}

/// Three players in one group; Alice beats Bob, Bob beats Carol, the
/// Alice-Carol match is still open.
fn group_fixture() -> Tournament {
    let mut t = Tournament::new("Test Open", TournamentRules::default()).unwrap();
    t.add_player("Alice").unwrap();
    t.add_player("Bob").unwrap();
    t.add_player("Carol").unwrap();
    let (a, b, c) = (t.players[0].id, t.players[1].id, t.players[2].id);
    t.matches.push(Match::with_players("Group A", a, b));
    t.matches.push(Match::with_players("Group A", b, c));
    t.matches.push(Match::with_players("Group A", a, c));
    let (m1, m2) = (t.matches[0].id, t.matches[1].id);
    commit_score(&mut t, m1, ScoreCommit::Played(sets(&[(6, 4), (6, 4)]))).unwrap();
    commit_score(&mut t, m2, ScoreCommit::Played(sets(&[(7, 6), (6, 3)]))).unwrap();
    t
}

#[test]
fn standings_aggregate_finished_matches_only() {
    let t = group_fixture();
    let tables = group_standings(&t, &StandingsPolicy::default());
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].group, "Group A");

    let rows = &tables[0].rows;
    assert_eq!(rows.len(), 3);

    // Alice and Bob both have one win; Alice leads on set difference
    // (+2 against Bob's 0). Win = 2 points, loss = 1.
    assert_eq!(rows[0].name, "Alice");
    assert_eq!((rows[0].played, rows[0].wins, rows[0].losses), (1, 1, 0));
    assert_eq!(rows[0].points, 2);
    assert_eq!((rows[0].sets_won, rows[0].sets_lost), (2, 0));
    assert_eq!((rows[0].games_won, rows[0].games_lost), (12, 8));

    assert_eq!(rows[1].name, "Bob");
    assert_eq!((rows[1].played, rows[1].wins, rows[1].losses), (2, 1, 1));
    assert_eq!(rows[1].points, 3);

    assert_eq!(rows[2].name, "Carol");
    assert_eq!((rows[2].played, rows[2].wins, rows[2].losses), (1, 0, 1));
    assert_eq!(rows[2].points, 1);
}

#[test]
fn unplayed_entrants_still_appear_in_the_table() {
    let mut t = Tournament::new("Test Open", TournamentRules::default()).unwrap();
    t.add_player("Alice").unwrap();
    t.add_player("Bob").unwrap();
    let (a, b) = (t.players[0].id, t.players[1].id);
    t.matches.push(Match::with_players("Group A", a, b));

    let tables = group_standings(&t, &StandingsPolicy::default());
    assert_eq!(tables[0].rows.len(), 2);
    assert!(tables[0].rows.iter().all(|r| r.played == 0 && r.points == 0));
}

#[test]
fn tie_break_policy_changes_the_ordering() {
    let mut t = Tournament::new("Test Open", TournamentRules::default()).unwrap();
    t.add_player("Ann").unwrap();
    t.add_player("Beth").unwrap();
    t.add_player("Cleo").unwrap();
    t.add_player("Dana").unwrap();
    let (a, b, c, d) = (
        t.players[0].id,
        t.players[1].id,
        t.players[2].id,
        t.players[3].id,
    );
    // One win each: Ann takes hers in three lopsided sets (games +6,
    // sets +1), Cleo in two tight tie-breaks (games +2, sets +2).
    t.matches.push(Match::with_players("Group A", a, b));
    t.matches.push(Match::with_players("Group A", c, d));
    let (m1, m2) = (t.matches[0].id, t.matches[1].id);
    commit_score(
        &mut t,
        m1,
        ScoreCommit::Played(sets(&[(6, 0), (0, 6), (6, 0)])),
    )
    .unwrap();
    commit_score(&mut t, m2, ScoreCommit::Played(sets(&[(7, 6), (7, 6)]))).unwrap();

    let by_sets = group_standings(&t, &StandingsPolicy::default());
    assert_eq!(by_sets[0].rows[0].name, "Cleo");
    assert_eq!(by_sets[0].rows[1].name, "Ann");

    let policy = StandingsPolicy {
        tie_break: StandingsTieBreak::GamesThenSets,
        ..StandingsPolicy::default()
    };
    let by_games = group_standings(&t, &policy);
    assert_eq!(by_games[0].rows[0].name, "Ann");
    assert_eq!(by_games[0].rows[1].name, "Cleo");
}

#[test]
fn knockout_matches_never_reach_the_tables() {
    let mut t = group_fixture();
    let (a, b) = (t.players[0].id, t.players[1].id);
    t.matches.push(Match::with_players("Final", a, b));
    let final_id = t.matches.last().map(|m| m.id).unwrap();
    commit_score(&mut t, final_id, ScoreCommit::Played(sets(&[(6, 0), (6, 0)]))).unwrap();

    let tables = group_standings(&t, &StandingsPolicy::default());
    assert_eq!(tables.len(), 1);
    let alice = &tables[0].rows[0];
    assert_eq!(alice.played, 1);
}
