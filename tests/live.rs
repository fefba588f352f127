use tennis_tournament_web::live::{LiveHub, LiveScoreView, MatchMessageKind, Session, TournamentMessage};
use tennis_tournament_web::{Match, SetScore, Tournament, TournamentRules};

fn fixture() -> (Tournament, Match) {
    let mut t = Tournament::new("Test Open", TournamentRules::default()).unwrap();
    t.add_player("Alice").unwrap();
    t.add_player("Bob").unwrap();
    let (a, b) = (t.players[0].id, t.players[1].id);
    let m = Match::with_players("Final", a, b);
    t.matches.push(m.clone());
    (t, m)
}

fn provisional(pairs: &[(u32, u32)]) -> Vec<SetScore> {
    pairs.iter().map(|&(a, b)| SetScore::new(a, b)).collect()
}

#[tokio::test]
async fn match_messages_carry_increasing_sequence_numbers() {
    let hub = LiveHub::new();
    let (_t, game) = fixture();
    let mut sub = hub.subscribe_match(game.id);

    hub.publish_provisional(game.id, provisional(&[(1, 0)]));
    hub.publish_provisional(game.id, provisional(&[(2, 0)]));

    let first = sub.recv().await.unwrap();
    let second = sub.recv().await.unwrap();
    assert_eq!(first.seq, 1);
    assert_eq!(second.seq, 2);
    assert!(matches!(first.kind, MatchMessageKind::Provisional { .. }));
}

#[tokio::test]
async fn confirmed_beats_provisional_regardless_of_apply_order() {
    let hub = LiveHub::new();
    let (t, mut game) = fixture();
    let mut sub = hub.subscribe_match(game.id);

    hub.publish_provisional(game.id, provisional(&[(5, 4)]));
    game.sets = provisional(&[(6, 4)]);
    hub.publish_match_update(t.id, &game);

    let stale = sub.recv().await.unwrap();
    let confirmed = sub.recv().await.unwrap();

    // The viewer applies them in reverse delivery order; the confirmed
    // snapshot still wins because its seq is higher.
    let mut view = LiveScoreView::new();
    view.apply(confirmed);
    view.apply(stale);
    assert!(!view.is_live());
    assert_eq!(view.sets(), provisional(&[(6, 4)]).as_slice());
    assert_eq!(view.confirmed().map(|g| g.id), Some(game.id));
}

#[tokio::test]
async fn newer_provisional_overlays_the_confirmed_snapshot() {
    let hub = LiveHub::new();
    let (t, mut game) = fixture();
    let mut sub = hub.subscribe_match(game.id);

    game.sets = provisional(&[(6, 4)]);
    hub.publish_match_update(t.id, &game);
    hub.publish_provisional(game.id, provisional(&[(6, 4), (1, 0)]));

    let mut view = LiveScoreView::new();
    view.apply(sub.recv().await.unwrap());
    view.apply(sub.recv().await.unwrap());
    assert!(view.is_live());
    assert_eq!(view.sets(), provisional(&[(6, 4), (1, 0)]).as_slice());
    // The confirmed snapshot is retained underneath the overlay.
    assert_eq!(view.confirmed().map(|g| g.id), Some(game.id));
}

#[tokio::test]
async fn snapshot_seeded_view_accepts_any_live_message() {
    let (_t, mut game) = fixture();
    game.sets = provisional(&[(3, 2)]);
    let view = LiveScoreView::with_snapshot(game.clone());
    assert_eq!(view.sets(), provisional(&[(3, 2)]).as_slice());
    assert!(!view.is_live());
}

#[tokio::test]
async fn dropping_the_last_subscription_releases_the_topic() {
    let hub = LiveHub::new();
    let (_t, game) = fixture();

    let mut sub1 = hub.subscribe_match(game.id);
    hub.publish_provisional(game.id, provisional(&[(1, 0)]));
    assert_eq!(sub1.recv().await.unwrap().seq, 1);
    drop(sub1);

    // The topic was removed, so a fresh subscription starts a new
    // sequence from 1.
    let mut sub2 = hub.subscribe_match(game.id);
    hub.publish_provisional(game.id, provisional(&[(2, 0)]));
    assert_eq!(sub2.recv().await.unwrap().seq, 1);
}

#[tokio::test]
async fn topic_survives_while_other_subscriptions_remain() {
    let hub = LiveHub::new();
    let (_t, game) = fixture();

    let mut sub1 = hub.subscribe_match(game.id);
    let sub2 = hub.subscribe_match(game.id);
    hub.publish_provisional(game.id, provisional(&[(1, 0)]));
    drop(sub2);
    hub.publish_provisional(game.id, provisional(&[(2, 0)]));

    assert_eq!(sub1.recv().await.unwrap().seq, 1);
    // The sequence continues: the topic was not recreated.
    assert_eq!(sub1.recv().await.unwrap().seq, 2);
}

#[tokio::test]
async fn publishing_without_subscribers_is_a_no_op() {
    let hub = LiveHub::new();
    let (t, game) = fixture();
    hub.publish_provisional(game.id, provisional(&[(1, 0)]));
    hub.publish_match_update(t.id, &game);
    hub.publish_standings_invalidated(t.id);
}

#[tokio::test]
async fn tournament_scope_fans_out_confirmed_changes() {
    let hub = LiveHub::new();
    let (t, mut game) = fixture();
    let mut sub = hub.subscribe_tournament(t.id);

    game.sets = provisional(&[(6, 4)]);
    hub.publish_match_update(t.id, &game);
    hub.publish_referee_change(t.id, game.id, None);
    hub.publish_standings_invalidated(t.id);

    assert!(matches!(
        sub.recv().await.unwrap(),
        TournamentMessage::MatchUpdated { .. }
    ));
    assert!(matches!(
        sub.recv().await.unwrap(),
        TournamentMessage::RefereeChanged { referee: None, .. }
    ));
    assert!(matches!(
        sub.recv().await.unwrap(),
        TournamentMessage::StandingsInvalidated
    ));
}

#[tokio::test]
async fn session_keeps_one_tournament_scope_and_many_match_scopes() {
    let hub = LiveHub::new();
    let (t, game) = fixture();
    let mut session = Session::connect(&hub);

    session.subscribe_tournament(t.id);
    hub.publish_standings_invalidated(t.id);
    // Re-subscribing to the same tournament keeps the scope: the buffered
    // message is still delivered.
    session.subscribe_tournament(t.id);
    let scope = session.tournament_scope_mut().unwrap();
    assert!(matches!(
        scope.recv().await.unwrap(),
        TournamentMessage::StandingsInvalidated
    ));

    session.subscribe_match(game.id);
    session.subscribe_match(game.id);
    assert_eq!(session.subscribed_matches().count(), 1);

    hub.publish_provisional(game.id, provisional(&[(1, 0)]));
    let scope = session.match_scope_mut(game.id).unwrap();
    assert_eq!(scope.recv().await.unwrap().seq, 1);

    session.unsubscribe_match(game.id);
    assert!(session.match_scope_mut(game.id).is_none());

    // Switching tournaments replaces the old scope.
    let other = Tournament::new("Other Open", TournamentRules::default()).unwrap();
    session.subscribe_tournament(other.id);
    let scope = session.tournament_scope_mut().unwrap();
    assert_eq!(scope.tournament_id(), other.id);
}
