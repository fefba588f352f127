//! Single binary web server: REST API for tournament management plus SSE
//! streams for live score synchronization.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tennis_tournament_web::logic::rounds;
use tennis_tournament_web::{
    assign_referee, assign_referee_bulk, bracket_columns, commit_score, eligible_players,
    generate_group_stage, generate_knockout_skeleton, group_standings, record_score_edit,
    reset_group_stage, reset_knockout_from, seed_first_round, set_pairing, visible_rounds,
    LiveHub, MatchId, MatchOutcome, MatchStatus, PlayerId, ScoreCommit, SeedOptions, SetScore,
    StandingsPolicy, Tournament, TournamentError, TournamentId, TournamentRules,
};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    #[serde(default)]
    rules: TournamentRules,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct MatchesQuery {
    status: Option<MatchStatus>,
}

#[derive(Deserialize)]
struct GenerateGroupsBody {
    #[serde(default = "default_group_count")]
    groups: usize,
}

fn default_group_count() -> usize {
    2
}

#[derive(Deserialize)]
struct SeedBody {
    #[serde(default)]
    avoid_same_group: bool,
}

#[derive(Deserialize)]
struct ResetKnockoutBody {
    /// Stage label, canonical or legacy ("Quarterfinal", "Ćwierćfinał", "1/8 finału").
    from: String,
}

#[derive(Deserialize)]
struct ResetGroupsBody {
    #[serde(default)]
    also_knockout: bool,
}

#[derive(Deserialize)]
struct ScoreCommitBody {
    sets: Option<Vec<SetScore>>,
    outcome: Option<MatchOutcome>,
    winner_id: Option<PlayerId>,
}

#[derive(Deserialize)]
struct LiveEditBody {
    sets: Vec<SetScore>,
}

#[derive(Deserialize)]
struct PairingBody {
    player1_id: Option<PlayerId>,
    player2_id: Option<PlayerId>,
}

#[derive(Deserialize)]
struct RefereeBody {
    referee_id: Option<PlayerId>,
}

#[derive(Deserialize)]
struct BulkRefereeBody {
    match_ids: Vec<MatchId>,
    referee_id: Option<PlayerId>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and player id.
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: PlayerId,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn error_json(e: &TournamentError) -> serde_json::Value {
    serde_json::json!({ "error": e.to_string() })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tennis-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let tournament = match Tournament::new(body.name.trim(), body.rules) {
        Ok(t) => t,
        Err(e) => return HttpResponse::BadRequest().json(error_json(&e)),
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Add an entrant (before the schedule exists).
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.add_player(body.name.trim()) {
        Ok(_) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Remove an entrant (before the schedule exists).
#[delete("/api/tournaments/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<TournamentPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.remove_player(path.player_id) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Match list, optionally filtered by status.
#[get("/api/tournaments/{id}/matches")]
async fn api_list_matches(
    state: AppState,
    path: Path<TournamentPath>,
    query: Query<MatchesQuery>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    HttpResponse::Ok().json(entry.tournament.matches_by_status(query.status))
}

/// Grouped match list for display (placeholder elimination rounds hidden).
#[get("/api/tournaments/{id}/rounds")]
async fn api_list_rounds(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    HttpResponse::Ok().json(visible_rounds(&entry.tournament.matches))
}

/// Generate the group stage plus the knockout skeleton.
#[post("/api/tournaments/{id}/structure/groups")]
async fn api_generate_groups(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentPath>,
    body: Json<GenerateGroupsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match generate_group_stage(&mut entry.tournament, body.groups) {
        Ok(created) => {
            hub.publish_standings_invalidated(path.id);
            hub.publish_bracket_invalidated(path.id);
            HttpResponse::Ok().json(serde_json::json!({ "created": created }))
        }
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Generate an empty knockout bracket sized for all entrants.
#[post("/api/tournaments/{id}/structure/knockout")]
async fn api_generate_knockout(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentPath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match generate_knockout_skeleton(&mut entry.tournament) {
        Ok(created) => {
            hub.publish_bracket_invalidated(path.id);
            HttpResponse::Ok().json(serde_json::json!({ "created": created }))
        }
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Seed the first elimination round.
#[post("/api/tournaments/{id}/structure/seed")]
async fn api_seed_knockout(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentPath>,
    body: Json<SeedBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let options = SeedOptions {
        avoid_same_group: body.avoid_same_group,
    };
    match seed_first_round(&mut entry.tournament, options) {
        Ok(report) => {
            hub.publish_bracket_invalidated(path.id);
            HttpResponse::Ok().json(report)
        }
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Reset the elimination bracket from a named stage forward.
#[post("/api/tournaments/{id}/structure/reset-knockout")]
async fn api_reset_knockout(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentPath>,
    body: Json<ResetKnockoutBody>,
) -> HttpResponse {
    let stage = match rounds::classify(&body.from) {
        Some(s) if s.is_elimination() => s,
        _ => {
            return HttpResponse::BadRequest()
                .json(error_json(&TournamentError::UnknownStage(body.from.clone())))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match reset_knockout_from(&mut entry.tournament, stage) {
        Ok(cleared) => {
            hub.publish_bracket_invalidated(path.id);
            HttpResponse::Ok().json(serde_json::json!({ "cleared": cleared }))
        }
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Delete the group stage, optionally cascading into the knockout bracket.
#[post("/api/tournaments/{id}/structure/reset-groups")]
async fn api_reset_groups(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentPath>,
    body: Json<ResetGroupsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let cleared = reset_group_stage(&mut entry.tournament, body.also_knockout);
    hub.publish_standings_invalidated(path.id);
    if body.also_knockout {
        hub.publish_bracket_invalidated(path.id);
    }
    HttpResponse::Ok().json(serde_json::json!({ "cleared": cleared }))
}

/// Commit an authoritative result: sets that decide the match, or an
/// administrative outcome with an explicit winner.
#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_commit_score(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreCommitBody>,
) -> HttpResponse {
    let body = body.into_inner();
    let commit = match (body.sets, body.outcome, body.winner_id) {
        (Some(sets), None, _) => ScoreCommit::Played(sets),
        (None, Some(outcome), Some(winner)) => ScoreCommit::Administrative { outcome, winner },
        _ => {
            return HttpResponse::BadRequest()
                .json(error_json(&TournamentError::InvalidState))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match commit_score(&mut entry.tournament, path.match_id, commit) {
        Ok(game) => {
            let game = game.clone();
            hub.publish_match_update(path.id, &game);
            hub.publish_status_change(path.id, game.id, game.status);
            match rounds::classify(&game.round) {
                Some(rounds::RoundStage::Group) => hub.publish_standings_invalidated(path.id),
                Some(_) => hub.publish_bracket_invalidated(path.id),
                None => {}
            }
            HttpResponse::Ok().json(game)
        }
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Provisional score edit: validated, mirrored to subscribers, not persisted.
#[post("/api/tournaments/{id}/matches/{match_id}/live")]
async fn api_live_edit(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentMatchPath>,
    body: Json<LiveEditBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match record_score_edit(&mut entry.tournament, path.match_id, body.sets.clone()) {
        Ok(edit) => {
            if edit.started {
                hub.publish_status_change(path.id, path.match_id, MatchStatus::InProgress);
            }
            hub.publish_provisional(path.match_id, edit.sets.clone());
            HttpResponse::Ok().json(serde_json::json!({
                "sets": edit.sets,
                "decided": edit.decided,
            }))
        }
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Manually pair an elimination slot.
#[put("/api/tournaments/{id}/matches/{match_id}/pairing")]
async fn api_set_pairing(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentMatchPath>,
    body: Json<PairingBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match set_pairing(
        &mut entry.tournament,
        path.match_id,
        body.player1_id,
        body.player2_id,
    ) {
        Ok(game) => {
            let game = game.clone();
            hub.publish_match_update(path.id, &game);
            hub.publish_bracket_invalidated(path.id);
            HttpResponse::Ok().json(game)
        }
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Entrants eligible for the given elimination slot.
#[get("/api/tournaments/{id}/matches/{match_id}/eligible")]
async fn api_eligible_players(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match eligible_players(&entry.tournament, path.match_id) {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Assign or clear the referee of one match.
#[put("/api/tournaments/{id}/matches/{match_id}/referee")]
async fn api_set_referee(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentMatchPath>,
    body: Json<RefereeBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match assign_referee(&mut entry.tournament, path.match_id, body.referee_id) {
        Ok(game) => {
            let game = game.clone();
            hub.publish_referee_change(path.id, game.id, game.referee);
            HttpResponse::Ok().json(game)
        }
        Err(e) => HttpResponse::BadRequest().json(error_json(&e)),
    }
}

/// Assign or clear the referee across a batch; conflicts are skipped per item.
#[put("/api/tournaments/{id}/referee/bulk")]
async fn api_set_referee_bulk(
    state: AppState,
    hub: Data<LiveHub>,
    path: Path<TournamentPath>,
    body: Json<BulkRefereeBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let report = assign_referee_bulk(&mut entry.tournament, &body.match_ids, body.referee_id);
    for match_id in &body.match_ids {
        if !report.skipped.contains(match_id) {
            hub.publish_referee_change(path.id, *match_id, body.referee_id);
        }
    }
    HttpResponse::Ok().json(report)
}

/// Group tables, ranked with the default policy.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    HttpResponse::Ok().json(group_standings(&entry.tournament, &StandingsPolicy::default()))
}

/// Bracket columns ordered by canonical stage.
#[get("/api/tournaments/{id}/bracket")]
async fn api_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    HttpResponse::Ok().json(bracket_columns(&entry.tournament.matches))
}

fn sse_response<S>(stream: S) -> HttpResponse
where
    S: futures_util::Stream<Item = Result<web::Bytes, actix_web::Error>> + 'static,
{
    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(stream)
}

fn sse_frame<T: serde::Serialize>(msg: &T) -> Option<web::Bytes> {
    let json = serde_json::to_string(msg).ok()?;
    Some(web::Bytes::from(format!("data: {}\n\n", json)))
}

/// Tournament-scope live stream. The subscription is released when the
/// client disconnects and the response stream is dropped.
#[get("/api/tournaments/{id}/events")]
async fn api_tournament_events(hub: Data<LiveHub>, path: Path<TournamentPath>) -> HttpResponse {
    let sub = hub.subscribe_tournament(path.id);
    let stream = futures_util::stream::unfold(sub, |mut sub| async move {
        let msg = sub.recv().await?;
        let frame = sse_frame(&msg)?;
        Some((Ok::<_, actix_web::Error>(frame), sub))
    });
    sse_response(stream)
}

/// Match-scope live stream (provisional + confirmed messages).
#[get("/api/tournaments/{id}/matches/{match_id}/events")]
async fn api_match_events(hub: Data<LiveHub>, path: Path<TournamentMatchPath>) -> HttpResponse {
    let sub = hub.subscribe_match(path.match_id);
    let stream = futures_util::stream::unfold(sub, |mut sub| async move {
        let msg = sub.recv().await?;
        let frame = sse_frame(&msg)?;
        Some((Ok::<_, actix_web::Error>(frame), sub))
    });
    sse_response(stream)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));
    let hub = Data::new(LiveHub::new());

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(hub.clone())
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_list_matches)
            .service(api_list_rounds)
            .service(api_generate_groups)
            .service(api_generate_knockout)
            .service(api_seed_knockout)
            .service(api_reset_knockout)
            .service(api_reset_groups)
            .service(api_commit_score)
            .service(api_live_edit)
            .service(api_set_pairing)
            .service(api_eligible_players)
            .service(api_set_referee)
            .service(api_set_referee_bulk)
            .service(api_standings)
            .service(api_bracket)
            .service(api_tournament_events)
            .service(api_match_events)
    })
    .bind(bind)?
    .run()
    .await
}
