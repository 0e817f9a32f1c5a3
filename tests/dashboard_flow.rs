mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use tokio::sync::mpsc;

use common::{json, pump, MockServer, Reply};
use ctfdash::api::{EventKind, Id};
use ctfdash::state::{ModalKind, Route, Section};
use ctfdash::App;

fn event(id: u64, kind: &str) -> Value {
    json!({
        "id": id,
        "title": format!("event {}", id),
        "type": kind,
        "archived": false,
        "start": 1_700_000_000 + id,
        "finish": 1_700_100_000 + id,
        "users": []
    })
}

/// Backend with a signed-in PM, three CTFTime events, twenty custom events
/// and one channel-typed config key.
fn backend(join_fails: Arc<AtomicBool>) -> impl Fn(&Method, &str, &str) -> Reply + Send + Sync + 'static {
    move |method, path, query| match (method.as_str(), path) {
        ("GET", "/auth/me") => json(
            StatusCode::OK,
            json!({ "discord_id": 7, "status": "Available", "roles": ["pm"], "discord": { "id": 7, "name": "ops" } }),
        ),
        ("GET", "/auth/logout") => (StatusCode::OK, "text/html", String::new()),
        ("GET", "/event/ctftime") => json(StatusCode::OK, Value::Array((1..=3).map(|i| event(i, "ctftime")).collect())),
        ("GET", "/event/custom") if query.contains("before_id") => json(StatusCode::OK, json!([])),
        ("GET", "/event/custom") => json(StatusCode::OK, Value::Array((100..120).map(|i| event(i, "custom")).collect())),
        ("GET", "/event/1") => {
            let mut item = event(1, "ctftime");
            item["users"] = json!([{ "discord_id": 7 }]);
            json(StatusCode::OK, item)
        }
        ("PATCH", "/event/1/join") if join_fails.load(Ordering::SeqCst) => {
            json(StatusCode::CONFLICT, json!({ "message": "Already joined" }))
        }
        ("PATCH", "/event/1/join") => json(StatusCode::OK, json!({ "success": true, "message": "ok" })),
        ("POST", "/event/create_custom_event") => json(StatusCode::OK, json!({ "success": true, "message": "created" })),
        ("GET", "/guild/text_channels") => json(StatusCode::OK, json!([{ "id": 10, "name": "announcements" }])),
        ("GET", "/guild/categories") | ("GET", "/guild/roles") => json(StatusCode::OK, json!([])),
        ("GET", "/config") => json(
            StatusCode::OK,
            json!({
                "guild_id": 1,
                "guild_name": "ICEDTEA",
                "config": [
                    { "key": "ANNOUNCEMENT_CHANNEL_ID", "description": "Announcements", "message": "OK", "value": 10, "ok": true },
                    { "key": "TIMEZONE", "description": "Display timezone", "message": "OK", "value": "UTC", "ok": true }
                ]
            }),
        ),
        ("PATCH", p) if p.starts_with("/config/") => json(StatusCode::OK, json!({ "success": true, "message": "ok" })),
        _ => json(StatusCode::NOT_FOUND, json!({ "message": "not found" })),
    }
}

async fn signed_in(server: &MockServer) -> (App, mpsc::UnboundedReceiver<ctfdash::services::ApiCommand>) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(server.config(), tx);
    app.start();
    pump(&mut app, &mut rx, &server.client()).await;
    (app, rx)
}

#[tokio::test]
async fn test_session_check_lands_on_events() {
    let server = MockServer::start(backend(Arc::default())).await;
    let (app, _rx) = signed_in(&server).await;

    assert_eq!(app.session.route, Route::Dashboard);
    assert_eq!(app.ui.section, Section::Events);
    assert_eq!(app.session.signed_in_as().as_deref(), Some("ops"));
    assert_eq!(app.events.events.len(), 3);
    assert_eq!(app.events.channels.len(), 1);

    let list = server.requests().into_iter().find(|r| r.path == "/event/ctftime").unwrap();
    assert!(list.query.contains("archived=false"));
    assert!(list.query.contains("limit=20"));
}

#[tokio::test]
async fn test_full_custom_page_sets_cursor() {
    let server = MockServer::start(backend(Arc::default())).await;
    let (mut app, mut rx) = signed_in(&server).await;
    let client = server.client();

    let reload = app.events.set_kind(EventKind::Custom).unwrap();
    app.dispatch(reload);
    pump(&mut app, &mut rx, &client).await;

    assert_eq!(app.events.events.len(), 20);
    assert!(app.events.has_more);
    assert_eq!(app.events.cursor.as_ref().unwrap().before_id, Id::Num(119));

    app.move_event_selection(19);
    pump(&mut app, &mut rx, &client).await;
    let next = server.requests().into_iter().filter(|r| r.path == "/event/custom").last().unwrap();
    assert!(next.query.contains("before_id=119"));
    assert!(!next.query.contains("finish_before"));
    assert!(!app.events.has_more);
    assert_eq!(app.events.events.len(), 20);
}

#[tokio::test]
async fn test_confirmed_join_refetches_and_reports() {
    let join_fails = Arc::new(AtomicBool::new(false));
    let server = MockServer::start(backend(join_fails.clone())).await;
    let (mut app, mut rx) = signed_in(&server).await;
    let client = server.client();

    app.prompt_join();
    app.confirm_modal();
    pump(&mut app, &mut rx, &client).await;

    let modal = app.modal.current().unwrap();
    assert_eq!(modal.title, "Success");
    assert_eq!(modal.message, "Join request sent");
    assert_eq!(app.events.selected.as_ref().unwrap().users.len(), 1);
    assert_eq!(app.events.events[0].users.len(), 1);
    app.confirm_modal();

    join_fails.store(true, Ordering::SeqCst);
    app.prompt_join();
    app.confirm_modal();
    pump(&mut app, &mut rx, &client).await;
    let modal = app.modal.current().unwrap();
    assert_eq!(modal.title, "Failed");
    assert!(modal.message.starts_with("Already joined"));
}

#[tokio::test]
async fn test_channel_key_edits_through_picker() {
    let server = MockServer::start(backend(Arc::default())).await;
    let (mut app, mut rx) = signed_in(&server).await;
    let client = server.client();

    app.switch_section(Section::Config);
    pump(&mut app, &mut rx, &client).await;
    assert_eq!(app.guild_config.guild_name.as_deref(), Some("ICEDTEA"));

    let picker = app.guild_config.picker().unwrap();
    match &picker.kind {
        ModalKind::Select { options, .. } => {
            assert_eq!(options.len(), 2);
            assert_eq!(options[1].label, "announcements (10)");
        }
        other => panic!("expected a picker, got {:?}", other),
    }
    app.modal.open(picker);
    app.modal.current_mut().unwrap().select_offset(-1);
    app.confirm_modal();
    assert_eq!(app.guild_config.entries[0].draft, "");
    assert!(server.requests().iter().all(|r| r.method != Method::PATCH), "drafts stay local until saved");

    // Free-text keys have no picker; saving sends the coerced draft
    app.guild_config.select_offset(1);
    assert!(app.guild_config.picker().is_none());
    app.guild_config.begin_edit();
    "UTC".chars().for_each(|_| app.guild_config.pop_char());
    "3600".chars().for_each(|c| app.guild_config.push_char(c));
    app.save_config();
    pump(&mut app, &mut rx, &client).await;

    let patch = server.requests().into_iter().find(|r| r.method == Method::PATCH).unwrap();
    assert_eq!(patch.path, "/config/TIMEZONE");
    assert_eq!(serde_json::from_str::<Value>(&patch.body).unwrap(), json!({ "value": 3600 }));
    assert_eq!(app.modal.current().unwrap().message, "Config updated");
    assert_eq!(app.guild_config.entries[1].draft, "UTC", "list re-fetched after save");
}

#[tokio::test]
async fn test_create_custom_event_switches_kind() {
    let server = MockServer::start(backend(Arc::default())).await;
    let (mut app, mut rx) = signed_in(&server).await;
    let client = server.client();

    let reload = app.events.set_kind(EventKind::Custom).unwrap();
    app.dispatch(reload);
    pump(&mut app, &mut rx, &client).await;

    app.prompt_create_event();
    "Midnight Sun".chars().for_each(|c| app.modal.current_mut().unwrap().push_char(c));
    app.confirm_modal();
    pump(&mut app, &mut rx, &client).await;

    let create = server.requests().into_iter().find(|r| r.path == "/event/create_custom_event").unwrap();
    assert_eq!(serde_json::from_str::<Value>(&create.body).unwrap(), json!({ "title": "Midnight Sun" }));
    assert_eq!(app.modal.current().unwrap().message, "Custom event created");
    assert_eq!(app.events.kind, EventKind::Custom);
}

#[tokio::test]
async fn test_logout_calls_backend_and_drops_cookie() {
    let server = MockServer::start(backend(Arc::default())).await;
    let (mut app, mut rx) = signed_in(&server).await;

    app.logout();
    pump(&mut app, &mut rx, &server.client()).await;
    assert!(server.requests().iter().any(|r| r.path == "/auth/logout"));
    assert_eq!(app.session.route, Route::Root);
}
