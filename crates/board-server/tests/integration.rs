use axum::http::StatusCode;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Send a GET request via `oneshot` and return (status, raw body).
async fn get_raw(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get_raw(app, uri).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn app(dir: &TempDir) -> axum::Router {
    board_server::build_router(dir.path().to_path_buf())
}

fn init_with(dir: &TempDir, mutate: impl FnOnce(&mut board_core::config::Config)) {
    let mut config = board_core::config::Config::new("Test Board");
    mutate(&mut config);
    config.save(dir.path()).unwrap();
}

// ---------------------------------------------------------------------------
// /api/stats and /api/stages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stats_for_all_characters() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(app(&dir), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stats"]["filter"], "all");
    assert_eq!(json["stats"]["total_items"], 56);
    assert_eq!(json["stats"]["progress"], 27);
    assert_eq!(json["shares"][3]["status"], "todo");
    assert_eq!(json["shares"][3]["count"], 25);
}

#[tokio::test]
async fn stats_filtered_by_priority() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(app(&dir), "/api/stats?priority=p1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stats"]["total_characters"], 3);
    assert_eq!(json["stats"]["progress"], 17);
}

#[tokio::test]
async fn invalid_priority_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(app(&dir), "/api/stats?priority=p9").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("p9"));
}

#[tokio::test]
async fn configured_default_priority_applies() {
    let dir = TempDir::new().unwrap();
    init_with(&dir, |c| {
        c.display.default_priority = "p2".parse().unwrap();
    });
    let (status, json) = get(app(&dir), "/api/stages").await;
    assert_eq!(status, StatusCode::OK);
    let stages = json.as_array().unwrap();
    assert_eq!(stages.len(), 4);
    assert!(stages
        .iter()
        .all(|s| s["revision"] == 0 && s["doing"] == 0));

    let (_, json) = get(app(&dir), "/api/stats?priority=all").await;
    assert_eq!(json["stats"]["total_characters"], 14);
}

// ---------------------------------------------------------------------------
// /api/characters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn characters_sorted_and_reversed() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(app(&dir), "/api/characters?sort=id&reverse=true").await;
    assert_eq!(status, StatusCode::OK);
    let characters = json["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 14);
    assert_eq!(characters[0]["id"], "1015");
    assert_eq!(characters[13]["id"], "1001");
}

#[tokio::test]
async fn characters_reject_unknown_sort() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(app(&dir), "/api/characters?sort=height").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("height"));
}

#[tokio::test]
async fn characters_reject_non_boolean_reverse() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(app(&dir), "/api/characters?reverse=yes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "invalid flag value 'yes': expected true or false"
    );

    let (status, _) = get_raw(app(&dir), "/?view=list&reverse=yes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn single_character_and_not_found() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(app(&dir), "/api/characters/1002").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "艾琳");
    assert_eq!(json["spine_anim"], "doing");
    assert_eq!(json["progress"], 75);

    let (status, json) = get(app(&dir), "/api/characters/0000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "character not found: 0000");
}

// ---------------------------------------------------------------------------
// /api/config
// ---------------------------------------------------------------------------

#[tokio::test]
async fn config_reflects_saved_file() {
    let dir = TempDir::new().unwrap();
    let (_, json) = get(app(&dir), "/api/config").await;
    assert_eq!(json["project"]["name"], "Project Gio");

    init_with(&dir, |_| {});
    let (status, json) = get(app(&dir), "/api/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["project"]["name"], "Test Board");
    assert_eq!(json["display"]["default_view"], "dashboard");
}

// ---------------------------------------------------------------------------
// HTML page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_renders_dashboard_by_default() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get_raw(app(&dir), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Character asset board"));
    assert!(body.contains("id=\"completion\""));
    assert!(body.contains("<svg"));
}

#[tokio::test]
async fn index_renders_list_in_chinese() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get_raw(app(&dir), "/?view=list&priority=p0&locale=zh").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("角色信息"));
    assert_eq!(body.matches("<tr data-id=").count(), 10);
}

#[tokio::test]
async fn index_rejects_unknown_view() {
    let dir = TempDir::new().unwrap();
    let (status, _) = get_raw(app(&dir), "/?view=kanban").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
