//! Integration tests for the CMS content block API.
//! Tests cover: seeded page sections, lookup by type, create defaults,
//! partial updates, and the health check.

use fellowship_server::config::ContactConfig;
use fellowship_server::routes::build_router;
use fellowship_server::state::AppState;
use fellowship_server::store::ContentStore;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Helper: start the server on a random port with a freshly seeded store.
async fn start_test_server() -> String {
    let state = AppState::new(
        ContentStore::seeded(),
        ContactConfig {
            rate_limit_enabled: false,
            ..Default::default()
        },
    );
    let app = build_router(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    format!("http://{}", addr)
}

async fn get_json(client: &reqwest::Client, url: String) -> Value {
    client.get(url).send().await.unwrap().json().await.unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_seeded_content_blocks() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let blocks = get_json(&client, format!("{}/api/cms/content", base_url)).await;
    let types: Vec<&str> = blocks
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["hero", "pastor_message", "scripture_banner"]);

    let hero = &blocks[0];
    assert_eq!(hero["title"], "ALMIGHTY GOD WORSHIP CHURCH");
    assert_eq!(hero["buttonLink"], "#meetings");

    let banner = &blocks[2];
    assert_eq!(banner["subtitle"], "John 14:6");
    assert_eq!(banner["title"], "");
    assert!(banner["buttonText"].is_null());
}

#[tokio::test]
async fn test_content_by_type() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let heroes = get_json(&client, format!("{}/api/cms/content/type/hero", base_url)).await;
    assert_eq!(heroes.as_array().unwrap().len(), 1);
    assert_eq!(heroes[0]["type"], "hero");

    // Unknown type is an empty list, not a 404
    let resp = client
        .get(format!("{}/api/cms/content/type/footer", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_item_path_lists_by_type_when_not_numeric() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/cms/content/hero", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let heroes: Value = resp.json().await.unwrap();
    assert_eq!(heroes.as_array().unwrap().len(), 1);
    assert_eq!(heroes[0]["id"], 1);
    assert_eq!(heroes[0]["type"], "hero");

    let resp = client
        .get(format!("{}/api/cms/content/footer", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));

    // Numeric segments are still id lookups
    let block = get_json(&client, format!("{}/api/cms/content/2", base_url)).await;
    assert_eq!(block["type"], "pastor_message");
}

#[tokio::test]
async fn test_non_numeric_id_rejected_on_update_and_delete() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{}/api/cms/content/hero", base_url))
        .json(&json!({ "title": "Welcome" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid content ID");

    let resp = client
        .delete(format!("{}/api/cms/content/hero", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let heroes = get_json(&client, format!("{}/api/cms/content/hero", base_url)).await;
    assert_eq!(heroes[0]["title"], "ALMIGHTY GOD WORSHIP CHURCH");
}

#[tokio::test]
async fn test_create_block_and_find_it_by_type() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/cms/content", base_url))
        .json(&json!({
            "type": "footer",
            "content": "Bible College Junction, Puthencruz",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let block: Value = resp.json().await.unwrap();
    assert_eq!(block["id"], 4);
    assert_eq!(block["type"], "footer");
    assert!(block["title"].is_null());
    assert!(block["imageUrl"].is_null());
    assert_eq!(block["sortOrder"], 0);
    assert_eq!(block["isActive"], true);

    let footers = get_json(&client, format!("{}/api/cms/content/type/footer", base_url)).await;
    assert_eq!(footers.as_array().unwrap().len(), 1);

    // Deactivated blocks drop out of the by-type listing
    client
        .put(format!("{}/api/cms/content/4", base_url))
        .json(&json!({ "isActive": false }))
        .send()
        .await
        .unwrap();
    let footers = get_json(&client, format!("{}/api/cms/content/type/footer", base_url)).await;
    assert_eq!(footers, json!([]));

    let active = get_json(&client, format!("{}/api/cms/content/active", base_url)).await;
    assert_eq!(active.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_block_requires_type() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/cms/content", base_url))
        .json(&json!({ "title": "Untyped" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid content data");

    let resp = client
        .post(format!("{}/api/cms/content", base_url))
        .json(&json!({ "type": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["errors"]["type"][0], "Type is required");
}

#[tokio::test]
async fn test_update_hero_text() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{}/api/cms/content/1", base_url))
        .json(&json!({ "title": "ALMIGHTY GOD FELLOWSHIP", "imageUrl": "/church-building.jpg" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let hero: Value = resp.json().await.unwrap();
    assert_eq!(hero["title"], "ALMIGHTY GOD FELLOWSHIP");
    assert_eq!(hero["imageUrl"], "/church-building.jpg");
    assert_eq!(hero["buttonText"], "Join Our Worship");
    assert_eq!(hero["type"], "hero");
}

#[tokio::test]
async fn test_content_not_found_and_delete() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/cms/content/42", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Content not found");

    let resp = client
        .delete(format!("{}/api/cms/content/3", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let banners = get_json(
        &client,
        format!("{}/api/cms/content/type/scripture_banner", base_url),
    )
    .await;
    assert_eq!(banners, json!([]));
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/cms/content", base_url))
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid content data");
    assert!(body["errors"]["body"][0].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let base_url = start_test_server().await;
    let resp = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}
