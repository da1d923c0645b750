//! Integration tests for the meetings API.
//! Tests cover: seeded schedule, optional fields, ordering after sort-order
//! edits, and validation.

use fellowship_server::config::ContactConfig;
use fellowship_server::routes::build_router;
use fellowship_server::state::AppState;
use fellowship_server::store::ContentStore;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Helper: start the server on a random port with the given store.
async fn start_test_server(store: ContentStore) -> String {
    let state = AppState::new(
        store,
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

fn titles(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_seeded_meeting_schedule() {
    let base_url = start_test_server(ContentStore::seeded()).await;
    let client = reqwest::Client::new();

    let meetings = get_json(&client, format!("{}/api/meetings", base_url)).await;
    assert_eq!(
        titles(&meetings),
        vec![
            "Sunday Worship Service",
            "Wednesday Bible Study",
            "Friday Prayer Meeting"
        ]
    );
    assert_eq!(meetings[0]["day"], "Sunday");
    assert_eq!(meetings[0]["time"], "10:00 AM - 12:30 PM");
    assert_eq!(meetings[0]["location"], "Main Sanctuary");
}

#[tokio::test]
async fn test_create_meeting_without_optional_fields() {
    let base_url = start_test_server(ContentStore::empty()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/meetings", base_url))
        .json(&json!({
            "title": "Youth Fellowship",
            "day": "Saturday",
            "time": "4:00 PM - 5:30 PM",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let meeting: Value = resp.json().await.unwrap();

    assert_eq!(meeting["id"], 1);
    // Absent optionals are explicit nulls, not missing keys
    assert!(meeting.as_object().unwrap().contains_key("location"));
    assert!(meeting["location"].is_null());
    assert!(meeting["description"].is_null());
    assert_eq!(meeting["sortOrder"], 0);
    assert_eq!(meeting["isActive"], true);
}

#[tokio::test]
async fn test_create_meeting_requires_day_and_time() {
    let base_url = start_test_server(ContentStore::empty()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/meetings", base_url))
        .json(&json!({ "title": "Vigil", "day": "", "time": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid meeting data");
    assert_eq!(body["errors"]["day"][0], "Day is required");
    assert_eq!(body["errors"]["time"][0], "Time is required");
    assert!(body["errors"].get("title").is_none());

    let resp = client
        .post(format!("{}/api/meetings", base_url))
        .json(&json!({ "title": "Vigil", "day": "Friday", "time": "9 PM", "sortOrder": "first" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400, "Wrong field type is a schema violation");
}

#[tokio::test]
async fn test_ordering_follows_sort_order_edits() {
    let base_url = start_test_server(ContentStore::seeded()).await;
    let client = reqwest::Client::new();

    // Move Sunday after Friday
    let resp = client
        .put(format!("{}/api/meetings/1", base_url))
        .json(&json!({ "sortOrder": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // A new meeting tied with Wednesday lands after it
    client
        .post(format!("{}/api/meetings", base_url))
        .json(&json!({
            "title": "Wednesday Choir Practice",
            "day": "Wednesday",
            "time": "8:30 PM - 9:30 PM",
            "sortOrder": 2,
        }))
        .send()
        .await
        .unwrap();

    let meetings = get_json(&client, format!("{}/api/meetings", base_url)).await;
    assert_eq!(
        titles(&meetings),
        vec![
            "Wednesday Bible Study",
            "Wednesday Choir Practice",
            "Friday Prayer Meeting",
            "Sunday Worship Service"
        ]
    );
}

#[tokio::test]
async fn test_update_meeting_location_and_deactivate() {
    let base_url = start_test_server(ContentStore::seeded()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{}/api/meetings/3", base_url))
        .json(&json!({ "location": "Main Sanctuary", "isActive": false }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["location"], "Main Sanctuary");
    assert_eq!(updated["title"], "Friday Prayer Meeting");
    assert_eq!(updated["isActive"], false);

    let active = get_json(&client, format!("{}/api/meetings/active", base_url)).await;
    assert_eq!(
        titles(&active),
        vec!["Sunday Worship Service", "Wednesday Bible Study"]
    );
}

#[tokio::test]
async fn test_meeting_not_found_and_invalid_id() {
    let base_url = start_test_server(ContentStore::empty()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/meetings/1", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Meeting not found");

    let resp = client
        .delete(format!("{}/api/meetings/sunday", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid meeting ID");
}
