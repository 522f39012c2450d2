use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use serde_json::json;

use wardrobe_api::api::{create_router, AppState};

fn create_test_server() -> TestServer {
    let state = AppState::new();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

async fn add_item(server: &TestServer, name: &str, category: &str, season: &str) -> serde_json::Value {
    let response = server
        .post("/api/clothes")
        .json(&json!({
            "item_name": name,
            "category": category,
            "season": season
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/api/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_and_get_item() {
    let server = create_test_server();

    let created = add_item(&server, "White T-shirt", "Top", "Summer").await;
    assert_eq!(created["item_name"], "White T-shirt");
    assert_eq!(created["category"], "Top");
    // No image on hand, so analysis falls back to a neutral gray
    assert_eq!(created["color_hex"], "#808080");
    assert_eq!(created["color_family"], "Neutrals");
    assert_eq!(created["formality"], "Casual");
    assert_eq!(created["analyzed"], true);

    let id = created["id"].as_str().unwrap();
    let response = server.get(&format!("/api/clothes/{id}")).await;
    response.assert_status_ok();
    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched["item_name"], "White T-shirt");
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let server = create_test_server();

    let response = server
        .post("/api/clothes")
        .json(&json!({
            "item_name": "   ",
            "category": "Top"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Item name is required");
}

#[tokio::test]
async fn test_list_items_with_filters() {
    let server = create_test_server();

    add_item(&server, "Blue Jeans", "Bottom", "All").await;
    add_item(&server, "Wool Sweater", "Top", "Winter").await;
    add_item(&server, "Linen Shirt", "Top", "Summer").await;

    let response = server.get("/api/clothes").await;
    response.assert_status_ok();
    let items: Vec<serde_json::Value> = response.json();
    assert_eq!(items.len(), 3);

    let response = server.get("/api/clothes?category=Top").await;
    let tops: Vec<serde_json::Value> = response.json();
    assert_eq!(tops.len(), 2);

    let response = server.get("/api/clothes?category=Top&season=Winter").await;
    let winter_tops: Vec<serde_json::Value> = response.json();
    assert_eq!(winter_tops.len(), 1);
    assert_eq!(winter_tops[0]["item_name"], "Wool Sweater");
}

#[tokio::test]
async fn test_delete_item() {
    let server = create_test_server();

    let created = add_item(&server, "Old Hoodie", "Top", "Winter").await;
    let id = created["id"].as_str().unwrap();

    let response = server.delete(&format!("/api/clothes/{id}")).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/clothes/{id}")).await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Item not found");
}

#[tokio::test]
async fn test_wear_item_sets_date() {
    let server = create_test_server();

    let created = add_item(&server, "Black Jeans", "Bottom", "All").await;
    let id = created["id"].as_str().unwrap();

    let response = server.patch(&format!("/api/clothes/{id}/wear")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["last_worn_date"].is_string());

    let response = server.get(&format!("/api/clothes/{id}")).await;
    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched["last_worn_date"], body["last_worn_date"]);
}

#[tokio::test]
async fn test_wear_unknown_item_not_found() {
    let server = create_test_server();
    let response = server
        .patch("/api/clothes/00000000-0000-0000-0000-000000000000/wear")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_outfit_matrix_empty_wardrobe() {
    let server = create_test_server();

    let response = server.get("/api/outfit/matrix").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No clothes found. Please add some items first.");
}

#[tokio::test]
async fn test_outfit_matrix_generates_recommendations() {
    let server = create_test_server();

    add_item(&server, "White T-shirt", "Top", "Summer").await;
    add_item(&server, "Beige Chino Shorts", "Bottom", "Summer").await;
    add_item(&server, "White Sneakers", "Shoes", "All").await;

    let response = server.get("/api/outfit/matrix").await;
    response.assert_status_ok();
    let matrix: serde_json::Value = response.json();

    let analysis = matrix["analysis"].as_array().unwrap();
    assert_eq!(analysis.len(), 3);
    for entry in analysis {
        assert_eq!(entry["season_suitability"], "Summer");
    }

    let recommendations = matrix["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    let first = &recommendations[0];
    assert_eq!(first["outfit_name"], "Summer Safe Bet");
    assert_eq!(first["season"], "Summer");
    assert!(first["items"]["top"].is_object());
    assert!(first["items"]["bottom"].is_object());
    assert!(first["visualization_prompt"]
        .as_str()
        .unwrap()
        .contains("photorealistic"));
}

#[tokio::test]
async fn test_outfit_matrix_winter_season_param() {
    let server = create_test_server();

    add_item(&server, "Wool Sweater", "Top", "Winter").await;
    add_item(&server, "Dark Jeans", "Bottom", "Winter").await;

    let response = server.get("/api/outfit/matrix?season=Winter").await;
    response.assert_status_ok();
    let matrix: serde_json::Value = response.json();
    let recommendations = matrix["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    assert_eq!(recommendations[0]["season"], "Winter");
}

#[tokio::test]
async fn test_outfit_matrix_unrecognized_season_defaults_to_summer() {
    let server = create_test_server();

    add_item(&server, "Linen Shirt", "Top", "Summer").await;
    add_item(&server, "Chino Shorts", "Bottom", "Summer").await;

    let response = server.get("/api/outfit/matrix?season=Autumn").await;
    response.assert_status_ok();
    let matrix: serde_json::Value = response.json();
    let recommendations = matrix["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    assert_eq!(recommendations[0]["season"], "Summer");
}

#[tokio::test]
async fn test_suggest_outfit() {
    let server = create_test_server();

    add_item(&server, "White T-shirt", "Top", "Summer").await;
    add_item(&server, "Blue Jeans", "Bottom", "All").await;
    add_item(&server, "White Sneakers", "Shoes", "All").await;

    let response = server.get("/api/outfit/suggest").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let outfit = body["outfit"].as_array().unwrap();
    assert!(!outfit.is_empty());
}

#[tokio::test]
async fn test_suggest_outfit_empty_wardrobe() {
    let server = create_test_server();
    let response = server.get("/api/outfit/suggest").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_and_list_outfits() {
    let server = create_test_server();

    let top = add_item(&server, "White T-shirt", "Top", "Summer").await;
    let bottom = add_item(&server, "Blue Jeans", "Bottom", "All").await;

    let response = server
        .post("/api/outfit/save")
        .json(&json!({
            "item_ids": [top["id"], bottom["id"]]
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let saved: serde_json::Value = response.json();
    assert!(saved["id"].is_string());

    let response = server.get("/api/outfit/saved").await;
    response.assert_status_ok();
    let outfits: Vec<serde_json::Value> = response.json();
    assert_eq!(outfits.len(), 1);
    let items = outfits[0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["item_name"], "White T-shirt");
}

#[tokio::test]
async fn test_save_outfit_requires_item_ids() {
    let server = create_test_server();

    let response = server
        .post("/api/outfit/save")
        .json(&json!({ "item_ids": [] }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Item IDs are required");
}

#[tokio::test]
async fn test_request_id_echoed_on_response() {
    let server = create_test_server();

    let response = server
        .get("/api/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("2b37e5a9-55d2-4d61-b2b2-9a1c7e8f0d43"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.headers().get("x-request-id"),
        Some(&HeaderValue::from_static(
            "2b37e5a9-55d2-4d61-b2b2-9a1c7e8f0d43"
        ))
    );
}
