use serde_json::Value;

use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn index_lists_the_endpoints() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "TravelEase API is running!");
    assert!(body["endpoints"]["favorites"].is_object());
}

#[tokio::test]
async fn lists_the_seeded_catalog() {
    let app = TestApp::new().await;

    let response = app.get("/api/destinations").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let destinations = body["destinations"].as_array().unwrap();
    assert_eq!(destinations.len(), 10);
    assert_eq!(destinations[0]["name"], "Paris");
}

#[tokio::test]
async fn search_filters_case_insensitively() {
    let app = TestApp::new().await;

    for (term, expected) in [("tokyo", "Tokyo"), ("FRANCE", "Paris")] {
        let response = app.get(&format!("/api/destinations?search={term}")).await;
        let body: Value = response.json().await.unwrap();
        let destinations = body["destinations"].as_array().unwrap();

        assert_eq!(destinations.len(), 1, "Failed for term: {term}");
        assert_eq!(destinations[0]["name"], expected);
    }
}

#[tokio::test]
async fn get_destination_by_id() {
    let app = TestApp::new().await;

    let response = app.get("/api/destinations/2").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["destination"]["name"], "Tokyo");
    assert_eq!(body["destination"]["country"], "Japan");
}

#[tokio::test]
async fn unknown_destination_returns_404() {
    let app = TestApp::new().await;

    for path in ["/api/destinations/11", "/api/destinations/atlantis"] {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 404, "Failed for path: {path}");
        assert_eq!(error_message(response).await, "Destination not found");
    }
}
