use serde_json::Value;

use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn weather_returns_mock_conditions_without_api_key() {
    let app = TestApp::new().await;

    let response = app.get("/api/weather?lat=48.85&lon=2.35").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["weather"]["temp"], 22);
    assert_eq!(body["weather"]["description"], "Clear sky");
    assert_eq!(body["weather"]["humidity"], 65);
}

#[tokio::test]
async fn weather_requires_both_coordinates() {
    let app = TestApp::new().await;

    for path in [
        "/api/weather?lon=2.35",
        "/api/weather?lat=48.85",
        "/api/weather?lat=north&lon=2.35",
    ] {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for path: {path}");
        assert_eq!(
            error_message(response).await,
            "Latitude and longitude are required"
        );
    }
}
