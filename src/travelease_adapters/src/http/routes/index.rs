use axum::Json;
use serde_json::{Value, json};

/// Service banner with the endpoint index.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "TravelEase API is running!",
        "database": "JSON file",
        "endpoints": {
            "auth": {
                "register": "POST /api/auth/register",
                "login": "POST /api/auth/login",
                "me": "GET /api/auth/me"
            },
            "destinations": {
                "list": "GET /api/destinations",
                "single": "GET /api/destinations/:id"
            },
            "favorites": {
                "list": "GET /api/favorites",
                "add": "POST /api/favorites/:destinationId",
                "remove": "DELETE /api/favorites/:destinationId"
            },
            "weather": "GET /api/weather?lat=&lon="
        }
    }))
}
