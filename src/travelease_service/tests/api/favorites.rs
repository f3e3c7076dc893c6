use serde_json::Value;
use tokio::task::JoinSet;

use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn favorite_lifecycle() {
    let app = TestApp::new().await;
    let token = app.register_user("a", "a@x.com", "secret1").await;

    let added = app.post_favorite("3", &token).await;
    assert_eq!(added.status().as_u16(), 200);
    let body: Value = added.json().await.unwrap();
    assert_eq!(body["message"], "Added to favorites");
    assert_eq!(body["destination"]["name"], "New York");

    let duplicate = app.post_favorite("3", &token).await;
    assert_eq!(duplicate.status().as_u16(), 409);
    assert_eq!(error_message(duplicate).await, "Already in favorites");

    let listed: Value = app
        .get_with_token("/api/favorites", &token)
        .await
        .json()
        .await
        .unwrap();
    let favorites = listed["favorites"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"], 3);

    let removed = app.delete_favorite("3", &token).await;
    assert_eq!(removed.status().as_u16(), 200);

    let removed_again = app.delete_favorite("3", &token).await;
    assert_eq!(removed_again.status().as_u16(), 404);
    assert_eq!(error_message(removed_again).await, "Favorite not found");
}

#[tokio::test]
async fn favorites_are_per_user() {
    let app = TestApp::new().await;
    let alice = app.register_user("alice", "alice@x.com", "secret1").await;
    let bob = app.register_user("bob", "bob@x.com", "secret1").await;

    app.post_favorite("1", &alice).await;

    let bobs: Value = app
        .get_with_token("/api/favorites", &bob)
        .await
        .json()
        .await
        .unwrap();
    assert!(bobs["favorites"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_destination_cannot_be_favorited() {
    let app = TestApp::new().await;
    let token = app.register_user("a", "a@x.com", "secret1").await;

    let response = app.post_favorite("404", &token).await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "Destination not found");
}

#[tokio::test]
async fn favorites_require_a_token() {
    let app = TestApp::new().await;

    let list = app.get("/api/favorites").await;
    let add = app
        .http_client
        .post(format!("{}/api/favorites/1", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(list.status().as_u16(), 401);
    assert_eq!(add.status().as_u16(), 401);
    assert_eq!(error_message(add).await, "No token provided");
}

#[tokio::test]
async fn concurrent_adds_store_a_single_favorite() {
    let app = TestApp::new().await;
    let token = app.register_user("a", "a@x.com", "secret1").await;

    let mut requests = JoinSet::new();
    for _ in 0..8 {
        let client = app.http_client.clone();
        let url = format!("{}/api/favorites/5", app.address);
        let token = token.clone();
        requests.spawn(async move {
            client
                .post(url)
                .bearer_auth(token)
                .send()
                .await
                .unwrap()
                .status()
                .as_u16()
        });
    }
    let statuses = requests.join_all().await;

    assert_eq!(statuses.iter().filter(|s| **s == 200).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == 409).count(), 7);

    let listed: Value = app
        .get_with_token("/api/favorites", &token)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(listed["favorites"].as_array().unwrap().len(), 1);
}
