use std::sync::Arc;

use reqwest::{Client, Response};
use secrecy::Secret;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use travelease_adapters::{
    Argon2PasswordHasher, InMemoryDocumentStore, JwtAuthConfig, JwtCredentials,
    MockWeatherProvider, config::test,
};
use travelease_application::TravelService;
use travelease_service::TravelApp;

pub const JWT_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let credentials = JwtCredentials::new(JwtAuthConfig::new(Secret::from(
            JWT_SECRET.to_owned(),
        )));
        let service = TravelService::new(
            InMemoryDocumentStore::default(),
            Argon2PasswordHasher,
            credentials,
        );
        let app = TravelApp::new(service, Arc::new(MockWeatherProvider));

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(app.run_standalone(listener, None));

        Self {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> Response {
        self.http_client
            .get(format!("{}{}", self.address, path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_register(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/api/auth/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/api/auth/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_favorite(&self, destination_id: &str, token: &str) -> Response {
        self.http_client
            .post(format!("{}/api/favorites/{}", self.address, destination_id))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_favorite(&self, destination_id: &str, token: &str) -> Response {
        self.http_client
            .delete(format!("{}/api/favorites/{}", self.address, destination_id))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Registers a user and returns its bearer token.
    pub async fn register_user(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .post_register(&json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.unwrap();
        body["token"].as_str().unwrap().to_owned()
    }
}

pub async fn error_message(response: Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["error"].as_str().unwrap().to_owned()
}
