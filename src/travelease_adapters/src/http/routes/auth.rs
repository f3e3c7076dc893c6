use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum::extract::rejection::JsonRejection;
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use travelease_application::AuthSession;
use travelease_core::{AuthToken, CredentialIssuer, DocumentStore, PasswordHasher, UserProfile};

use crate::http::{error::ApiError, extract::AuthenticatedUser, state::HttpState};

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub password: Option<Secret<String>>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    pub password: Option<Secret<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct SessionResponse {
    pub message: String,
    pub token: AuthToken,
    pub user: UserProfile,
}

impl SessionResponse {
    fn new(message: &str, session: AuthSession) -> Self {
        Self {
            message: message.to_owned(),
            token: session.token,
            user: session.user,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserProfile,
}

fn password_or_empty(password: Option<Secret<String>>) -> Secret<String> {
    password.unwrap_or_else(|| Secret::new(String::new()))
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, H, C>(
    State(state): State<HttpState<S, H, C>>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    let Json(request) = request?;

    let session = state
        .service
        .register_user(
            request.username,
            request.email,
            password_or_empty(request.password),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::new("User registered successfully", session)),
    ))
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, H, C>(
    State(state): State<HttpState<S, H, C>>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    let Json(request) = request?;

    let session = state
        .service
        .login_user(request.email, password_or_empty(request.password))
        .await?;

    Ok((
        StatusCode::OK,
        Json(SessionResponse::new("Login successful", session)),
    ))
}

#[tracing::instrument(name = "Current user", skip_all, fields(user_id = %user_id))]
pub async fn me<S, H, C>(
    State(state): State<HttpState<S, H, C>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> Result<Json<UserResponse>, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    let user = state.service.current_user(user_id).await?;
    Ok(Json(UserResponse { user }))
}
