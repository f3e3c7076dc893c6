use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use travelease_core::{CredentialIssuer, Destination, DocumentStore, PasswordHasher};

use super::destinations::parse_destination_id;
use crate::http::{error::ApiError, extract::AuthenticatedUser, state::HttpState};

#[derive(Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Destination>,
}

#[derive(Serialize, Deserialize)]
pub struct FavoriteAddedResponse {
    pub message: String,
    pub destination: Destination,
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[tracing::instrument(name = "List favorites", skip_all, fields(user_id = %user_id))]
pub async fn list_favorites<S, H, C>(
    State(state): State<HttpState<S, H, C>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> Result<Json<FavoritesResponse>, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    let favorites = state.service.list_favorites(user_id).await?;
    Ok(Json(FavoritesResponse { favorites }))
}

#[tracing::instrument(name = "Add favorite", skip_all, fields(user_id = %user_id))]
pub async fn add_favorite<S, H, C>(
    State(state): State<HttpState<S, H, C>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(destination_id): Path<String>,
) -> Result<Json<FavoriteAddedResponse>, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    let destination_id = parse_destination_id(&destination_id)?;
    let destination = state.service.add_favorite(user_id, destination_id).await?;

    Ok(Json(FavoriteAddedResponse {
        message: "Added to favorites".to_owned(),
        destination,
    }))
}

#[tracing::instrument(name = "Remove favorite", skip_all, fields(user_id = %user_id))]
pub async fn remove_favorite<S, H, C>(
    State(state): State<HttpState<S, H, C>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(destination_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    let destination_id = parse_destination_id(&destination_id)?;
    state
        .service
        .remove_favorite(user_id, destination_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Removed from favorites".to_owned(),
    }))
}
