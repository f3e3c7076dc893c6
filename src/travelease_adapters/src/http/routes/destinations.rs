use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use travelease_core::{
    CredentialIssuer, Destination, DestinationId, DocumentStore, PasswordHasher,
};

use crate::http::{error::ApiError, state::HttpState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DestinationsResponse {
    pub destinations: Vec<Destination>,
}

#[derive(Serialize, Deserialize)]
pub struct DestinationResponse {
    pub destination: Destination,
}

/// Path ids that are not integers cannot name a destination.
pub(crate) fn parse_destination_id(raw: &str) -> Result<DestinationId, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map(DestinationId::new)
        .map_err(|_| ApiError::NotFound("Destination not found".to_owned()))
}

#[tracing::instrument(name = "List destinations", skip(state))]
pub async fn list_destinations<S, H, C>(
    State(state): State<HttpState<S, H, C>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<DestinationsResponse>, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    let destinations = match params.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => state.service.search_destinations(term).await?,
        _ => state.service.list_destinations().await?,
    };

    Ok(Json(DestinationsResponse { destinations }))
}

#[tracing::instrument(name = "Get destination", skip(state))]
pub async fn get_destination<S, H, C>(
    State(state): State<HttpState<S, H, C>>,
    Path(id): Path<String>,
) -> Result<Json<DestinationResponse>, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    let id = parse_destination_id(&id)?;
    let destination = state.service.get_destination(id).await?;
    Ok(Json(DestinationResponse { destination }))
}
