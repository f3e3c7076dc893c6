use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use travelease_core::{Coordinates, CredentialIssuer, DocumentStore, PasswordHasher, Weather};

use crate::http::{error::ApiError, state::HttpState};

#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl WeatherParams {
    fn coordinates(&self) -> Result<Coordinates, ApiError> {
        let parse = |raw: &Option<String>| raw.as_deref().and_then(|v| v.trim().parse::<f64>().ok());

        match (parse(&self.lat), parse(&self.lon)) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(ApiError::InvalidInput(
                "Latitude and longitude are required".to_owned(),
            )),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct WeatherResponse {
    pub weather: Weather,
}

#[tracing::instrument(name = "Weather", skip(state))]
pub async fn weather<S, H, C>(
    State(state): State<HttpState<S, H, C>>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherResponse>, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    let coordinates = params.coordinates()?;
    let weather = state.weather.current_weather(coordinates).await?;
    Ok(Json(WeatherResponse { weather }))
}
