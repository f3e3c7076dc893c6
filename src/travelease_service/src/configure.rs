use std::sync::Arc;

use reqwest::Client;
use secrecy::ExposeSecret;
use travelease_adapters::{
    JsonFileDocumentStore, JwtCredentials, MockWeatherProvider, OpenWeatherClient,
    config::{DatabaseSettings, JwtSettings, WeatherSettings, prod},
};
use travelease_core::{DocumentStoreError, WeatherProvider};

/// Open the JSON document at the configured path, seeding it on first run.
pub async fn configure_document_store(
    settings: &DatabaseSettings,
) -> Result<JsonFileDocumentStore, DocumentStoreError> {
    let store = JsonFileDocumentStore::new(&settings.path);
    store.initialize().await?;
    Ok(store)
}

pub fn configure_credentials(settings: &JwtSettings) -> JwtCredentials {
    JwtCredentials::new(settings.auth_config())
}

/// Pick the OpenWeather client when an API key is configured, the fixed
/// sample otherwise.
pub fn configure_weather_provider(
    settings: &WeatherSettings,
) -> Result<Arc<dyn WeatherProvider>, reqwest::Error> {
    match &settings.api_key {
        Some(api_key) if !api_key.expose_secret().is_empty() => {
            let http_client = Client::builder().timeout(prod::weather::TIMEOUT).build()?;
            Ok(Arc::new(OpenWeatherClient::new(
                settings.base_url.clone(),
                api_key.clone(),
                http_client,
            )))
        }
        _ => {
            tracing::warn!("No OpenWeather API key configured, serving sample weather");
            Ok(Arc::new(MockWeatherProvider))
        }
    }
}
