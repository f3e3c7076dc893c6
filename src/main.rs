use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use travelease::{
    AppSettings, Argon2PasswordHasher, TravelApp, TravelService, configure_credentials,
    configure_document_store, configure_weather_provider,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = AppSettings::load()?;

    // Create the store, seeding the document on first run
    let document_store = configure_document_store(&config.database).await?;
    tracing::info!(path = %config.database.path, "Document store ready");

    let credentials = configure_credentials(&config.auth.jwt);
    let weather_provider = configure_weather_provider(&config.weather)?;

    let service = TravelService::new(document_store, Argon2PasswordHasher, credentials);
    let app = TravelApp::new(service, weather_provider);

    let allowed_origins = config.auth.allowed_origins.clone();

    // Run as standalone server
    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    tracing::info!("Starting TravelEase...");

    app.run_standalone(listener, Some(allowed_origins)).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
