mod configure;
mod tracing;
mod travel_app;

pub use configure::{configure_credentials, configure_document_store, configure_weather_provider};
pub use travel_app::TravelApp;

// Re-export commonly used types
pub use travelease_adapters::config::{AllowedOrigins, AppSettings};
