pub mod auth;
pub mod config;
pub mod http;
pub mod persistence;
pub mod weather;

pub use auth::{
    Argon2PasswordHasher, BearerTokenValidator, JwtAuthConfig, JwtCredentials,
    extract_bearer_token,
};
pub use self::config::{AllowedOrigins, AppSettings};
pub use self::http::{ApiError, AuthenticatedUser, HttpState};
pub use persistence::{InMemoryDocumentStore, JsonFileDocumentStore};
pub use weather::{MockWeatherProvider, OpenWeatherClient};
