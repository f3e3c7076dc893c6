use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File, Source};
use http::HeaderValue;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{
    ANY_ORIGIN, CONFIG_FILE, DEFAULT_DATABASE_PATH, DEFAULT_TOKEN_TTL_SECONDS,
    OPENWEATHER_API_KEY_PLACEHOLDER, env, prod,
};
use crate::auth::JwtAuthConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub weather: WeatherSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

impl JwtSettings {
    pub fn auth_config(&self) -> JwtAuthConfig {
        JwtAuthConfig {
            jwt_secret: self.secret.clone(),
            token_ttl_in_seconds: self.time_to_live,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    pub base_url: String,
    pub api_key: Option<Secret<String>>,
}

impl AppSettings {
    /// Loads `.env`, the optional `config/default.json` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is fine; real deployments set variables directly.
        let _ = dotenvy::dotenv();

        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_sources(File::with_name(CONFIG_FILE).required(false), vars)
    }

    /// Builds settings from an explicit file source and variable map.
    ///
    /// Precedence, lowest first: built-in defaults, `file`, prefixed nested
    /// variables, flat conventional variables.
    pub fn from_sources<S>(file: S, vars: HashMap<String, String>) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let flat = |name: &str| vars.get(name).filter(|v| !v.trim().is_empty()).cloned();

        let address = flat(env::PORT_ENV_VAR).map(|port| format!("0.0.0.0:{}", port.trim()));
        let api_key = flat(env::OPENWEATHER_API_KEY_ENV_VAR)
            .filter(|key| key != OPENWEATHER_API_KEY_PLACEHOLDER);

        let settings: Self = Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("database.path", DEFAULT_DATABASE_PATH)?
            .set_default("auth.jwt.time_to_live", DEFAULT_TOKEN_TTL_SECONDS)?
            .set_default("auth.allowed_origins", ANY_ORIGIN)?
            .set_default("weather.base_url", prod::weather::BASE_URL)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(env::PREFIX)
                    .prefix_separator(env::SEPARATOR)
                    .separator(env::SEPARATOR)
                    .source(Some(vars.clone())),
            )
            .set_override_option("application.address", address)?
            .set_override_option("database.path", flat(env::DATABASE_PATH_ENV_VAR))?
            .set_override_option("auth.jwt.secret", flat(env::JWT_SECRET_ENV_VAR))?
            .set_override_option("auth.allowed_origins", flat(env::ALLOWED_ORIGINS_ENV_VAR))?
            .set_override_option("weather.api_key", api_key)?
            .build()?
            .try_deserialize()?;

        if settings.auth.jwt.secret.expose_secret().is_empty() {
            return Err(ConfigError::Message("auth.jwt.secret must not be empty".to_owned()));
        }

        Ok(settings)
    }
}

/// CORS origins, configured as a comma separated list. `*` admits any origin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct AllowedOrigins {
    any: bool,
    origins: Vec<String>,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self {
            any: true,
            origins: Vec::new(),
        }
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        if self.any {
            return true;
        }
        origin
            .to_str()
            .map(|origin| self.origins.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}

impl From<String> for AllowedOrigins {
    fn from(value: String) -> Self {
        let origins: Vec<String> = value
            .split(',')
            .map(|origin| origin.trim().trim_end_matches('/').to_owned())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            any: origins.is_empty() || origins.iter().any(|origin| origin == ANY_ORIGIN),
            origins,
        }
    }
}
