pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const PORT_ENV_VAR: &str = "PORT";
    pub const DATABASE_PATH_ENV_VAR: &str = "DATABASE_PATH";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ALLOWED_ORIGINS";
    pub const OPENWEATHER_API_KEY_ENV_VAR: &str = "OPENWEATHER_API_KEY";

    /// Prefix for nested keys, e.g. `TRAVELEASE__AUTH__JWT__TIME_TO_LIVE`.
    pub const PREFIX: &str = "TRAVELEASE";
    pub const SEPARATOR: &str = "__";
}

pub const CONFIG_FILE: &str = "config/default";
pub const DEFAULT_DATABASE_PATH: &str = "data/travelease.json";
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;
pub const ANY_ORIGIN: &str = "*";

/// Value shipped in sample `.env` files; treated as "no key".
pub const OPENWEATHER_API_KEY_PLACEHOLDER: &str = "your_openweather_api_key_here";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:5000";
    pub mod weather {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.openweathermap.org";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod weather {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
