//! # TravelEase - travel destination service library
//!
//! This is a facade crate that re-exports all public APIs from the TravelEase
//! components. Use this crate to get access to the whole service in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `User`, `Destination`, `Favorite`, `Document`, etc.
//! - **Port traits**: `DocumentStore`, `PasswordHasher`, `CredentialIssuer`, `WeatherProvider`
//! - **Application**: `TravelStore`, the use cases and the `TravelService` facade
//! - **Adapters**: `JsonFileDocumentStore`, `Argon2PasswordHasher`, `JwtCredentials`, etc.
//! - **Service**: `TravelApp` - the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use travelease_core::*;
}

pub use travelease_core::{
    Coordinates, Destination, DestinationId, Document, Email, Favorite, FavoriteId, Password,
    User, UserError, UserId, UserProfile, Username, Weather,
};

// ============================================================================
// Ports
// ============================================================================

pub use travelease_core::{
    AuthToken, AuthValidator, CredentialError, CredentialIssuer, DocumentStore,
    DocumentStoreError, PasswordHashError, PasswordHasher, WeatherError, WeatherProvider,
};

// ============================================================================
// Application Layer
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use travelease_application::use_cases::*;
}

pub use travelease_application::{AuthSession, ErrorKind, TravelService, TravelStore};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and error mapping
    pub mod http {
        pub use travelease_adapters::http::*;
    }

    /// Document store implementations
    pub mod persistence {
        pub use travelease_adapters::persistence::*;
    }

    /// Password hashing and credentials
    pub mod auth {
        pub use travelease_adapters::auth::*;
    }

    /// Weather providers
    pub mod weather {
        pub use travelease_adapters::weather::*;
    }

    /// Configuration
    pub mod config {
        pub use travelease_adapters::config::*;
    }
}

pub use travelease_adapters::{
    Argon2PasswordHasher, InMemoryDocumentStore, JsonFileDocumentStore, JwtAuthConfig,
    JwtCredentials, MockWeatherProvider, OpenWeatherClient,
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use travelease_service::{
    AllowedOrigins, AppSettings, TravelApp, configure_credentials, configure_document_store,
    configure_weather_provider,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
