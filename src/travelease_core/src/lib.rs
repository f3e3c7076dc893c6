pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    catalog::seed_destinations,
    destination::Destination,
    document::{Document, Sequences},
    email::Email,
    favorite::Favorite,
    ids::{DestinationId, FavoriteId, UserId},
    password::{HashedPassword, Password},
    user::{NewUser, User, UserError, UserProfile},
    username::Username,
    weather::{Coordinates, Weather},
};

pub use ports::{
    repositories::{DocumentStore, DocumentStoreError},
    services::{
        AuthToken, CredentialError, CredentialIssuer, PasswordHashError, PasswordHasher,
        WeatherError, WeatherProvider,
    },
};

pub use strategies::auth_validator::AuthValidator;
