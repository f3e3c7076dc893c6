use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    ids::UserId,
    password::{HashedPassword, Password},
    weather::{Coordinates, Weather},
};

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Port trait for slow, salted one-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &Password)
    -> Result<HashedPassword, PasswordHashError>;

    /// `Ok(false)` means the candidate does not match; errors are reserved
    /// for hashes that cannot be checked at all.
    async fn verify_password(
        &self,
        candidate: &Password,
        expected: &HashedPassword,
    ) -> Result<bool, PasswordHashError>;
}

/// Signed credential handed to a client after register or login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("No token provided")]
    MissingToken,
    #[error("Invalid token")]
    MalformedToken,
    #[error("Invalid token")]
    InvalidSignature,
    #[error("Token expired")]
    ExpiredToken,
    #[error("Failed to issue token: {0}")]
    IssueFailed(String),
}

impl PartialEq for CredentialError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MissingToken, Self::MissingToken)
                | (Self::MalformedToken, Self::MalformedToken)
                | (Self::InvalidSignature, Self::InvalidSignature)
                | (Self::ExpiredToken, Self::ExpiredToken)
                | (Self::IssueFailed(_), Self::IssueFailed(_))
        )
    }
}

/// Port trait for issuing and verifying time-limited credentials.
///
/// Verification is stateless: a token stays valid until its embedded expiry.
pub trait CredentialIssuer: Send + Sync {
    /// Issues a token for `user_id` as if the current time were `issued_at`.
    fn issue_at(
        &self,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthToken, CredentialError>;

    fn issue(&self, user_id: UserId) -> Result<AuthToken, CredentialError> {
        self.issue_at(user_id, Utc::now())
    }

    fn verify(&self, token: &str) -> Result<UserId, CredentialError>;
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Failed to fetch weather data: {0}")]
    RequestFailed(String),
    #[error("Unexpected weather response: {0}")]
    UnexpectedResponse(String),
}

/// Port trait for the current-conditions lookup
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, coordinates: Coordinates) -> Result<Weather, WeatherError>;
}
