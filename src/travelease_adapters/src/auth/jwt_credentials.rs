use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use travelease_core::{AuthToken, CredentialError, CredentialIssuer, UserId};

use crate::config::DEFAULT_TOKEN_TTL_SECONDS;

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn new(jwt_secret: Secret<String>) -> Self {
        Self {
            jwt_secret,
            token_ttl_in_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a decimal string.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 credentials carrying the user id, signed with a process-wide key.
#[derive(Clone)]
pub struct JwtCredentials {
    config: JwtAuthConfig,
}

impl JwtCredentials {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

impl CredentialIssuer for JwtCredentials {
    fn issue_at(
        &self,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthToken, CredentialError> {
        let ttl = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds).ok_or(
            CredentialError::IssueFailed("Failed to create auth token duration".to_owned()),
        )?;
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or(CredentialError::IssueFailed(
                "Failed to add token duration to current time".to_owned(),
            ))?;

        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map(AuthToken::new)
        .map_err(|e| CredentialError::IssueFailed(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<UserId, CredentialError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Self::validation(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CredentialError::ExpiredToken,
            ErrorKind::InvalidSignature => CredentialError::InvalidSignature,
            _ => CredentialError::MalformedToken,
        })?;

        claims
            .sub
            .parse::<i64>()
            .map(UserId::new)
            .map_err(|_| CredentialError::MalformedToken)
    }
}
