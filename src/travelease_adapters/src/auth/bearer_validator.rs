use std::sync::Arc;

use async_trait::async_trait;
use http::{HeaderMap, header::AUTHORIZATION};
use travelease_core::{AuthValidator, CredentialError, CredentialIssuer, UserId};

const BEARER_PREFIX: &str = "Bearer ";

/// Validates `Authorization: Bearer <token>` against a [`CredentialIssuer`].
pub struct BearerTokenValidator<C> {
    credentials: Arc<C>,
}

impl<C> BearerTokenValidator<C> {
    pub fn new(credentials: Arc<C>) -> Self {
        Self { credentials }
    }
}

impl<C> Clone for BearerTokenValidator<C> {
    fn clone(&self) -> Self {
        Self {
            credentials: Arc::clone(&self.credentials),
        }
    }
}

#[async_trait]
impl<C> AuthValidator for BearerTokenValidator<C>
where
    C: CredentialIssuer + 'static,
{
    type Claims = UserId;
    type RequestParts = http::request::Parts;
    type Error = CredentialError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        let token = extract_bearer_token(&parts.headers)?;
        self.credentials.verify(token)
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, CredentialError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(CredentialError::MissingToken)?
        .to_str()
        .map_err(|_| CredentialError::MalformedToken)?;

    match value.strip_prefix(BEARER_PREFIX).map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(CredentialError::MalformedToken),
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, Request};
    use secrecy::Secret;

    use super::*;
    use crate::auth::{JwtAuthConfig, JwtCredentials};

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn missing_header_is_missing_token() {
        assert_eq!(
            extract_bearer_token(&HeaderMap::new()).unwrap_err(),
            CredentialError::MissingToken
        );
    }

    #[test]
    fn wrong_scheme_or_empty_token_is_malformed() {
        assert_eq!(
            extract_bearer_token(&headers("Basic abc")).unwrap_err(),
            CredentialError::MalformedToken
        );
        assert_eq!(
            extract_bearer_token(&headers("Bearer ")).unwrap_err(),
            CredentialError::MalformedToken
        );
    }

    #[test]
    fn extracts_the_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer a.b.c")).unwrap(), "a.b.c");
    }

    #[tokio::test]
    async fn validate_yields_the_user_id() {
        let credentials = Arc::new(JwtCredentials::new(JwtAuthConfig::new(Secret::from(
            "secret".to_owned(),
        ))));
        let token = credentials.issue(UserId::new(5)).unwrap();
        let validator = BearerTokenValidator::new(Arc::clone(&credentials));

        let (parts, ()) = Request::builder()
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str()))
            .body(())
            .unwrap()
            .into_parts();

        assert_eq!(validator.validate(&parts).await.unwrap(), UserId::new(5));
    }
}
