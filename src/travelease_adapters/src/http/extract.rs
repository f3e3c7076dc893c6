use axum::extract::FromRequestParts;
use http::request::Parts;
use travelease_core::{AuthValidator, CredentialIssuer, DocumentStore, PasswordHasher, UserId};

use super::{error::ApiError, state::HttpState};
use crate::auth::BearerTokenValidator;

/// Verified caller identity for bearer-protected routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl<S, H, C> FromRequestParts<HttpState<S, H, C>> for AuthenticatedUser
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
    C: CredentialIssuer + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &HttpState<S, H, C>,
    ) -> Result<Self, Self::Rejection> {
        let validator = BearerTokenValidator::new(state.service.credentials());
        let user_id = validator.validate(parts).await?;
        Ok(AuthenticatedUser(user_id))
    }
}
