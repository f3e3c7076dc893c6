use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use travelease_application::{
    AddFavoriteError, CurrentUserError, ErrorKind, GetDestinationError, LoginError,
    RegisterError, RemoveFavoriteError,
};
use travelease_core::{CredentialError, DocumentStoreError, WeatherError};

const SERVER_ERROR_MESSAGE: &str = "Server error";
const WEATHER_ERROR_MESSAGE: &str = "Failed to fetch weather data";
const INVALID_TOKEN: &str = "Invalid token";

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("No token provided")]
    MissingToken,

    #[error("{0}")]
    AuthenticationError(String),

    #[error("Weather lookup failed: {0}")]
    WeatherUnavailable(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl ApiError {
    fn from_kind(kind: ErrorKind, message: String) -> Self {
        match kind {
            ErrorKind::Validation => ApiError::InvalidInput(message),
            ErrorKind::Conflict => ApiError::Conflict(message),
            ErrorKind::NotFound => ApiError::NotFound(message),
            ErrorKind::Auth => ApiError::AuthenticationError(message),
            ErrorKind::Storage | ErrorKind::Internal => ApiError::UnexpectedError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match &self {
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            ApiError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),

            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),

            ApiError::MissingToken | ApiError::AuthenticationError(_) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            ApiError::WeatherUnavailable(detail) => {
                tracing::error!(error = %detail, "Weather lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    WEATHER_ERROR_MESSAGE.to_owned(),
                )
            }

            ApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<CredentialError> for ApiError {
    fn from(error: CredentialError) -> Self {
        match error {
            CredentialError::MissingToken => ApiError::MissingToken,
            CredentialError::MalformedToken
            | CredentialError::InvalidSignature
            | CredentialError::ExpiredToken => {
                tracing::debug!(reason = %error, "Token rejected");
                ApiError::AuthenticationError(INVALID_TOKEN.to_owned())
            }
            CredentialError::IssueFailed(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<DocumentStoreError> for ApiError {
    fn from(error: DocumentStoreError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<WeatherError> for ApiError {
    fn from(error: WeatherError) -> Self {
        ApiError::WeatherUnavailable(error.to_string())
    }
}

macro_rules! from_use_case_error {
    ($($error:ty),+ $(,)?) => {
        $(
            impl From<$error> for ApiError {
                fn from(error: $error) -> Self {
                    ApiError::from_kind(error.kind(), error.to_string())
                }
            }
        )+
    };
}

from_use_case_error!(
    RegisterError,
    LoginError,
    CurrentUserError,
    GetDestinationError,
    AddFavoriteError,
    RemoveFavoriteError,
);

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use travelease_core::UserError;

    use super::*;

    async fn render(error: ApiError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, body.error)
    }

    #[tokio::test]
    async fn validation_is_bad_request() {
        let error: ApiError = RegisterError::InvalidInput(UserError::PasswordTooShort(6)).into();
        assert_eq!(
            render(error).await,
            (
                StatusCode::BAD_REQUEST,
                "Password must be at least 6 characters".to_owned()
            )
        );
    }

    #[tokio::test]
    async fn conflicts_and_missing_records_are_distinct() {
        let conflict: ApiError = AddFavoriteError::AlreadyFavorited.into();
        let missing: ApiError = RemoveFavoriteError::FavoriteNotFound.into();

        assert_eq!(
            render(conflict).await,
            (StatusCode::CONFLICT, "Already in favorites".to_owned())
        );
        assert_eq!(
            render(missing).await,
            (StatusCode::NOT_FOUND, "Favorite not found".to_owned())
        );
    }

    #[tokio::test]
    async fn token_failures_are_unauthorized() {
        let missing: ApiError = CredentialError::MissingToken.into();

        assert_eq!(
            render(missing).await,
            (StatusCode::UNAUTHORIZED, "No token provided".to_owned())
        );
    }

    #[tokio::test]
    async fn rejected_tokens_share_one_response() {
        let expired = render(CredentialError::ExpiredToken.into()).await;
        let forged = render(CredentialError::InvalidSignature.into()).await;
        let malformed = render(CredentialError::MalformedToken.into()).await;

        assert_eq!(
            expired,
            (StatusCode::UNAUTHORIZED, "Invalid token".to_owned())
        );
        assert_eq!(expired, forged);
        assert_eq!(expired, malformed);
    }

    #[tokio::test]
    async fn storage_details_are_not_leaked() {
        let error: ApiError = LoginError::DocumentStoreError(DocumentStoreError::WriteFailed(
            "/srv/data: permission denied".to_owned(),
        ))
        .into();

        assert_eq!(
            render(error).await,
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_owned())
        );
    }

    #[tokio::test]
    async fn weather_failure_has_its_own_message() {
        let error: ApiError = WeatherError::RequestFailed("timeout".to_owned()).into();
        assert_eq!(
            render(error).await,
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch weather data".to_owned()
            )
        );
    }
}
