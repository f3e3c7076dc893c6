use secrecy::Secret;
use travelease_core::{
    CredentialError, CredentialIssuer, DocumentStore, DocumentStoreError, Email, Password,
    PasswordHashError, PasswordHasher, UserError,
};

use super::AuthSession;
use crate::{error::ErrorKind, store::TravelStore};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    InvalidInput(UserError),
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Document store error: {0}")]
    DocumentStoreError(#[from] DocumentStoreError),
    #[error("Password hashing error: {0}")]
    PasswordHashError(#[from] PasswordHashError),
    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),
}

impl LoginError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::Validation,
            Self::InvalidCredentials => ErrorKind::Auth,
            Self::DocumentStoreError(_) => ErrorKind::Storage,
            Self::PasswordHashError(_) | Self::CredentialError(_) => ErrorKind::Internal,
        }
    }
}

/// Login use case - exchanges email and password for a credential
pub struct LoginUseCase<'a, S, H, C>
where
    S: DocumentStore,
    H: PasswordHasher,
    C: CredentialIssuer,
{
    store: &'a TravelStore<S>,
    hasher: &'a H,
    credentials: &'a C,
}

impl<'a, S, H, C> LoginUseCase<'a, S, H, C>
where
    S: DocumentStore,
    H: PasswordHasher,
    C: CredentialIssuer,
{
    pub fn new(store: &'a TravelStore<S>, hasher: &'a H, credentials: &'a C) -> Self {
        Self {
            store,
            hasher,
            credentials,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `email` - User's email address
    /// * `password` - User's password
    ///
    /// # Returns
    /// A fresh credential and the user's public profile
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: String,
        password: Secret<String>,
    ) -> Result<AuthSession, LoginError> {
        if email.trim().is_empty() {
            return Err(LoginError::InvalidInput(UserError::MissingField("email")));
        }
        let password = Password::candidate(password).map_err(LoginError::InvalidInput)?;

        // A malformed address cannot belong to anyone.
        let Ok(email) = Email::try_from(email) else {
            return Err(LoginError::InvalidCredentials);
        };
        let Some(user) = self.store.get_user_by_email(&email).await? else {
            return Err(LoginError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify_password(&password, &user.password_hash)
            .await?
        {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self.credentials.issue(user.id)?;

        Ok(AuthSession {
            token,
            user: user.profile(),
        })
    }
}
