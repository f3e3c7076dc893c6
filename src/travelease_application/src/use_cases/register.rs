use secrecy::Secret;
use travelease_core::{
    CredentialError, CredentialIssuer, DocumentStore, DocumentStoreError, Email, NewUser,
    Password, PasswordHashError, PasswordHasher, UserError, Username,
};

use super::AuthSession;
use crate::{
    error::ErrorKind,
    store::{CreateUserOutcome, TravelStore},
};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("{0}")]
    InvalidInput(#[from] UserError),
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Document store error: {0}")]
    DocumentStoreError(#[from] DocumentStoreError),
    #[error("Password hashing error: {0}")]
    PasswordHashError(#[from] PasswordHashError),
    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),
}

impl RegisterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::Validation,
            Self::UserAlreadyExists => ErrorKind::Conflict,
            Self::DocumentStoreError(_) => ErrorKind::Storage,
            Self::PasswordHashError(_) | Self::CredentialError(_) => ErrorKind::Internal,
        }
    }
}

/// Register use case - creates a user and issues its first credential
pub struct RegisterUseCase<'a, S, H, C>
where
    S: DocumentStore,
    H: PasswordHasher,
    C: CredentialIssuer,
{
    store: &'a TravelStore<S>,
    hasher: &'a H,
    credentials: &'a C,
}

impl<'a, S, H, C> RegisterUseCase<'a, S, H, C>
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

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `username` - Requested display name, must be unused
    /// * `email` - Email address, must be unused
    /// * `password` - Plain-text password, at least six characters
    ///
    /// # Returns
    /// A fresh credential and the new user's public profile
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        email: String,
        password: Secret<String>,
    ) -> Result<AuthSession, RegisterError> {
        let username = Username::try_from(username)?;
        let email = Email::try_from(email)?;
        let password = Password::try_from(password)?;

        // Cheap pre-check so duplicates do not pay for a hash; the
        // authoritative check runs again inside the store transaction.
        if self.store.get_user_by_email(&email).await?.is_some()
            || self.store.get_user_by_username(&username).await?.is_some()
        {
            return Err(RegisterError::UserAlreadyExists);
        }

        let password_hash = self.hasher.hash_password(&password).await?;

        let new_user = NewUser {
            username,
            email,
            password_hash,
        };
        let user = match self.store.create_user(new_user).await? {
            CreateUserOutcome::Created(user) => user,
            CreateUserOutcome::AlreadyExists => return Err(RegisterError::UserAlreadyExists),
        };

        let token = self.credentials.issue(user.id)?;
        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthSession {
            token,
            user: user.profile(),
        })
    }
}
