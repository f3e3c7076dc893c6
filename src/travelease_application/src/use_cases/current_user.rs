use travelease_core::{DocumentStore, DocumentStoreError, UserId, UserProfile};

use crate::{error::ErrorKind, store::TravelStore};

#[derive(Debug, thiserror::Error)]
pub enum CurrentUserError {
    #[error("User not found")]
    UserNotFound,
    #[error("Document store error: {0}")]
    DocumentStoreError(#[from] DocumentStoreError),
}

impl CurrentUserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound => ErrorKind::NotFound,
            Self::DocumentStoreError(_) => ErrorKind::Storage,
        }
    }
}

/// Resolves a verified user id to its public profile
pub struct CurrentUserUseCase<'a, S>
where
    S: DocumentStore,
{
    store: &'a TravelStore<S>,
}

impl<'a, S> CurrentUserUseCase<'a, S>
where
    S: DocumentStore,
{
    pub fn new(store: &'a TravelStore<S>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "CurrentUserUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: UserId) -> Result<UserProfile, CurrentUserError> {
        self.store
            .get_user_by_id(user_id)
            .await?
            .map(|user| user.profile())
            .ok_or(CurrentUserError::UserNotFound)
    }
}
