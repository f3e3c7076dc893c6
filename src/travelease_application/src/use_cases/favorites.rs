use travelease_core::{Destination, DestinationId, DocumentStore, DocumentStoreError, UserId};

use crate::{
    error::ErrorKind,
    store::{AddFavoriteOutcome, TravelStore},
};

#[derive(Debug, thiserror::Error)]
pub enum AddFavoriteError {
    #[error("Destination not found")]
    DestinationNotFound,
    #[error("Already in favorites")]
    AlreadyFavorited,
    #[error("Document store error: {0}")]
    DocumentStoreError(#[from] DocumentStoreError),
}

impl AddFavoriteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DestinationNotFound => ErrorKind::NotFound,
            Self::AlreadyFavorited => ErrorKind::Conflict,
            Self::DocumentStoreError(_) => ErrorKind::Storage,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RemoveFavoriteError {
    #[error("Destination not found")]
    DestinationNotFound,
    #[error("Favorite not found")]
    FavoriteNotFound,
    #[error("Document store error: {0}")]
    DocumentStoreError(#[from] DocumentStoreError),
}

impl RemoveFavoriteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DestinationNotFound | Self::FavoriteNotFound => ErrorKind::NotFound,
            Self::DocumentStoreError(_) => ErrorKind::Storage,
        }
    }
}

/// Favorites use case - lists, adds and removes a user's favorites
pub struct FavoritesUseCase<'a, S>
where
    S: DocumentStore,
{
    store: &'a TravelStore<S>,
}

impl<'a, S> FavoritesUseCase<'a, S>
where
    S: DocumentStore,
{
    pub fn new(store: &'a TravelStore<S>) -> Self {
        Self { store }
    }

    pub async fn list(&self, user_id: UserId) -> Result<Vec<Destination>, DocumentStoreError> {
        self.store.get_user_favorites(user_id).await
    }

    /// Adds `destination_id` to the user's favorites.
    ///
    /// # Returns
    /// The destination that was added
    #[tracing::instrument(name = "FavoritesUseCase::add", skip(self))]
    pub async fn add(
        &self,
        user_id: UserId,
        destination_id: DestinationId,
    ) -> Result<Destination, AddFavoriteError> {
        let destination = self
            .store
            .get_destination_by_id(destination_id)
            .await?
            .ok_or(AddFavoriteError::DestinationNotFound)?;

        match self.store.add_favorite(user_id, destination_id).await? {
            AddFavoriteOutcome::Created(_) => Ok(destination),
            AddFavoriteOutcome::AlreadyExists => Err(AddFavoriteError::AlreadyFavorited),
        }
    }

    #[tracing::instrument(name = "FavoritesUseCase::remove", skip(self))]
    pub async fn remove(
        &self,
        user_id: UserId,
        destination_id: DestinationId,
    ) -> Result<(), RemoveFavoriteError> {
        if self
            .store
            .get_destination_by_id(destination_id)
            .await?
            .is_none()
        {
            return Err(RemoveFavoriteError::DestinationNotFound);
        }

        if self.store.remove_favorite(user_id, destination_id).await? {
            Ok(())
        } else {
            Err(RemoveFavoriteError::FavoriteNotFound)
        }
    }
}
