use travelease_core::{Destination, DestinationId, DocumentStore, DocumentStoreError};

use crate::{error::ErrorKind, store::TravelStore};

#[derive(Debug, thiserror::Error)]
pub enum GetDestinationError {
    #[error("Destination not found")]
    DestinationNotFound,
    #[error("Document store error: {0}")]
    DocumentStoreError(#[from] DocumentStoreError),
}

impl GetDestinationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DestinationNotFound => ErrorKind::NotFound,
            Self::DocumentStoreError(_) => ErrorKind::Storage,
        }
    }
}

/// Read-only access to the destination catalog
pub struct BrowseDestinationsUseCase<'a, S>
where
    S: DocumentStore,
{
    store: &'a TravelStore<S>,
}

impl<'a, S> BrowseDestinationsUseCase<'a, S>
where
    S: DocumentStore,
{
    pub fn new(store: &'a TravelStore<S>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Destination>, DocumentStoreError> {
        self.store.get_all_destinations().await
    }

    /// Blank terms are not special-cased; they match every destination.
    #[tracing::instrument(name = "BrowseDestinationsUseCase::search", skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Destination>, DocumentStoreError> {
        self.store.search_destinations(term).await
    }

    pub async fn get(&self, id: DestinationId) -> Result<Destination, GetDestinationError> {
        self.store
            .get_destination_by_id(id)
            .await?
            .ok_or(GetDestinationError::DestinationNotFound)
    }
}
