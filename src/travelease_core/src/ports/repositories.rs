use async_trait::async_trait;
use thiserror::Error;

use crate::domain::document::Document;

// DocumentStore port trait and errors
#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("Document is unreadable: {0}")]
    Unreadable(String),
    #[error("Failed to write document: {0}")]
    WriteFailed(String),
    #[error("Failed to serialize document: {0}")]
    Serialization(String),
}

impl PartialEq for DocumentStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Unreadable(_), Self::Unreadable(_))
                | (Self::WriteFailed(_), Self::WriteFailed(_))
                | (Self::Serialization(_), Self::Serialization(_))
        )
    }
}

/// Persistence medium holding the whole [`Document`].
///
/// Implementations only move complete documents in and out. Serializing
/// concurrent read-modify-write cycles is the caller's job.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads the persisted document without side effects.
    ///
    /// A missing or unparsable medium is reported as
    /// [`DocumentStoreError::Unreadable`]; reseeding is left to the caller.
    async fn load(&self) -> Result<Document, DocumentStoreError>;

    /// Replaces the persisted document as a whole.
    async fn save(&self, document: &Document) -> Result<(), DocumentStoreError>;
}
