//! File-backed document store.
//!
//! The whole [`Document`] lives in one pretty-printed JSON file. Each write
//! goes to its own sibling temp file that is synced and then renamed over the
//! original, so a crash mid-write never leaves a truncated document behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};
use travelease_core::{Document, DocumentStore, DocumentStoreError};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct JsonFileDocumentStore {
    path: PathBuf,
}

impl JsonFileDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the seed document if nothing is persisted yet.
    ///
    /// An existing file is left untouched, even when it is unparsable; the
    /// first read through `TravelStore` repairs it.
    #[tracing::instrument(name = "JsonFileDocumentStore::initialize", skip(self), fields(path = %self.path.display()))]
    pub async fn initialize(&self) -> Result<(), DocumentStoreError> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| DocumentStoreError::Unreadable(e.to_string()))?;
        if exists {
            return Ok(());
        }

        tracing::info!("Seeding new document");
        self.write(&Document::seed()).await
    }

    async fn read(&self) -> Result<Document, DocumentStoreError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DocumentStoreError::Unreadable(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| DocumentStoreError::Unreadable(e.to_string()))
    }

    async fn write(&self, document: &Document) -> Result<(), DocumentStoreError> {
        let content = serde_json::to_string_pretty(document)
            .map_err(|e| DocumentStoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| write_failed("cannot create directory", e))?;
        }

        let temp_path = self
            .path
            .with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));
        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| write_failed("cannot create temp file", e))?;
            file.write_all(content.as_bytes())
                .await
                .map_err(|e| write_failed("cannot write document", e))?;
            file.sync_all()
                .await
                .map_err(|e| write_failed("cannot sync to disk", e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(write_failed("cannot rename temp file", e));
        }
        Ok(())
    }
}

fn write_failed(context: &str, error: std::io::Error) -> DocumentStoreError {
    DocumentStoreError::WriteFailed(format!("{context}: {error}"))
}

#[async_trait]
impl DocumentStore for JsonFileDocumentStore {
    #[tracing::instrument(name = "JsonFileDocumentStore::load", skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Document, DocumentStoreError> {
        self.read().await
    }

    #[tracing::instrument(name = "JsonFileDocumentStore::save", skip_all, fields(path = %self.path.display()))]
    async fn save(&self, document: &Document) -> Result<(), DocumentStoreError> {
        self.write(document).await
    }
}
