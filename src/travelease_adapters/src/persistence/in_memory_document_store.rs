use async_trait::async_trait;
use tokio::sync::RwLock;
use travelease_core::{Document, DocumentStore, DocumentStoreError};

/// Ephemeral store for tests and throwaway runs. Starts from the seed.
#[derive(Debug)]
pub struct InMemoryDocumentStore {
    document: RwLock<Document>,
}

impl InMemoryDocumentStore {
    pub fn new(document: Document) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new(Document::seed())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn load(&self) -> Result<Document, DocumentStoreError> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: &Document) -> Result<(), DocumentStoreError> {
        *self.document.write().await = document.clone();
        Ok(())
    }
}
