use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use travelease_core::{
    Destination, DestinationId, Document, DocumentStore, DocumentStoreError, Email, Favorite,
    NewUser, User, UserId, Username,
};

/// Result of a mutation applied inside [`TravelStore::transact`].
#[derive(Debug)]
pub enum Mutation<T> {
    /// The document changed and must be saved.
    Commit(T),
    /// Nothing changed; the save is skipped.
    Unchanged(T),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateUserOutcome {
    Created(User),
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddFavoriteOutcome {
    Created(Favorite),
    AlreadyExists,
}

/// Typed queries and mutations over a [`DocumentStore`].
///
/// Every mutation is a full load, mutate, save cycle run while holding a
/// single async mutex shared by all clones, so concurrent writers can neither
/// duplicate a favorite pair nor overwrite each other's changes. Reads skip
/// the lock and see the last saved document, unless the medium is unreadable:
/// reseeding is a write, so it only ever happens under the lock.
///
/// Whole-document writes are not reachable from outside the crate:
///
/// ```compile_fail
/// use travelease_application::TravelStore;
/// use travelease_core::{Document, DocumentStore};
///
/// async fn overwrite<S: DocumentStore>(store: &TravelStore<S>) {
///     let _ = store.save(&Document::seed()).await;
/// }
/// ```
pub struct TravelStore<S> {
    store: Arc<S>,
    write_lock: Arc<Mutex<()>>,
}

impl<S> Clone for TravelStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<S> TravelStore<S>
where
    S: DocumentStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &S {
        &self.store
    }

    /// Lock-free read that falls back to `load_or_heal` under the
    /// write lock when the medium cannot be read.
    pub(crate) async fn load(&self) -> Result<Document, DocumentStoreError> {
        match self.store.load().await {
            Ok(document) => Ok(document),
            Err(DocumentStoreError::Unreadable(_)) => {
                let _guard = self.write_lock.lock().await;
                self.load_or_heal().await
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load document");
                Err(e)
            }
        }
    }

    /// Reads the document, reseeding and rereading once when it is missing
    /// or unparsable. Callers must hold `write_lock`.
    async fn load_or_heal(&self) -> Result<Document, DocumentStoreError> {
        match self.store.load().await {
            Ok(document) => Ok(document),
            Err(DocumentStoreError::Unreadable(reason)) => {
                tracing::warn!(%reason, "Document unreadable, reseeding");
                self.save(&Document::seed()).await?;
                self.store.load().await.inspect_err(|e| {
                    tracing::error!(error = %e, "Document still unreadable after reseeding");
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load document");
                Err(e)
            }
        }
    }

    pub(crate) async fn save(&self, document: &Document) -> Result<(), DocumentStoreError> {
        self.store.save(document).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to save document");
        })
    }

    /// Runs `mutate` against a freshly loaded document inside the critical
    /// section and saves the result when it reports a change.
    pub async fn transact<T, F>(&self, mutate: F) -> Result<T, DocumentStoreError>
    where
        F: FnOnce(&mut Document) -> Mutation<T> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut document = self.load_or_heal().await?;
        match mutate(&mut document) {
            Mutation::Commit(value) => {
                self.save(&document).await?;
                Ok(value)
            }
            Mutation::Unchanged(value) => Ok(value),
        }
    }

    // ---- Users -------------------------------------------------------------

    #[tracing::instrument(name = "TravelStore::create_user", skip_all)]
    pub async fn create_user(
        &self,
        new_user: NewUser,
    ) -> Result<CreateUserOutcome, DocumentStoreError> {
        self.transact(move |document| match document.insert_user(new_user, Utc::now()) {
            Some(user) => Mutation::Commit(CreateUserOutcome::Created(user)),
            None => Mutation::Unchanged(CreateUserOutcome::AlreadyExists),
        })
        .await
    }

    pub async fn get_user_by_email(&self, email: &Email) -> Result<Option<User>, DocumentStoreError> {
        Ok(self.load().await?.user_by_email(email).cloned())
    }

    pub async fn get_user_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, DocumentStoreError> {
        Ok(self.load().await?.user_by_username(username).cloned())
    }

    pub async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, DocumentStoreError> {
        Ok(self.load().await?.user_by_id(id).cloned())
    }

    // ---- Destinations ------------------------------------------------------

    pub async fn get_all_destinations(&self) -> Result<Vec<Destination>, DocumentStoreError> {
        Ok(self.load().await?.destinations)
    }

    pub async fn get_destination_by_id(
        &self,
        id: DestinationId,
    ) -> Result<Option<Destination>, DocumentStoreError> {
        Ok(self.load().await?.destination(id).cloned())
    }

    pub async fn search_destinations(
        &self,
        term: &str,
    ) -> Result<Vec<Destination>, DocumentStoreError> {
        Ok(self.load().await?.search_destinations(term))
    }

    // ---- Favorites ---------------------------------------------------------

    pub async fn get_user_favorites(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Destination>, DocumentStoreError> {
        Ok(self.load().await?.favorite_destinations(user_id))
    }

    #[tracing::instrument(name = "TravelStore::add_favorite", skip(self))]
    pub async fn add_favorite(
        &self,
        user_id: UserId,
        destination_id: DestinationId,
    ) -> Result<AddFavoriteOutcome, DocumentStoreError> {
        self.transact(move |document| {
            match document.insert_favorite(user_id, destination_id, Utc::now()) {
                Some(favorite) => Mutation::Commit(AddFavoriteOutcome::Created(favorite)),
                None => Mutation::Unchanged(AddFavoriteOutcome::AlreadyExists),
            }
        })
        .await
    }

    #[tracing::instrument(name = "TravelStore::remove_favorite", skip(self))]
    pub async fn remove_favorite(
        &self,
        user_id: UserId,
        destination_id: DestinationId,
    ) -> Result<bool, DocumentStoreError> {
        self.transact(move |document| {
            if document.remove_favorite(user_id, destination_id) {
                Mutation::Commit(true)
            } else {
                Mutation::Unchanged(false)
            }
        })
        .await
    }
}
