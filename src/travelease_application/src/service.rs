use std::sync::Arc;

use secrecy::Secret;
use travelease_core::{
    CredentialError, CredentialIssuer, Destination, DestinationId, DocumentStore,
    DocumentStoreError, PasswordHasher, UserId, UserProfile,
};

use crate::{
    store::TravelStore,
    use_cases::{
        AddFavoriteError, AuthSession, BrowseDestinationsUseCase, CurrentUserError,
        CurrentUserUseCase, FavoritesUseCase, GetDestinationError, LoginError, LoginUseCase,
        RegisterError, RegisterUseCase, RemoveFavoriteError,
    },
};

/// Entry point for every core operation.
///
/// Bundles the store with the hashing and credential ports. Cloning is
/// cheap and every clone shares the same write lock.
pub struct TravelService<S, H, C> {
    store: TravelStore<S>,
    hasher: Arc<H>,
    credentials: Arc<C>,
}

impl<S, H, C> Clone for TravelService<S, H, C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            hasher: Arc::clone(&self.hasher),
            credentials: Arc::clone(&self.credentials),
        }
    }
}

impl<S, H, C> TravelService<S, H, C>
where
    S: DocumentStore,
    H: PasswordHasher,
    C: CredentialIssuer,
{
    pub fn new(store: S, hasher: H, credentials: C) -> Self {
        Self {
            store: TravelStore::new(store),
            hasher: Arc::new(hasher),
            credentials: Arc::new(credentials),
        }
    }

    pub fn store(&self) -> &TravelStore<S> {
        &self.store
    }

    pub fn credentials(&self) -> Arc<C> {
        Arc::clone(&self.credentials)
    }

    pub async fn register_user(
        &self,
        username: String,
        email: String,
        password: Secret<String>,
    ) -> Result<AuthSession, RegisterError> {
        RegisterUseCase::new(&self.store, self.hasher.as_ref(), self.credentials.as_ref())
            .execute(username, email, password)
            .await
    }

    pub async fn login_user(
        &self,
        email: String,
        password: Secret<String>,
    ) -> Result<AuthSession, LoginError> {
        LoginUseCase::new(&self.store, self.hasher.as_ref(), self.credentials.as_ref())
            .execute(email, password)
            .await
    }

    pub async fn current_user(&self, user_id: UserId) -> Result<UserProfile, CurrentUserError> {
        CurrentUserUseCase::new(&self.store).execute(user_id).await
    }

    pub async fn list_destinations(&self) -> Result<Vec<Destination>, DocumentStoreError> {
        BrowseDestinationsUseCase::new(&self.store).list().await
    }

    pub async fn search_destinations(
        &self,
        term: &str,
    ) -> Result<Vec<Destination>, DocumentStoreError> {
        BrowseDestinationsUseCase::new(&self.store)
            .search(term)
            .await
    }

    pub async fn get_destination(
        &self,
        id: DestinationId,
    ) -> Result<Destination, GetDestinationError> {
        BrowseDestinationsUseCase::new(&self.store).get(id).await
    }

    pub async fn list_favorites(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Destination>, DocumentStoreError> {
        FavoritesUseCase::new(&self.store).list(user_id).await
    }

    pub async fn add_favorite(
        &self,
        user_id: UserId,
        destination_id: DestinationId,
    ) -> Result<Destination, AddFavoriteError> {
        FavoritesUseCase::new(&self.store)
            .add(user_id, destination_id)
            .await
    }

    pub async fn remove_favorite(
        &self,
        user_id: UserId,
        destination_id: DestinationId,
    ) -> Result<(), RemoveFavoriteError> {
        FavoritesUseCase::new(&self.store)
            .remove(user_id, destination_id)
            .await
    }

    pub fn verify_token(&self, token: &str) -> Result<UserId, CredentialError> {
        self.credentials.verify(token)
    }
}
