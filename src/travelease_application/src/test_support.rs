//! In-process doubles for the core ports, shared by the unit tests.

use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use travelease_core::{
    AuthToken, CredentialError, CredentialIssuer, Document, DocumentStore, DocumentStoreError,
    Email, HashedPassword, NewUser, Password, PasswordHashError, PasswordHasher, UserId, Username,
};

use crate::TravelService;

pub struct MemoryStore {
    document: Mutex<Document>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
    unreadable: AtomicBool,
    heal_on_save: AtomicBool,
    latency: Option<Duration>,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        Self {
            document: Mutex::new(Document::seed()),
            saves: AtomicUsize::new(0),
            fail_saves: AtomicBool::new(false),
            unreadable: AtomicBool::new(false),
            heal_on_save: AtomicBool::new(true),
            latency: None,
        }
    }

    /// Sleeps between reading and returning a document, widening the window
    /// in which unsynchronized writers would interleave.
    pub fn with_latency(mut self) -> Self {
        self.latency = Some(Duration::from_millis(5));
        self
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Makes `load` fail as if the medium were corrupt until the next save.
    pub fn corrupt(&self) {
        self.unreadable.store(true, Ordering::SeqCst);
    }

    /// Like [`Self::corrupt`], but saves do not repair the medium.
    pub fn corrupt_permanently(&self) {
        self.heal_on_save.store(false, Ordering::SeqCst);
        self.corrupt();
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Document, DocumentStoreError> {
        let unreadable = self.unreadable.load(Ordering::SeqCst);
        let document = self.document.lock().unwrap().clone();
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if unreadable {
            return Err(DocumentStoreError::Unreadable("expected value at line 1".to_owned()));
        }
        Ok(document)
    }

    async fn save(&self, document: &Document) -> Result<(), DocumentStoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DocumentStoreError::WriteFailed("disk full".to_owned()));
        }
        *self.document.lock().unwrap() = document.clone();
        if self.heal_on_save.load(Ordering::SeqCst) {
            self.unreadable.store(false, Ordering::SeqCst);
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Reversible "hash" so tests do not pay for a real key derivation.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(
        &self,
        password: &Password,
    ) -> Result<HashedPassword, PasswordHashError> {
        Ok(HashedPassword::new(format!(
            "plain${}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify_password(
        &self,
        candidate: &Password,
        expected: &HashedPassword,
    ) -> Result<bool, PasswordHashError> {
        let stored = expected
            .as_str()
            .strip_prefix("plain$")
            .ok_or_else(|| PasswordHashError::MalformedHash(expected.as_str().to_owned()))?;
        Ok(stored == candidate.as_ref().expose_secret())
    }
}

/// Unsigned `user:<id>:<issued-at>` tokens with a 24 hour lifetime.
pub struct PlainCredentials;

impl CredentialIssuer for PlainCredentials {
    fn issue_at(
        &self,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthToken, CredentialError> {
        Ok(AuthToken::new(format!(
            "user:{}:{}",
            user_id,
            issued_at.timestamp()
        )))
    }

    fn verify(&self, token: &str) -> Result<UserId, CredentialError> {
        let mut parts = token.strip_prefix("user:").ok_or(CredentialError::MalformedToken)?.split(':');
        let id = parts
            .next()
            .and_then(|id| id.parse::<i64>().ok())
            .ok_or(CredentialError::MalformedToken)?;
        let issued_at = parts
            .next()
            .and_then(|ts| ts.parse::<i64>().ok())
            .ok_or(CredentialError::MalformedToken)?;
        if Utc::now().timestamp() - issued_at > 24 * 60 * 60 {
            return Err(CredentialError::ExpiredToken);
        }
        Ok(UserId::new(id))
    }
}

pub fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: Username::try_from(username).unwrap(),
        email: Email::try_from(email).unwrap(),
        password_hash: HashedPassword::new("plain$secret1".to_owned()),
    }
}

pub fn service() -> TravelService<MemoryStore, PlainHasher, PlainCredentials> {
    TravelService::new(MemoryStore::seeded(), PlainHasher, PlainCredentials)
}
