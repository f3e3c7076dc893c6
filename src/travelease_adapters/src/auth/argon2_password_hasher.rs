use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use travelease_core::{HashedPassword, Password, PasswordHashError, PasswordHasher};

/// Argon2id hasher. Work runs on the blocking pool so request handlers are
/// never stalled by key derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

fn argon2() -> Result<Argon2<'static>, String> {
    let params = Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(
        &self,
        password: &Password,
    ) -> Result<HashedPassword, PasswordHashError> {
        let password: Secret<String> = password.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.expose_secret().as_bytes(), &salt)
                    .map(|hash| HashedPassword::new(hash.to_string()))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        result.map_err(PasswordHashError::HashingFailed)
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify_password(
        &self,
        candidate: &Password,
        expected: &HashedPassword,
    ) -> Result<bool, PasswordHashError> {
        let candidate: Secret<String> = candidate.as_ref().clone();
        let expected = expected.as_str().to_owned();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let expected_hash = PasswordHash::new(&expected)
                    .map_err(|e| PasswordHashError::MalformedHash(e.to_string()))?;
                let hasher = argon2().map_err(PasswordHashError::HashingFailed)?;

                match hasher.verify_password(candidate.expose_secret().as_bytes(), &expected_hash) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHashError::HashingFailed(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
    }
}
