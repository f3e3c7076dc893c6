use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::user::UserError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Plain-text password as submitted by a client.
///
/// Never serialized and never printed; `Debug` is redacted by [`Secret`].
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Accepts any non-empty candidate without applying the registration
    /// length policy. Used for login, where the stored hash is the judge.
    pub fn candidate(value: Secret<String>) -> Result<Self, UserError> {
        if value.expose_secret().is_empty() {
            return Err(UserError::MissingField("password"));
        }
        Ok(Self(value))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let length = value.expose_secret().chars().count();
        if length == 0 {
            return Err(UserError::MissingField("password"));
        }
        if length < MIN_PASSWORD_LENGTH {
            return Err(UserError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Salted one-way hash of a password, in PHC string format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedPassword(String);

impl HashedPassword {
    pub fn new(phc: String) -> Self {
        Self(phc)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
