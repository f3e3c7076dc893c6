pub mod argon2_password_hasher;
pub mod bearer_validator;
pub mod jwt_credentials;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use bearer_validator::{BearerTokenValidator, extract_bearer_token};
pub use jwt_credentials::{Claims, JwtAuthConfig, JwtCredentials};
