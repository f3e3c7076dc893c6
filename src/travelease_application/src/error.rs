/// Coarse classification shared by every use-case error.
///
/// Callers branch on the kind, never on the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input, rejected before touching the store.
    Validation,
    /// Duplicate user or favorite pair.
    Conflict,
    /// Unknown user, destination or favorite.
    NotFound,
    /// Bad credentials or a missing, invalid or expired token.
    Auth,
    /// The persistence medium failed after the self-heal retry.
    Storage,
    /// Hashing or token signing failed.
    Internal,
}
