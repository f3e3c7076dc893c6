use async_trait::async_trait;

/// Trait for validating credentials carried by an inbound request.
///
/// Validators extract the credential from the request, verify it and produce
/// the claims that protected operations act on. For the bearer scheme the
/// claims are the verified user id.
///
/// # Implementation Note
///
/// The validator receives `RequestParts` (headers, method, URI, extensions)
/// rather than the full request, so non-`Sync` bodies never have to cross an
/// await point.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The claims extracted from a valid credential.
    type Claims: Clone + Send + Sync + 'static;

    /// The request parts type this validator operates on.
    ///
    /// Typically `http::request::Parts`.
    type RequestParts: Sync;

    /// Errors that can occur during validation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Validate authentication from the request parts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No credential is present
    /// - The credential is malformed, badly signed or expired
    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
