//! Public API traits for the `AuthN` gate.

use async_trait::async_trait;

use crate::error::IdentityProviderError;
use crate::models::{AuthnRequest, Identity};

/// Identity resolution capability the gate delegates to.
///
/// A single provider or a whole chain of providers can sit behind this
/// trait:
///
/// ```ignore
/// let provider: Arc<dyn IdentityProviderClient> = Arc::new(chain);
///
/// match provider.authenticate(&request).await? {
///     Some(identity) => { /* credentials resolved */ }
///     None => { /* no credentials, or credentials not recognized */ }
/// }
/// ```
#[async_trait]
pub trait IdentityProviderClient: Send + Sync {
    /// Attempt to resolve an identity for the request.
    ///
    /// Absence of credentials is not an error: implementations return
    /// `Ok(None)` and leave the decision to the caller.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if credentials are present but malformed
    /// - `Forbidden` if the provider refuses the presented identity outright
    /// - `NoProviderAvailable` if nothing can serve the request
    /// - `ServiceUnavailable` if a backing identity service is not reachable
    /// - `Internal` for unexpected errors
    async fn authenticate(
        &self,
        request: &AuthnRequest,
    ) -> Result<Option<Identity>, IdentityProviderError>;
}

/// Supplier of the well-known anonymous identity.
///
/// Must be idempotent and safe to call concurrently.
#[async_trait]
pub trait AnonymousIdentitySource: Send + Sync {
    /// Produce the anonymous identity.
    ///
    /// # Errors
    ///
    /// Returns an error only when the anonymous mechanism itself is broken.
    async fn anonymous(&self) -> Result<Identity, IdentityProviderError>;
}
