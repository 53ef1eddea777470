//! Error types for the `AuthN` gate.

use thiserror::Error;

/// Message carried by [`AuthnGateError::AuthenticationFailed`] when no identity
/// could be established for a non-exempt path.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Missing or unrecognized credentials";

/// Errors raised by identity providers and anonymous identity sources.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityProviderError {
    /// Credentials were presented but could not be accepted.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The provider recognized the caller and refuses it.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// No provider is available to serve the request.
    #[error("no identity provider available")]
    NoProviderAvailable,

    /// A backing identity service is temporarily unreachable.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors returned by the authentication gate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthnGateError {
    /// No identity was resolved and the request path is not exempt.
    #[error("{0}")]
    AuthenticationFailed(String),

    /// The delegated provider chain failed; the inner error is kept as-is.
    #[error(transparent)]
    Provider(IdentityProviderError),

    /// The anonymous identity could not be produced.
    #[error("anonymous identity unavailable: {0}")]
    AnonymousProduction(IdentityProviderError),
}

impl AuthnGateError {
    /// The fixed failure for requests that carry no acceptable identity.
    #[must_use]
    pub fn missing_credentials() -> Self {
        Self::AuthenticationFailed(MISSING_CREDENTIALS_MESSAGE.to_owned())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_displays_fixed_message() {
        let err = AuthnGateError::missing_credentials();
        assert_eq!(err.to_string(), "Missing or unrecognized credentials");
    }

    #[test]
    fn provider_error_display_is_unchanged() {
        let inner = IdentityProviderError::ServiceUnavailable("jwks down".to_owned());
        let err = AuthnGateError::Provider(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn anonymous_production_error_names_cause() {
        let err =
            AuthnGateError::AnonymousProduction(IdentityProviderError::Internal("boom".to_owned()));
        assert_eq!(
            err.to_string(),
            "anonymous identity unavailable: internal error: boom"
        );
    }
}
