//! Authentication gate.
//!
//! [`AuthenticationGate`] wraps an identity provider chain and makes the
//! deny decision itself instead of deferring it to a later authorization
//! stage:
//!
//! - authentication disabled: every request gets the anonymous identity and
//!   the provider chain is never consulted
//! - identity resolved: passed through unchanged
//! - no identity, exempt path: anonymous identity
//! - no identity, any other path: [`AuthnGateError::AuthenticationFailed`]
//!
//! The gate holds only immutable state and can be shared behind an `Arc`.

use std::sync::Arc;

use authn_gate_sdk::{
    AnonymousIdentitySource, AuthnGateError, AuthnRequest, Identity, IdentityProviderClient,
};

use super::allowlist::AnonymousPathAllowlist;
use crate::config::AuthnGateConfig;

pub struct AuthenticationGate {
    enabled: bool,
    allowlist: AnonymousPathAllowlist,
    provider: Arc<dyn IdentityProviderClient>,
    anonymous: Arc<dyn AnonymousIdentitySource>,
}

impl AuthenticationGate {
    #[must_use]
    pub fn new(
        cfg: &AuthnGateConfig,
        provider: Arc<dyn IdentityProviderClient>,
        anonymous: Arc<dyn AnonymousIdentitySource>,
    ) -> Self {
        Self {
            enabled: cfg.enabled,
            allowlist: AnonymousPathAllowlist::from_config(cfg),
            provider,
            anonymous,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn allowlist(&self) -> &AnonymousPathAllowlist {
        &self.allowlist
    }

    /// Resolve the identity a request may proceed with.
    ///
    /// # Errors
    ///
    /// - `AuthenticationFailed` if no identity was resolved and the path is
    ///   not exempt
    /// - `Provider` if the provider chain failed
    /// - `AnonymousProduction` if the anonymous identity could not be produced
    #[tracing::instrument(skip_all, fields(path = request.path(), enabled = self.enabled))]
    pub async fn attempt_authentication(
        &self,
        request: &AuthnRequest,
    ) -> Result<Identity, AuthnGateError> {
        if !self.enabled {
            return self.anonymous().await;
        }

        let resolved = self
            .provider
            .authenticate(request)
            .await
            .map_err(AuthnGateError::Provider)?;

        self.maybe_transform(resolved, request.path()).await
    }

    /// Apply the fail-closed policy to the provider chain's result.
    ///
    /// # Errors
    ///
    /// - `AuthenticationFailed` if `resolved` is `None` and `path` is not exempt
    /// - `AnonymousProduction` if the anonymous identity could not be produced
    pub async fn maybe_transform(
        &self,
        resolved: Option<Identity>,
        path: Option<&str>,
    ) -> Result<Identity, AuthnGateError> {
        if let Some(identity) = resolved {
            return Ok(identity);
        }

        if self.allowlist.is_exempt(path) {
            tracing::debug!("no credentials on anonymous path");
            return self.anonymous().await;
        }

        tracing::debug!("rejecting request without acceptable credentials");
        Err(AuthnGateError::missing_credentials())
    }

    async fn anonymous(&self) -> Result<Identity, AuthnGateError> {
        self.anonymous.anonymous().await.map_err(|e| {
            tracing::error!(error = %e, "failed to produce anonymous identity");
            AuthnGateError::AnonymousProduction(e)
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::anonymous::StaticAnonymousSource;
    use async_trait::async_trait;
    use authn_gate_sdk::{IdentityProviderError, MISSING_CREDENTIALS_MESSAGE};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    struct MockProvider {
        result: Result<Option<Identity>, IdentityProviderError>,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn returning(result: Result<Option<Identity>, IdentityProviderError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl IdentityProviderClient for MockProvider {
        async fn authenticate(
            &self,
            _request: &AuthnRequest,
        ) -> Result<Option<Identity>, IdentityProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    struct BrokenAnonymous;

    #[async_trait]
    impl AnonymousIdentitySource for BrokenAnonymous {
        async fn anonymous(&self) -> Result<Identity, IdentityProviderError> {
            Err(IdentityProviderError::Internal("no anonymous mechanism".to_owned()))
        }
    }

    fn config(enabled: bool, paths: &[&str], prefixes: &[&str]) -> AuthnGateConfig {
        let to_set = |items: &[&str]| -> Option<HashSet<String>> {
            (!items.is_empty()).then(|| items.iter().map(|s| (*s).to_owned()).collect())
        };
        AuthnGateConfig {
            enabled,
            anonymous_paths: to_set(paths),
            anonymous_path_prefixes: to_set(prefixes),
        }
    }

    fn gate(cfg: &AuthnGateConfig, provider: Arc<MockProvider>) -> AuthenticationGate {
        AuthenticationGate::new(cfg, provider, Arc::new(StaticAnonymousSource))
    }

    fn user() -> Identity {
        Identity::builder()
            .subject_id(Uuid::from_u128(42))
            .token_scopes(vec!["*".to_owned()])
            .build()
    }

    #[tokio::test]
    async fn disabled_gate_never_consults_provider() {
        let provider = MockProvider::returning(Ok(Some(user())));
        let gate = gate(&config(false, &[], &[]), provider.clone());

        let result = gate
            .attempt_authentication(&AuthnRequest::for_path("/secure/data"))
            .await;

        assert_eq!(result, Ok(Identity::anonymous()));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn resolved_identity_passes_through() {
        let provider = MockProvider::returning(Ok(Some(user())));
        let gate = gate(&config(true, &[], &[]), provider.clone());

        let result = gate
            .attempt_authentication(&AuthnRequest::for_path("/secure/data"))
            .await;

        assert_eq!(result, Ok(user()));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resolved_identity_wins_on_exempt_path() {
        let provider = MockProvider::returning(Ok(Some(user())));
        let gate = gate(&config(true, &["/q/health"], &[]), provider);

        let result = gate
            .attempt_authentication(&AuthnRequest::for_path("/q/health"))
            .await;

        assert_eq!(result, Ok(user()));
    }

    #[tokio::test]
    async fn unresolved_on_exempt_path_is_anonymous() {
        let provider = MockProvider::returning(Ok(None));
        let gate = gate(&config(true, &["/q/health"], &[]), provider);

        let result = gate
            .attempt_authentication(&AuthnRequest::for_path("/q/health"))
            .await;

        assert_eq!(result, Ok(Identity::anonymous()));
    }

    #[tokio::test]
    async fn unresolved_on_other_path_fails_with_fixed_message() {
        let provider = MockProvider::returning(Ok(None));
        let gate = gate(&config(true, &["/q/health"], &[]), provider);

        let err = gate
            .attempt_authentication(&AuthnRequest::for_path("/secure/data"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AuthnGateError::AuthenticationFailed(MISSING_CREDENTIALS_MESSAGE.to_owned())
        );
    }

    #[tokio::test]
    async fn provider_error_is_propagated_unchanged() {
        let inner = IdentityProviderError::Unauthorized("malformed token".to_owned());
        let provider = MockProvider::returning(Err(inner.clone()));
        let gate = gate(&config(true, &["/q/health"], &[]), provider);

        let err = gate
            .attempt_authentication(&AuthnRequest::for_path("/q/health"))
            .await
            .unwrap_err();

        assert_eq!(err, AuthnGateError::Provider(inner));
    }

    #[tokio::test]
    async fn broken_anonymous_source_surfaces_as_error() {
        let provider = MockProvider::returning(Ok(None));
        let gate = AuthenticationGate::new(
            &config(false, &[], &[]),
            provider,
            Arc::new(BrokenAnonymous),
        );

        let err = gate
            .attempt_authentication(&AuthnRequest::for_path("/"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthnGateError::AnonymousProduction(_)));
    }

    #[tokio::test]
    async fn maybe_transform_rejects_missing_path() {
        let gate = gate(&config(true, &[""], &[]), MockProvider::returning(Ok(None)));

        let err = gate.maybe_transform(None, None).await.unwrap_err();
        assert_eq!(err, AuthnGateError::missing_credentials());

        let ok = gate.maybe_transform(None, Some("")).await;
        assert_eq!(ok, Ok(Identity::anonymous()));
    }

    #[tokio::test]
    async fn empty_allowlist_rejects_everything_unauthenticated() {
        let gate = gate(&config(true, &[], &[]), MockProvider::returning(Ok(None)));
        assert!(gate.allowlist().is_empty());

        for path in ["/", "/q/health", "/metrics/jvm", ""] {
            let result = gate
                .attempt_authentication(&AuthnRequest::for_path(path))
                .await;
            assert_eq!(result, Err(AuthnGateError::missing_credentials()), "{path}");
        }
    }
}
