//! Ordered chain of identity providers.

use std::sync::Arc;

use async_trait::async_trait;
use authn_gate_sdk::{AuthnRequest, Identity, IdentityProviderClient, IdentityProviderError};

/// A provider registered in an [`IdentityProviderChain`].
#[derive(Clone)]
pub struct ProviderEntry {
    name: String,
    priority: i16,
    client: Arc<dyn IdentityProviderClient>,
}

impl ProviderEntry {
    /// Lower `priority` values are asked first.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        priority: i16,
        client: Arc<dyn IdentityProviderClient>,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            client,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn priority(&self) -> i16 {
        self.priority
    }
}

/// Asks providers in priority order until one resolves an identity.
///
/// - the first `Some` wins and later providers are not called
/// - the first error stops the chain and is returned unchanged
/// - if every provider returns `None` (or there are none) the chain does too
pub struct IdentityProviderChain {
    providers: Vec<ProviderEntry>,
}

impl IdentityProviderChain {
    /// Build a chain. Entries with equal priority keep their given order.
    #[must_use]
    pub fn new(mut providers: Vec<ProviderEntry>) -> Self {
        providers.sort_by_key(|p| p.priority);
        Self { providers }
    }

    /// Provider names in the order they are asked.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(ProviderEntry::name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl IdentityProviderClient for IdentityProviderChain {
    async fn authenticate(
        &self,
        request: &AuthnRequest,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        for entry in &self.providers {
            match entry.client.authenticate(request).await {
                Ok(Some(identity)) => {
                    tracing::debug!(provider = %entry.name, "identity resolved");
                    return Ok(Some(identity));
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(provider = %entry.name, error = %e, "identity provider failed");
                    return Err(e);
                }
            }
        }
        Ok(None)
    }
}
