//! Anonymous identity sources.

use async_trait::async_trait;
use authn_gate_sdk::{AnonymousIdentitySource, Identity, IdentityProviderError};

/// Source that always yields [`Identity::anonymous`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAnonymousSource;

#[async_trait]
impl AnonymousIdentitySource for StaticAnonymousSource {
    async fn anonymous(&self) -> Result<Identity, IdentityProviderError> {
        Ok(Identity::anonymous())
    }
}
