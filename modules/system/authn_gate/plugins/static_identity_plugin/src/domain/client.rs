//! Provider client implementation for the static identity service.

use async_trait::async_trait;
use authn_gate_sdk::{AuthnRequest, Identity, IdentityProviderClient, IdentityProviderError};

use super::service::Service;

#[async_trait]
impl IdentityProviderClient for Service {
    async fn authenticate(
        &self,
        request: &AuthnRequest,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        let Some(token) = request.bearer_token() else {
            return Ok(None);
        };

        let identity = self.resolve(token);
        if identity.is_none() {
            tracing::debug!("bearer token not recognized");
        }
        Ok(identity)
    }
}
