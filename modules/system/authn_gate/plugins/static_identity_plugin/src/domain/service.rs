//! Bearer token lookup for the static identity provider.

use std::collections::HashMap;

use authn_gate_sdk::Identity;

use crate::config::{IdentityConfig, IdentityMode, StaticIdentityPluginConfig};

/// How a bearer token is turned into an identity.
enum Lookup {
    /// Every non-empty token stands for the same identity.
    AnyToken(Identity),
    /// Only listed tokens are known.
    Table(HashMap<String, Identity>),
}

/// Static identity provider.
///
/// Identities are built once from configuration; resolving a token is a
/// clone out of the prepared lookup. Nothing here ever fails: an empty or
/// unknown token simply has no identity.
pub struct Service {
    lookup: Lookup,
}

impl Service {
    #[must_use]
    pub fn from_config(cfg: &StaticIdentityPluginConfig) -> Self {
        let lookup = match cfg.mode {
            IdentityMode::AcceptAll => Lookup::AnyToken(to_identity(&cfg.default_identity)),
            // Later mappings for the same token replace earlier ones.
            IdentityMode::StaticTokens => Lookup::Table(
                cfg.tokens
                    .iter()
                    .map(|m| (m.token.clone(), to_identity(&m.identity)))
                    .collect(),
            ),
        };

        Self { lookup }
    }

    /// Identity for `bearer_token`, if the token is known.
    #[must_use]
    pub fn resolve(&self, bearer_token: &str) -> Option<Identity> {
        if bearer_token.is_empty() {
            return None;
        }

        match &self.lookup {
            Lookup::AnyToken(identity) => Some(identity.clone()),
            Lookup::Table(table) => table.get(bearer_token).cloned(),
        }
    }
}

fn to_identity(cfg: &IdentityConfig) -> Identity {
    let mut builder = Identity::builder()
        .subject_id(cfg.subject_id)
        .token_scopes(cfg.token_scopes.clone());
    if let Some(tenant) = cfg.subject_tenant_id {
        builder = builder.subject_tenant_id(tenant);
    }
    builder.build()
}
