//! Configuration for the static identity provider.

use serde::Deserialize;
use uuid::Uuid;

/// Subject used by the default identity.
pub const DEFAULT_SUBJECT_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0001);

/// Tenant used by the default identity.
pub const DEFAULT_TENANT_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0002);

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticIdentityPluginConfig {
    /// Name the provider is registered under in the provider chain.
    pub vendor: String,

    /// Provider priority (lower = asked first).
    pub priority: i16,

    /// Token resolution mode.
    pub mode: IdentityMode,

    /// Identity returned in `accept_all` mode.
    pub default_identity: IdentityConfig,

    /// Token-to-identity mappings used in `static_tokens` mode.
    pub tokens: Vec<TokenMapping>,
}

impl Default for StaticIdentityPluginConfig {
    fn default() -> Self {
        Self {
            vendor: "hyperspot".to_owned(),
            priority: 100,
            mode: IdentityMode::AcceptAll,
            default_identity: IdentityConfig::default(),
            tokens: Vec::new(),
        }
    }
}

/// Token resolution mode.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// Any non-empty bearer token resolves to the default identity.
    #[default]
    AcceptAll,
    /// Only configured tokens resolve; anything else yields no identity.
    StaticTokens,
}

/// Identity fields as written in configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    pub subject_id: Uuid,
    pub subject_tenant_id: Option<Uuid>,
    pub token_scopes: Vec<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            subject_id: DEFAULT_SUBJECT_ID,
            subject_tenant_id: Some(DEFAULT_TENANT_ID),
            token_scopes: vec!["*".to_owned()],
        }
    }
}

/// A single token-to-identity mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    pub token: String,
    #[serde(default)]
    pub identity: IdentityConfig,
}
