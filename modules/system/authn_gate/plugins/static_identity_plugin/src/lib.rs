//! Static identity provider.
//!
//! Maps bearer tokens to identities from configuration. Meant for
//! development and testing; it performs no cryptographic verification.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::{IdentityConfig, IdentityMode, StaticIdentityPluginConfig, TokenMapping};
pub use domain::Service;
