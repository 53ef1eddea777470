//! AuthN Gate Module
//!
//! Fail-closed authentication in front of an identity provider chain.
//! When enabled, every request must either resolve to an identity or hit a
//! configured anonymous path; everything else is rejected with `401`.
//!
//! The decision logic lives in [`domain`] and has no HTTP dependency;
//! [`middleware`] adapts it to axum.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod middleware;

pub use config::AuthnGateConfig;
pub use domain::{
    AnonymousPathAllowlist, AuthenticationGate, IdentityProviderChain, ProviderEntry,
    StaticAnonymousSource,
};
pub use middleware::{AuthnGateState, authn_middleware};
