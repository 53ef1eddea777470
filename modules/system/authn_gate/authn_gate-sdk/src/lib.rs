//! AuthN Gate SDK
//!
//! This crate provides the public API for the `authn_gate` module:
//!
//! - [`IdentityProviderClient`] - Provider chain trait the gate delegates to
//! - [`AnonymousIdentitySource`] - Supplier of the well-known anonymous identity
//! - [`Identity`], [`AuthnRequest`] - Authentication models
//! - [`AuthnGateError`], [`IdentityProviderError`] - Error types
//!
//! ## Usage
//!
//! Providers implement [`IdentityProviderClient`] and return `Ok(None)` when a
//! request carries no usable credentials:
//!
//! ```ignore
//! use authn_gate_sdk::{AuthnRequest, Identity, IdentityProviderClient, IdentityProviderError};
//!
//! #[async_trait::async_trait]
//! impl IdentityProviderClient for MyProvider {
//!     async fn authenticate(
//!         &self,
//!         request: &AuthnRequest,
//!     ) -> Result<Option<Identity>, IdentityProviderError> {
//!         let Some(token) = request.bearer_token() else {
//!             return Ok(None);
//!         };
//!         self.lookup(token).await
//!     }
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::{AnonymousIdentitySource, IdentityProviderClient};
pub use error::{AuthnGateError, IdentityProviderError, MISSING_CREDENTIALS_MESSAGE};
pub use models::{AuthnRequest, Identity, IdentityBuilder};
