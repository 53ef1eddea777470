//! Domain layer for the `AuthN` gate.

pub mod allowlist;
pub mod anonymous;
pub mod chain;
pub mod gate;

pub use allowlist::AnonymousPathAllowlist;
pub use anonymous::StaticAnonymousSource;
pub use chain::{IdentityProviderChain, ProviderEntry};
pub use gate::AuthenticationGate;
