//! Domain layer for the static identity provider.

pub mod client;
pub mod service;

pub use service::Service;
