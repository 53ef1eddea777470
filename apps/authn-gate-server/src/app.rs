//! Router wiring.

use std::sync::Arc;

use authn_gate::{
    AuthenticationGate, AuthnGateState, IdentityProviderChain, ProviderEntry,
    StaticAnonymousSource, authn_middleware,
};
use authn_gate_sdk::Identity;
use axum::routing::get;
use axum::{Extension, Json, Router, middleware};
use serde_json::{Value, json};
use static_identity_plugin::Service as StaticIdentityService;
use tracing::info;

use crate::config::AppConfig;

/// Build the gate and its provider chain from configuration.
pub fn build_gate(cfg: &AppConfig) -> AuthenticationGate {
    let static_identity = &cfg.static_identity;
    let chain = IdentityProviderChain::new(vec![ProviderEntry::new(
        static_identity.vendor.clone(),
        static_identity.priority,
        Arc::new(StaticIdentityService::from_config(static_identity)),
    )]);

    info!(
        enabled = cfg.authentication.enabled,
        providers = ?chain.names().collect::<Vec<_>>(),
        "Initializing authentication gate"
    );

    AuthenticationGate::new(
        &cfg.authentication,
        Arc::new(chain),
        Arc::new(StaticAnonymousSource),
    )
}

/// Build the HTTP router with every route behind the gate.
pub fn build_router(cfg: &AppConfig) -> Router {
    let state = AuthnGateState::new(Arc::new(build_gate(cfg)));

    Router::new()
        .route("/q/health", get(health))
        .route("/q/health/live", get(health))
        .route("/q/health/ready", get(health))
        .route("/api/v1/whoami", get(whoami))
        .layer(middleware::from_fn_with_state(state, authn_middleware))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

async fn whoami(Extension(identity): Extension<Identity>) -> Json<Value> {
    Json(json!({
        "anonymous": identity.is_anonymous(),
        "identity": identity,
    }))
}
