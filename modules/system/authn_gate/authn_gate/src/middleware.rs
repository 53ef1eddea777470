//! axum adapter for the [`AuthenticationGate`].

use std::sync::Arc;

use authn_gate_sdk::{AuthnGateError, AuthnRequest, IdentityProviderError};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::domain::AuthenticationGate;

/// Shared state for the authentication middleware.
#[derive(Clone)]
pub struct AuthnGateState {
    pub gate: Arc<AuthenticationGate>,
}

impl AuthnGateState {
    #[must_use]
    pub fn new(gate: Arc<AuthenticationGate>) -> Self {
        Self { gate }
    }
}

/// Authentication middleware backed by the [`AuthenticationGate`].
///
/// Every request, CORS preflight included, goes through the gate:
/// 1. Runs the gate on the request head
/// 2. On success inserts the resolved [`authn_gate_sdk::Identity`] into the
///    request extensions and continues
/// 3. On failure answers directly (`401` for missing credentials)
pub async fn authn_middleware(
    State(state): State<AuthnGateState>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();
    let authn_request = AuthnRequest::from_parts(&parts);

    match state.gate.attempt_authentication(&authn_request).await {
        Ok(identity) => {
            parts.extensions.insert(identity);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(err) => gate_error_to_response(err),
    }
}

/// Convert `AuthnGateError` to an HTTP response.
fn gate_error_to_response(err: AuthnGateError) -> Response {
    match err {
        AuthnGateError::AuthenticationFailed(msg) => {
            tracing::debug!("AuthN rejected: {msg}");
            (StatusCode::UNAUTHORIZED, msg).into_response()
        }
        AuthnGateError::Provider(e) => provider_error_to_response(e),
        AuthnGateError::AnonymousProduction(e) => {
            tracing::error!("Anonymous identity unavailable: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal authentication error",
            )
                .into_response()
        }
    }
}

fn provider_error_to_response(err: IdentityProviderError) -> Response {
    match err {
        IdentityProviderError::Unauthorized(msg) => {
            tracing::debug!("Identity provider rejected credentials: {msg}");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
        IdentityProviderError::Forbidden(msg) => {
            tracing::debug!("Identity provider refused identity: {msg}");
            (StatusCode::FORBIDDEN, "Forbidden").into_response()
        }
        IdentityProviderError::NoProviderAvailable => {
            tracing::error!("No identity provider available");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            )
                .into_response()
        }
        IdentityProviderError::ServiceUnavailable(msg) => {
            tracing::error!("Identity provider unavailable: {msg}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            )
                .into_response()
        }
        IdentityProviderError::Internal(msg) => {
            tracing::error!("Identity provider internal error: {msg}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal authentication error",
            )
                .into_response()
        }
    }
}
