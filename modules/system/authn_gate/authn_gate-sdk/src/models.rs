//! Domain models for the `AuthN` gate.

use http::{HeaderMap, Method};
use serde::Serialize;
use uuid::Uuid;

/// An established identity.
///
/// The gate only ever tests whether an identity is present; the fields are
/// for downstream consumers. Anonymity is a marker set only by
/// [`Identity::anonymous`]; a built identity is never anonymous, whatever
/// its field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    subject_id: Uuid,
    subject_tenant_id: Option<Uuid>,
    token_scopes: Vec<String>,
    #[serde(skip)]
    anonymous: bool,
}

impl Identity {
    /// The well-known anonymous identity: nil subject, no tenant, no scopes.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            subject_id: Uuid::nil(),
            subject_tenant_id: None,
            token_scopes: Vec::new(),
            anonymous: true,
        }
    }

    #[must_use]
    pub fn builder() -> IdentityBuilder {
        IdentityBuilder::default()
    }

    #[inline]
    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    #[inline]
    #[must_use]
    pub fn subject_tenant_id(&self) -> Option<Uuid> {
        self.subject_tenant_id
    }

    #[inline]
    #[must_use]
    pub fn token_scopes(&self) -> &[String] {
        &self.token_scopes
    }

    /// Returns `true` only for the identity produced by [`Identity::anonymous`].
    #[inline]
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }
}

/// Builder for [`Identity`].
#[derive(Debug, Default)]
pub struct IdentityBuilder {
    subject_id: Option<Uuid>,
    subject_tenant_id: Option<Uuid>,
    token_scopes: Vec<String>,
}

impl IdentityBuilder {
    #[must_use]
    pub fn subject_id(mut self, id: Uuid) -> Self {
        self.subject_id = Some(id);
        self
    }

    #[must_use]
    pub fn subject_tenant_id(mut self, id: Uuid) -> Self {
        self.subject_tenant_id = Some(id);
        self
    }

    #[must_use]
    pub fn token_scopes(mut self, scopes: Vec<String>) -> Self {
        self.token_scopes = scopes;
        self
    }

    /// Build the identity. A missing subject falls back to the nil UUID.
    #[must_use]
    pub fn build(self) -> Identity {
        Identity {
            subject_id: self.subject_id.unwrap_or_else(Uuid::nil),
            subject_tenant_id: self.subject_tenant_id,
            token_scopes: self.token_scopes,
            anonymous: false,
        }
    }
}

/// The projection of an inbound request the gate and providers work with.
///
/// The gate reads only [`AuthnRequest::path`]; method and headers are passed
/// through to providers unexamined.
#[derive(Debug, Clone, Default)]
pub struct AuthnRequest {
    path: Option<String>,
    method: Method,
    headers: HeaderMap,
}

impl AuthnRequest {
    #[must_use]
    pub fn new(path: Option<String>, method: Method, headers: HeaderMap) -> Self {
        Self {
            path,
            method,
            headers,
        }
    }

    /// Project an `http` request head.
    #[must_use]
    pub fn from_parts(parts: &http::request::Parts) -> Self {
        Self {
            path: Some(parts.uri.path().to_owned()),
            method: parts.method.clone(),
            headers: parts.headers.clone(),
        }
    }

    /// Convenience constructor for a bare path, mostly for tests.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        Self {
            path: Some(path.to_owned()),
            ..Self::default()
        }
    }

    /// Attach a header, replacing any previous value for the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Request path, if one could be resolved.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Bearer token from the `Authorization` header, without the scheme.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer ").map(str::trim))
    }
}
