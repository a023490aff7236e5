//! The admin gate.
//!
//! Callers identify themselves with a plain header; the value is trusted as
//! presented and compared against the one configured administrator identity.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::config::AdminConfig;

/// Identity of the administrator on whose behalf a request runs.
///
/// Inserted into request extensions by [`admin_gate`] and taken by every
/// admin handler as `Extension<AdminContext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct AdminGate {
    identity: String,
    header: HeaderName,
}

impl AdminGate {
    #[must_use]
    pub fn new(identity: impl Into<String>, header: HeaderName) -> Self {
        Self {
            identity: identity.into(),
            header,
        }
    }

    pub fn from_config(config: &AdminConfig) -> anyhow::Result<Self> {
        let header = HeaderName::from_bytes(config.identity_header.as_bytes())?;
        Ok(Self::new(config.email.clone(), header))
    }

    /// Allows the request only when the identity header equals the
    /// configured administrator exactly.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<AdminContext, ApiError> {
        let claim = headers.get(&self.header).and_then(|v| v.to_str().ok());

        match claim {
            Some(email) if email == self.identity => Ok(AdminContext {
                email: email.to_string(),
            }),
            _ => Err(ApiError::forbidden()),
        }
    }
}

pub async fn admin_gate(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = match state.admin_gate().authorize(request.headers()) {
        Ok(context) => context,
        Err(e) => {
            tracing::warn!(path = %request.uri().path(), "Rejected non-admin request");
            return Err(e);
        }
    };

    tracing::Span::current().record("user_id", context.email.as_str());
    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn gate() -> AdminGate {
        AdminGate::new("admin@gmail.com", HeaderName::from_static("x-user-email"))
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-user-email", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_accepts_configured_identity() {
        let context = gate().authorize(&headers("admin@gmail.com")).unwrap();
        assert_eq!(context.email, "admin@gmail.com");
    }

    #[test]
    fn test_rejects_missing_header() {
        let err = gate().authorize(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn test_rejects_other_identities() {
        for claim in ["user@gmail.com", "ADMIN@gmail.com", " admin@gmail.com", ""] {
            assert!(gate().authorize(&headers(claim)).is_err(), "{claim:?}");
        }
    }

    #[test]
    fn test_uses_configured_header() {
        let config = AdminConfig {
            email: "root@shop.test".to_string(),
            identity_header: "x-admin".to_string(),
        };
        let gate = AdminGate::from_config(&config).unwrap();

        let mut h = HeaderMap::new();
        h.insert("x-admin", HeaderValue::from_static("root@shop.test"));
        assert!(gate.authorize(&h).is_ok());

        let mut h = HeaderMap::new();
        h.insert("x-user-email", HeaderValue::from_static("root@shop.test"));
        assert!(gate.authorize(&h).is_err());
    }
}
