//! Request-boundary identity resolution.
//!
//! Turns a raw `Authorization` header value into a [`CallerId`]. No ownership
//! checks happen here; the stores enforce those.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::errors::AuthError;
use super::service::CredentialService;
use crate::errors::ServiceError;

pub const BEARER_SCHEME: &str = "Bearer";

/// Authenticated user for the remainder of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerId(pub i32);

#[derive(Clone)]
pub struct IdentityResolver {
    credentials: Arc<CredentialService>,
}

impl IdentityResolver {
    pub fn new(credentials: Arc<CredentialService>) -> Self { Self { credentials } }

    pub fn resolve(&self, header: Option<&str>) -> Result<CallerId, ServiceError> {
        let header = match header {
            Some(h) if !h.is_empty() => h,
            _ => {
                warn!("missing Authorization header");
                return Err(AuthError::EmptyHeader.into());
            }
        };
        let token = bearer_token(header).ok_or_else(|| {
            warn!("invalid Authorization format (expect Bearer)");
            AuthError::MalformedHeader
        })?;
        self.credentials.parse_token(token).map(CallerId)
    }
}

/// Exactly `"Bearer <token>"`, single space, non-empty token.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::{SignInInput, SignUpInput};
    use crate::auth::service::AuthConfig;
    use crate::storage::memory::MemoryStore;

    fn resolver() -> (IdentityResolver, Arc<CredentialService>) {
        let creds = Arc::new(
            CredentialService::new(Arc::new(MemoryStore::default()), AuthConfig::new("resolver-key", "resolver-salt")).unwrap(),
        );
        (IdentityResolver::new(creds.clone()), creds)
    }

    fn auth_kind(res: Result<CallerId, ServiceError>) -> AuthError {
        match res {
            Err(ServiceError::Authentication(kind)) => kind,
            other => panic!("expected authentication error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn valid_bearer_resolves_to_user() {
        let (r, creds) = resolver();
        let id = creds
            .create_user(SignUpInput { name: "Ann".into(), username: "ann".into(), password: "pw".into() })
            .await
            .unwrap();
        let token = creds.generate_token(SignInInput { username: "ann".into(), password: "pw".into() }).await.unwrap();
        let header = format!("Bearer {token}");
        assert_eq!(r.resolve(Some(&header)).unwrap(), CallerId(id));
    }

    #[test]
    fn missing_or_empty_header() {
        let (r, _) = resolver();
        assert_eq!(auth_kind(r.resolve(None)), AuthError::EmptyHeader);
        assert_eq!(auth_kind(r.resolve(Some(""))), AuthError::EmptyHeader);
    }

    #[test]
    fn malformed_header_shapes() {
        let (r, _) = resolver();
        for h in ["Bearer", "Bearer ", "Basic abc", "Bearer a b", "token"] {
            assert_eq!(auth_kind(r.resolve(Some(h))), AuthError::MalformedHeader, "header {h:?}");
        }
    }

    #[test]
    fn token_failure_is_passed_through() {
        let (r, _) = resolver();
        assert!(matches!(auth_kind(r.resolve(Some("Bearer garbage"))), AuthError::MalformedToken(_)));
    }
}
