//! Auth Middleware
//!
//! Bearer-token authentication and role gating for protected routes.
//! Routers declare the role set an operation requires; a single
//! middleware verifies the token, builds the request-scoped
//! [`Principal`], and applies [`authorize`].

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::token::{self, Claims};
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthError;

/// Role set meaning "any authenticated principal"
pub const ANY_AUTHENTICATED: &[UserRole] = &[];

/// Role set for admin-only operations
pub const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

/// Authenticated identity attached to a request after token verification
///
/// Claims are trusted verbatim until token expiry; role changes made
/// after issue are not reflected until re-login.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl Principal {
    fn from_claims(claims: &Claims) -> Result<Self, AuthError> {
        let role = UserRole::from_code(&claims.role).ok_or(AuthError::TokenInvalid)?;
        Ok(Self {
            user_id: claims.sub,
            email: claims.email.clone(),
            role,
        })
    }
}

/// Grant access when no restriction is declared, or when the
/// principal's role is a member of the required set
pub fn authorize(role: UserRole, required: &[UserRole]) -> bool {
    required.is_empty() || required.contains(&role)
}

/// Middleware state: token config plus the declared role requirement
#[derive(Clone)]
pub struct RoleGuard {
    pub config: Arc<AuthConfig>,
    pub required: &'static [UserRole],
}

impl RoleGuard {
    pub fn new(config: Arc<AuthConfig>, required: &'static [UserRole]) -> Self {
        Self { config, required }
    }
}

/// Middleware that requires a valid bearer token and a sufficient role
///
/// Missing/invalid/expired tokens reject with 401; a valid principal
/// outside the required role set rejects with 403. On success the
/// [`Principal`] is inserted into request extensions for handlers.
pub async fn require_roles(
    State(guard): State<RoleGuard>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token =
        extract_bearer(req.headers()).ok_or_else(|| AuthError::TokenInvalid.into_response())?;

    let claims = token::verify_token(token, &guard.config.token_secret)
        .map_err(|e| e.into_response())?;

    let principal = Principal::from_claims(&claims).map_err(|e| e.into_response())?;

    if !authorize(principal.role, guard.required) {
        return Err(AuthError::InsufficientRole.into_response());
    }

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_empty_set_allows_everyone() {
        assert!(authorize(UserRole::User, ANY_AUTHENTICATED));
        assert!(authorize(UserRole::Admin, ANY_AUTHENTICATED));
    }

    #[test]
    fn test_authorize_admin_only() {
        assert!(authorize(UserRole::Admin, ADMIN_ONLY));
        assert!(!authorize(UserRole::User, ADMIN_ONLY));
    }

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_bearer_missing_or_malformed() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcg==".parse().unwrap());
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_principal_from_claims_rejects_unknown_role() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.co".into(), "root".into(), 60);
        assert!(matches!(
            Principal::from_claims(&claims),
            Err(AuthError::TokenInvalid)
        ));
    }
}
