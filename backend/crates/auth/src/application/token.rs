//! Access Token Issue / Verify
//!
//! Stateless HMAC-SHA256-signed bearer tokens in JWT (HS256) wire
//! format: `base64url(header).base64url(claims).base64url(signature)`.
//! Claims are trusted verbatim until expiry; a stale role change is not
//! reflected until the user logs in again.

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Fixed JOSE header for every issued token
const TOKEN_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Claim set carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id
    pub sub: Uuid,
    /// Email at issue time
    pub email: String,
    /// Role code at issue time ("user" / "admin")
    pub role: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Build a claim set expiring `ttl_secs` from now
    pub fn new(sub: Uuid, email: String, role: String, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub,
            email,
            role,
            iat: now,
            exp: now + ttl_secs,
        }
    }

    /// Whether the claim set is expired at `now` (unix seconds)
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// Sign a claim set into a compact token string
pub fn issue_token(claims: &Claims, secret: &[u8]) -> AuthResult<String> {
    let header_b64 = platform::crypto::to_base64url(TOKEN_HEADER.as_bytes());
    let payload = serde_json::to_vec(claims)
        .map_err(|e| AuthError::Internal(format!("Claims serialization failed: {e}")))?;
    let payload_b64 = platform::crypto::to_base64url(&payload);

    let signing_input = format!("{header_b64}.{payload_b64}");
    let signature = sign(signing_input.as_bytes(), secret);
    let signature_b64 = platform::crypto::to_base64url(&signature);

    Ok(format!("{signing_input}.{signature_b64}"))
}

/// Verify signature and expiry, returning the decoded claim set
///
/// Signature comparison is constant-time (`Mac::verify_slice`). Any
/// structural defect collapses into `TokenInvalid`; only a well-signed
/// but stale token yields `TokenExpired`.
pub fn verify_token(token: &str, secret: &[u8]) -> AuthResult<Claims> {
    let mut parts = token.splitn(3, '.');
    let (Some(header_b64), Some(payload_b64), Some(signature_b64)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::TokenInvalid);
    };

    let signature =
        platform::crypto::from_base64url(signature_b64).map_err(|_| AuthError::TokenInvalid)?;

    let signing_input = format!("{header_b64}.{payload_b64}");
    let mut mac = Hmac::<Sha256>::new_from_slice(secret)
        .map_err(|e| AuthError::Internal(format!("Invalid token secret: {e}")))?;
    mac.update(signing_input.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AuthError::TokenInvalid)?;

    let payload =
        platform::crypto::from_base64url(payload_b64).map_err(|_| AuthError::TokenInvalid)?;
    let claims: Claims = serde_json::from_slice(&payload).map_err(|_| AuthError::TokenInvalid)?;

    if claims.is_expired_at(Utc::now().timestamp()) {
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}

/// Compute the HMAC-SHA256 signature over the signing input
fn sign(data: &[u8], secret: &[u8]) -> Vec<u8> {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> Vec<u8> {
        b"test-secret-test-secret-test-sec".to_vec()
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let sub = Uuid::new_v4();
        let claims = Claims::new(sub, "user@example.com".into(), "admin".into(), 3600);
        let token = issue_token(&claims, &secret()).unwrap();

        // Compact JWT shape
        assert_eq!(token.split('.').count(), 3);

        let decoded = verify_token(&token, &secret()).unwrap();
        assert_eq!(decoded.sub, sub);
        assert_eq!(decoded.email, "user@example.com");
        assert_eq!(decoded.role, "admin");
        assert_eq!(decoded.exp - decoded.iat, 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = Claims::new(Uuid::new_v4(), "user@example.com".into(), "user".into(), -10);
        let token = issue_token(&claims, &secret()).unwrap();
        assert!(matches!(
            verify_token(&token, &secret()),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let claims = Claims::new(Uuid::new_v4(), "user@example.com".into(), "user".into(), 3600);
        let token = issue_token(&claims, &secret()).unwrap();

        // Swap the payload for one claiming the admin role
        let forged_claims =
            Claims::new(claims.sub, "user@example.com".into(), "admin".into(), 3600);
        let forged_payload = platform::crypto::to_base64url(
            &serde_json::to_vec(&forged_claims).unwrap(),
        );
        let mut parts: Vec<&str> = token.split('.').collect();
        parts[1] = &forged_payload;
        let forged = parts.join(".");

        assert!(matches!(
            verify_token(&forged, &secret()),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let claims = Claims::new(Uuid::new_v4(), "user@example.com".into(), "user".into(), 3600);
        let token = issue_token(&claims, &secret()).unwrap();
        assert!(matches!(
            verify_token(&token, b"another-secret"),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            verify_token("not-a-token", &secret()),
            Err(AuthError::TokenInvalid)
        ));
        assert!(matches!(
            verify_token("a.b.c", &secret()),
            Err(AuthError::TokenInvalid)
        ));
        assert!(matches!(
            verify_token("", &secret()),
            Err(AuthError::TokenInvalid)
        ));
    }
}
