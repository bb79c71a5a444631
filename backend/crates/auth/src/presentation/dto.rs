//! API DTOs (Data Transfer Objects)
//!
//! Every request shape carries an explicit `validate()` that either
//! yields boundary-validated use-case input or the full list of
//! violations, checked before any handler logic runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::login::LoginInput;
use crate::application::register::RegisterInput;
use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::presentation::middleware::Principal;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Optional role code ("user" / "admin"); defaults to "user"
    #[serde(default)]
    pub role: Option<String>,
}

impl RegisterRequest {
    /// Boundary validation: collect every violation before rejecting
    pub fn validate(self) -> Result<RegisterInput, Vec<String>> {
        let mut errors = Vec::new();

        let email = match Email::new(self.email) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push(format!("email: {}", e.message()));
                None
            }
        };

        if self.password.is_empty() {
            errors.push("password: must not be empty".to_string());
        }

        let role = match self.role.as_deref() {
            None => None,
            Some(code) => match UserRole::from_code(code) {
                Some(role) => Some(role),
                None => {
                    errors.push("role: must be one of \"user\", \"admin\"".to_string());
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegisterInput {
            email: email.expect("validated above"),
            password: self.password,
            role,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<LoginInput, Vec<String>> {
        let mut errors = Vec::new();

        let email = match Email::new(self.email) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push(format!("email: {}", e.message()));
                None
            }
        };

        if self.password.is_empty() {
            errors.push("password: must not be empty".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LoginInput {
            email: email.expect("validated above"),
            password: self.password,
        })
    }
}

/// Login response carrying the bearer token
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

// ============================================================================
// User (public view)
// ============================================================================

/// Public user representation; the password hash is never serialized
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            email: user.email.as_str().to_string(),
            role: user.role.code().to_string(),
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Authenticated principal claims, as decoded from the bearer token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

impl From<&Principal> for ProfileResponse {
    fn from(principal: &Principal) -> Self {
        Self {
            user_id: principal.user_id,
            email: principal.email.clone(),
            role: principal.role.code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let req = RegisterRequest {
            email: "user@example.com".into(),
            password: "correct-horse-battery".into(),
            role: Some("admin".into()),
        };
        let input = req.validate().unwrap();
        assert_eq!(input.email.as_str(), "user@example.com");
        assert_eq!(input.role, Some(UserRole::Admin));
    }

    #[test]
    fn test_register_request_collects_all_errors() {
        let req = RegisterRequest {
            email: "not-an-email".into(),
            password: "".into(),
            role: Some("root".into()),
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_login_request_invalid_email() {
        let req = LoginRequest {
            email: "nope".into(),
            password: "whatever-pass".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_user_response_has_no_password_field() {
        let json = serde_json::to_value(UserResponse {
            id: Uuid::new_v4(),
            email: "user@example.com".into(),
            role: "user".into(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("isActive").is_some());
    }
}
