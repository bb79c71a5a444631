//! Register Use Case
//!
//! Creates a new user account from email + password.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{AuthError, AuthResult, is_unique_violation};

/// Register input (already boundary-validated)
#[derive(Debug)]
pub struct RegisterInput {
    pub email: Email,
    pub password: String,
    pub role: Option<UserRole>,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        // Validate password policy before any store access
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(vec![e.to_string()]))?;

        // Duplicate email pre-check (exact, case-sensitive)
        if self.user_repo.exists_by_email(&input.email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(
            input.email,
            password_hash,
            input.role.unwrap_or_default(),
        );

        // A concurrent create racing on the same email can pass the
        // pre-check and still hit the unique index; surface that as the
        // same Conflict.
        if let Err(e) = self.user_repo.create(&user).await {
            return Err(match e {
                AuthError::Database(db) if is_unique_violation(&db) => AuthError::EmailTaken,
                other => other,
            });
        }

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User registered"
        );

        Ok(user)
    }
}
