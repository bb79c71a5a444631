//! Login Use Case
//!
//! Verifies credentials and issues a signed access token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::{self, Claims};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input (already boundary-validated)
pub struct LoginInput {
    pub email: Email,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed bearer token, valid for the configured TTL
    pub access_token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // A user without a stored hash has no local-password login path
        let password_hash = user
            .password_hash
            .as_ref()
            .ok_or(AuthError::InvalidCredentials)?;

        // Policy violations on the supplied password cannot possibly
        // match a stored hash; fold them into the same failure
        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = Claims::new(
            user.user_id.into_uuid(),
            user.email.as_str().to_string(),
            user.role.code().to_string(),
            self.config.token_ttl_secs(),
        );
        let access_token = token::issue_token(&claims, &self.config.token_secret)?;

        tracing::info!(
            user_id = %user.user_id,
            "User logged in"
        );

        Ok(LoginOutput { access_token })
    }
}
