//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, extract::rejection::JsonRejection};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginUseCase, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, UserResponse,
};
use crate::presentation::middleware::Principal;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|e| AuthError::Validation(vec![e.body_text()]))?;
    let input = req.validate().map_err(AuthError::Validation)?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|e| AuthError::Validation(vec![e.body_text()]))?;
    let input = req.validate().map_err(AuthError::Validation)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        access_token: output.access_token,
    }))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/auth/profile
///
/// The principal is populated by the bearer middleware; claims are
/// served verbatim with no store round-trip.
pub async fn profile(Extension(principal): Extension<Principal>) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&principal))
}
