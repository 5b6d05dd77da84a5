//! Authentication routes: registration and login.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::models::user::{RegisterRequest, UserResponse, UserRole};
use crate::services::auth as auth_service;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email.
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// POST /register — self-service account creation.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = auth_service::register(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /login — authenticate and issue a Bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (user, token) = auth_service::login(
        &state.db,
        &body.username,
        &body.password,
        &state.config.jwt_secret,
        state.config.jwt_expiry_secs,
    )
    .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.config.jwt_expiry_secs,
        username: user.username,
        role: user.role,
    }))
}

/// POST /forgot-password — issue a reset token for the account, if it
/// exists. The response is the same either way.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(body): Json<ForgotPasswordRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth_service::request_password_reset(&state.db, &body.email, &state.config.jwt_secret).await?;
    Ok(Json(serde_json::json!({
        "message": "If the email exists, a password reset link has been sent"
    })))
}

/// POST /reset-password — set a new password from a reset token.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth_service::reset_password(
        &state.db,
        &body.token,
        &body.new_password,
        &state.config.jwt_secret,
    )
    .await?;
    Ok(Json(serde_json::json!({
        "message": "Password reset successfully"
    })))
}
