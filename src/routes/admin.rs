//! Admin-only routes: user management and dashboard statistics.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::rbac::RequireAdmin;
use crate::models::user::UserResponse;
use crate::services::auth as auth_service;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    7
}

/// GET /admin/dashboard/users-per-day — daily registration counts over
/// the last `days` days (default 7), as a bare JSON array ascending by
/// date.
///
/// Every service failure is caught here and collapsed into a bodyless
/// 500; the caller learns nothing about what broke.
pub async fn users_per_day(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<StatsQuery>,
) -> Response {
    match state.stats.registrations_by_date(query.days).await {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => {
            tracing::error!(error = %err, days = query.days, "Registration stats failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /admin/users — all users, newest first.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = auth_service::list_users(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /admin/user/{id} — a single user by id.
pub async fn user_details(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let user = auth_service::find_user_by_id(&state.db, id).await?;
    Ok(Json(UserResponse::from(user)))
}
