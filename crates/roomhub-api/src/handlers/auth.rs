//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::dto;
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    dto::check(&req)?;

    let ip = super::client_ip(&headers);
    let user = state
        .auth_service
        .register(&req.email, &req.password, &ip)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(&user))),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    dto::check(&req)?;

    let ip = super::client_ip(&headers);
    let outcome = state
        .auth_service
        .login(&req.email, &req.password, &ip)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: outcome.token.token,
        expires_at: outcome.token.expires_at,
        expires_in_seconds: outcome.token.expires_in_seconds,
        user: UserResponse::from(&outcome.user),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.auth_service.profile(auth.context()).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}
