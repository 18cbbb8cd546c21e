//! Reservation handlers — create, list, get, delete.
//!
//! Every route here requires a verified token; the owner of each
//! operation is the token subject carried in `AuthUser`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto;
use crate::dto::request::CreateReservationRequest;
use crate::dto::response::{
    ApiResponse, MessageResponse, ReservationListResponse, ReservationResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/reservations
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), ApiError> {
    dto::check(&req)?;

    let reservation = state
        .reservation_service
        .create(auth.context(), &req.date, &req.time, &req.room)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ReservationResponse::from(&reservation))),
    ))
}

/// GET /api/reservations
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ReservationListResponse>>, ApiError> {
    let reservations = state.reservation_service.list_mine(auth.context()).await?;

    let reservations: Vec<ReservationResponse> =
        reservations.iter().map(ReservationResponse::from).collect();

    Ok(Json(ApiResponse::ok(ReservationListResponse {
        count: reservations.len(),
        reservations,
    })))
}

/// GET /api/reservations/{id}
pub async fn get_one(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationResponse>>, ApiError> {
    let reservation = state
        .reservation_service
        .get_one(auth.context(), id)
        .await?;
    Ok(Json(ApiResponse::ok(ReservationResponse::from(&reservation))))
}

/// DELETE /api/reservations/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.reservation_service.delete(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Reservation cancelled".to_string(),
    })))
}
