//! Route definitions for the RoomHub HTTP API.
//!
//! All domain routes are mounted under `/api`; the router receives
//! `AppState` and passes it to every handler via Axum's `State`
//! extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(reservation_routes());

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .fallback(handlers::health::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Reservation CRUD, owner-scoped
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/reservations", post(handlers::reservation::create))
        .route("/reservations", get(handlers::reservation::list))
        .route("/reservations/{id}", get(handlers::reservation::get_one))
        .route("/reservations/{id}", delete(handlers::reservation::delete))
}
