//! # roomhub-api
//!
//! HTTP API layer for RoomHub: Axum routes, handlers, DTOs, the
//! domain-error-to-HTTP mapping, and the token-verifying `AuthUser`
//! extractor.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiErrorResponse};
pub use router::build_router;
pub use state::AppState;
