//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod reservation;

use axum::http::HeaderMap;

/// Best-effort client address for audit logging.
pub(crate) fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("unknown")
        .to_string()
}
