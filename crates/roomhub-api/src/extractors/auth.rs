//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! verifies it, and injects the caller's context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use roomhub_core::error::AppError;
use roomhub_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Routes that take this parameter are behind the credential gate:
/// a missing, malformed, expired, or otherwise invalid token rejects
/// the request before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::token_missing("Authentication token not provided"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::token_malformed("Invalid token format. Use: Bearer <token>"))?;
        if token.trim().is_empty() {
            return Err(AppError::token_malformed("Invalid token format. Use: Bearer <token>").into());
        }

        let claims = state.jwt_decoder.decode(token)?;

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let ctx = RequestContext::new(claims.user_id(), claims.email, ip_address, user_agent);

        Ok(AuthUser(ctx))
    }
}
