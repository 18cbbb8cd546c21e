//! Request/response DTOs for the HTTP API.

pub mod request;
pub mod response;

use validator::Validate;

use roomhub_core::error::AppError;

/// Runs declarative validation and folds every violation into one
/// caller-visible error with per-field details.
pub fn check<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(|errors| {
        let violations: Vec<serde_json::Value> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    serde_json::json!({ "field": field.as_str(), "message": message })
                })
            })
            .collect();

        AppError::validation("Invalid request data").with_details(serde_json::json!(violations))
    })
}
