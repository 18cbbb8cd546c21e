//! Request DTOs.
//!
//! Reservation requests deliberately carry only the slot fields; the
//! owner is taken from the verified token, never from the body, and
//! unknown body fields are ignored on deserialization.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// POST /api/auth/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account identity.
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email is too long")
    )]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        custom(function = password_complexity)
    )]
    pub password: String,
}

/// POST /api/auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /api/reservations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    /// Calendar day, `YYYY-MM-DD`.
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    /// Start time, `HH:MM`.
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
    /// Room name.
    #[validate(length(min = 1, message = "Room is required"))]
    pub room: String,
}

/// Passwords need a lowercase letter, an uppercase letter, a digit,
/// and a special character.
fn password_complexity(password: &str) -> Result<(), ValidationError> {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| "@$!%*?&#".contains(c));

    if has_lower && has_upper && has_digit && has_special {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_complexity");
        err.message = Some(
            "Password must include a lowercase letter, an uppercase letter, a digit, and a special character"
                .into(),
        );
        Err(err)
    }
}
