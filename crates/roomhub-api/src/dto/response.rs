//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roomhub_entity::{Reservation, User};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed credential.
    pub token: String,
    /// Credential expiration.
    pub expires_at: DateTime<Utc>,
    /// Seconds until expiration.
    pub expires_in_seconds: i64,
    /// User info.
    pub user: UserResponse,
}

/// Reservation for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    /// Reservation ID.
    pub id: Uuid,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub time: String,
    /// Room name.
    pub room: String,
    /// Whether the slot starts within the next 24 hours.
    pub is_upcoming: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&Reservation> for ReservationResponse {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id,
            date: r.date.format("%Y-%m-%d").to_string(),
            time: r.time_str(),
            room: r.room.as_str().to_string(),
            is_upcoming: r.is_upcoming(),
            created_at: r.created_at,
        }
    }
}

/// Owner-scoped reservation listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationListResponse {
    /// Number of reservations.
    pub count: usize,
    /// Reservations ordered by date then time.
    pub reservations: Vec<ReservationResponse>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Server time.
    pub timestamp: DateTime<Utc>,
}
