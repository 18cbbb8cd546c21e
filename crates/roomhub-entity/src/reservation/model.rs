//! Reservation entity model.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::room::Room;

/// A booked time slot in a room.
///
/// The (date, time, room) triple is the natural key: at most one
/// reservation may ever exist for it, regardless of owner. Reservations
/// are immutable once created; the only transition out of existence is
/// deletion by the owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// Owner. Always sourced from the verified token subject.
    pub user_id: Uuid,
    /// Calendar day of the reservation.
    pub date: NaiveDate,
    /// Start time within the operating-hours window.
    pub time: NaiveTime,
    /// The reserved room.
    pub room: Room,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// The start time formatted as `HH:MM`.
    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Whether the reservation starts within the next 24 hours.
    pub fn is_upcoming(&self) -> bool {
        let start = self.date.and_time(self.time);
        let now = Local::now().naive_local();
        start > now && start - now <= Duration::hours(24)
    }
}

/// Data required to create a new reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    /// Owner identity, taken from the verified token subject.
    pub user_id: Uuid,
    /// Calendar day.
    pub date: NaiveDate,
    /// Start time.
    pub time: NaiveTime,
    /// Room.
    pub room: Room,
}
