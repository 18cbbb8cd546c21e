//! Store traits the service layer depends on.
//!
//! Keeping these as traits lets tests substitute the in-memory stores for
//! the PostgreSQL repositories without a live database.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use roomhub_core::AppResult;
use roomhub_entity::{NewReservation, NewUser, Reservation, Room, User};

/// Persistence operations for users.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by the normalized identity key.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Insert a new user. Fails with a duplicate-identity error when the
    /// email is already taken.
    async fn insert(&self, data: &NewUser) -> AppResult<User>;
}

/// Persistence operations for reservations.
#[async_trait]
pub trait ReservationStore: Send + Sync + 'static {
    /// Find the reservation occupying the given slot, if any.
    async fn find_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        room: Room,
    ) -> AppResult<Option<Reservation>>;

    /// Insert a new reservation. The implementation must enforce slot
    /// uniqueness atomically and fail with a slot-conflict error when the
    /// slot is taken — including when a concurrent insert won the race
    /// after the caller's availability check.
    async fn insert(&self, data: &NewReservation) -> AppResult<Reservation>;

    /// All reservations owned by the given user, ordered by date then time.
    async fn find_by_owner(&self, owner: Uuid) -> AppResult<Vec<Reservation>>;

    /// Find a reservation by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reservation>>;

    /// Delete a reservation by primary key. Returns `true` if deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
