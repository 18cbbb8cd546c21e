//! In-memory store implementations.
//!
//! Mirror the PostgreSQL repositories' semantics — including atomic
//! enforcement of the identity and slot uniqueness constraints — so that
//! service and HTTP tests can run without a live database. The uniqueness
//! check happens inside the lock, which gives inserts the same
//! all-or-nothing behavior as the database constraints.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use roomhub_core::{AppError, AppResult};
use roomhub_entity::{NewReservation, NewUser, Reservation, Room, User};

use crate::repositories::reservation::slot_conflict_error;
use crate::store::{ReservationStore, UserStore};

/// In-memory user store with a unique identity key.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().expect("user store lock poisoned");
        Ok(users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.lock().expect("user store lock poisoned");
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, data: &NewUser) -> AppResult<User> {
        let mut users = self.users.lock().expect("user store lock poisoned");
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&data.email)) {
            return Err(AppError::duplicate_identity(
                "Could not complete the registration. Check the data and try again.",
            ));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

/// In-memory reservation store with an atomic slot uniqueness guard.
#[derive(Debug, Default)]
pub struct MemoryReservationStore {
    rows: Mutex<Vec<Reservation>>,
}

impl MemoryReservationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    async fn find_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        room: Room,
    ) -> AppResult<Option<Reservation>> {
        let rows = self.rows.lock().expect("reservation store lock poisoned");
        Ok(rows
            .iter()
            .find(|r| r.date == date && r.time == time && r.room == room)
            .cloned())
    }

    async fn insert(&self, data: &NewReservation) -> AppResult<Reservation> {
        let mut rows = self.rows.lock().expect("reservation store lock poisoned");
        // Check-and-insert under the lock, like the DB unique constraint.
        if rows
            .iter()
            .any(|r| r.date == data.date && r.time == data.time && r.room == data.room)
        {
            return Err(slot_conflict_error(data.date, data.time, data.room));
        }
        let now = Utc::now();
        let reservation = Reservation {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            date: data.date,
            time: data.time,
            room: data.room,
            created_at: now,
            updated_at: now,
        };
        rows.push(reservation.clone());
        Ok(reservation)
    }

    async fn find_by_owner(&self, owner: Uuid) -> AppResult<Vec<Reservation>> {
        let rows = self.rows.lock().expect("reservation store lock poisoned");
        let mut mine: Vec<Reservation> =
            rows.iter().filter(|r| r.user_id == owner).cloned().collect();
        mine.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
        Ok(mine)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reservation>> {
        let rows = self.rows.lock().expect("reservation store lock poisoned");
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().expect("reservation store lock poisoned");
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }
}
