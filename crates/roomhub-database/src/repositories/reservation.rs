//! Reservation repository implementation.
//!
//! The `reservations_slot_key` unique constraint on (date, time, room) is
//! the last line of defense against double-booking: a concurrent insert
//! that races past the service's availability check hits the constraint
//! here and is translated into the same slot-conflict outcome.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use roomhub_core::error::{AppError, ErrorKind};
use roomhub_core::result::AppResult;
use roomhub_entity::{NewReservation, Reservation, Room};

use crate::store::ReservationStore;

/// Repository for reservation persistence, backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the caller-safe slot-conflict error for an occupied slot.
pub(crate) fn slot_conflict_error(date: NaiveDate, time: NaiveTime, room: Room) -> AppError {
    AppError::slot_conflict("The room is already reserved at that time").with_details(
        serde_json::json!({
            "date": date.format("%Y-%m-%d").to_string(),
            "time": time.format("%H:%M").to_string(),
            "room": room.as_str(),
        }),
    )
}

#[async_trait]
impl ReservationStore for ReservationRepository {
    async fn find_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        room: Room,
    ) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE date = $1 AND time = $2 AND room = $3",
        )
        .bind(date)
        .bind(time)
        .bind(room)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query slot", e))
    }

    async fn insert(&self, data: &NewReservation) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (user_id, date, time, room) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.date)
        .bind(data.time)
        .bind(data.room)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("reservations_slot_key") =>
            {
                slot_conflict_error(data.date, data.time, data.room)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create reservation", e),
        })
    }

    async fn find_by_owner(&self, owner: Uuid) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE user_id = $1 ORDER BY date ASC, time ASC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reservations", e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find reservation by id", e)
            })
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reservation", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
