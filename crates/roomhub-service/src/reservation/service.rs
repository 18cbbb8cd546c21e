//! Reservation conflict resolution and owner-scoped queries.

use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use roomhub_core::error::AppError;
use roomhub_database::store::ReservationStore;
use roomhub_entity::{NewReservation, Reservation};

use crate::authz;
use crate::context::RequestContext;
use super::validate::{FieldViolation, validate_slot};

/// Message shared by the missing-record and wrong-owner cases.
const RESERVATION_NOT_FOUND: &str = "Reservation not found";

/// Resolves reservation requests against the slot uniqueness invariant.
#[derive(Clone)]
pub struct ReservationService {
    /// Reservation persistence.
    store: Arc<dyn ReservationStore>,
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }

    /// Creates a reservation for the authenticated caller.
    ///
    /// The owner is always the verified token subject from `ctx`; the raw
    /// request carries only date, time, and room. The availability check
    /// here is advisory — two racing requests can both pass it — so the
    /// store's atomic uniqueness guard is the final arbiter, and a racer
    /// losing at insert time gets the same slot-conflict outcome.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        date: &str,
        time: &str,
        room: &str,
    ) -> Result<Reservation, AppError> {
        let today = Local::now().date_naive();
        let slot = validate_slot(date, time, room, today).map_err(invalid_input)?;

        if let Some(existing) = self.store.find_slot(slot.date, slot.time, slot.room).await? {
            warn!(
                user_id = %ctx.user_id,
                room = %existing.room,
                date = %existing.date,
                time = %existing.time_str(),
                "Reservation conflict"
            );
            return Err(
                AppError::slot_conflict("The room is already reserved at that time").with_details(
                    serde_json::json!({
                        "date": existing.date.format("%Y-%m-%d").to_string(),
                        "time": existing.time_str(),
                        "room": existing.room.as_str(),
                    }),
                ),
            );
        }

        let reservation = self
            .store
            .insert(&NewReservation {
                user_id: ctx.user_id,
                date: slot.date,
                time: slot.time,
                room: slot.room,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            reservation_id = %reservation.id,
            room = %reservation.room,
            date = %reservation.date,
            time = %reservation.time_str(),
            "Reservation created"
        );

        Ok(reservation)
    }

    /// All reservations owned by the caller, ordered by date then time.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<Reservation>, AppError> {
        self.store.find_by_owner(ctx.user_id).await
    }

    /// One reservation owned by the caller.
    ///
    /// A missing record and a record owned by someone else both fail with
    /// the same not-found error, so existence of other users' reservations
    /// never leaks.
    pub async fn get_one(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<Reservation, AppError> {
        self.find_owned(ctx, id).await
    }

    /// Deletes a reservation owned by the caller.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let reservation = self.find_owned(ctx, id).await?;

        // The row can vanish between the ownership check and the delete;
        // only confirm when a row was actually removed.
        if !self.store.delete(reservation.id).await? {
            return Err(AppError::not_found(RESERVATION_NOT_FOUND));
        }
        info!(user_id = %ctx.user_id, reservation_id = %reservation.id, "Reservation deleted");
        Ok(())
    }

    async fn find_owned(&self, ctx: &RequestContext, id: Uuid) -> Result<Reservation, AppError> {
        match self.store.find_by_id(id).await? {
            Some(r) if authz::owns(r.user_id, ctx.user_id) => Ok(r),
            Some(r) => {
                warn!(
                    user_id = %ctx.user_id,
                    reservation_id = %r.id,
                    "Denied access to another user's reservation"
                );
                Err(AppError::not_found(RESERVATION_NOT_FOUND))
            }
            None => Err(AppError::not_found(RESERVATION_NOT_FOUND)),
        }
    }
}

/// Fold field violations into one caller-visible validation error.
fn invalid_input(violations: Vec<FieldViolation>) -> AppError {
    AppError::validation("Invalid reservation data").with_details(
        serde_json::json!(violations
            .iter()
            .map(|v| serde_json::json!({ "field": v.field, "message": v.message }))
            .collect::<Vec<_>>()),
    )
}
