//! # roomhub-entity
//!
//! Domain models for RoomHub. Pure data types with serde and sqlx derives;
//! no business logic beyond small derived properties.

pub mod reservation;
pub mod user;

pub use reservation::{NewReservation, Reservation, Room};
pub use user::{NewUser, User};
