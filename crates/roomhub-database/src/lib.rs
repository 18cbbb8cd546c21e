//! # roomhub-database
//!
//! Storage layer for RoomHub. Defines the [`store::UserStore`] and
//! [`store::ReservationStore`] traits that the service layer depends on,
//! the PostgreSQL repositories implementing them, and an in-memory variant
//! with the same uniqueness semantics for tests.
//!
//! The reservation table's unique composite constraint on
//! (date, time, room) is the authoritative guard against double-booking;
//! the repositories translate that constraint violation into the domain
//! slot-conflict error.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use store::{ReservationStore, UserStore};
