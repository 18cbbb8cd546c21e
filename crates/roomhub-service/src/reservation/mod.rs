//! Reservation services.

pub mod service;
pub mod validate;

pub use service::ReservationService;
