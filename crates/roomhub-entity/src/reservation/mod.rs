//! Reservation entity and the room enumeration.

pub mod model;
pub mod room;

pub use model::{NewReservation, Reservation};
pub use room::Room;
