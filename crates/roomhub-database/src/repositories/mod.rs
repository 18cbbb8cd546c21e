//! PostgreSQL repository implementations.

pub mod reservation;
pub mod user;

pub use reservation::ReservationRepository;
pub use user::UserRepository;
