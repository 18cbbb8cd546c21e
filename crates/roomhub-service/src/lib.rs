//! # roomhub-service
//!
//! Business logic for RoomHub. [`auth::AuthService`] owns the credential
//! trust boundary (registration, login, token issuance); the reservation
//! side lives in [`reservation::ReservationService`], which resolves slot
//! conflicts with a check-then-insert backed by the storage layer's
//! uniqueness constraint.

pub mod auth;
pub mod authz;
pub mod context;
pub mod reservation;

pub use auth::AuthService;
pub use context::RequestContext;
pub use reservation::ReservationService;
