//! Authentication services.

pub mod service;

pub use service::{AuthService, LoginOutcome};
