//! # roomhub-auth
//!
//! Credential primitives for RoomHub: Argon2id password hashing with a
//! constant-cost dummy verification for timing equalization, and HS256 JWT
//! encoding/decoding with pinned issuer/audience claims and strict expiry.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
