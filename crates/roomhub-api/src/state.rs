//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use roomhub_auth::jwt::decoder::JwtDecoder;
use roomhub_auth::jwt::encoder::JwtEncoder;
use roomhub_auth::password::PasswordHasher;
use roomhub_core::config::AppConfig;
use roomhub_core::result::AppResult;
use roomhub_database::store::{ReservationStore, UserStore};
use roomhub_service::{AuthService, ReservationService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration, login, and profile
    pub auth_service: Arc<AuthService>,
    /// Reservation lifecycle
    pub reservation_service: Arc<ReservationService>,
}

impl AppState {
    /// Wires the services over the given stores.
    ///
    /// Fails if the password hasher cannot be initialized.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        reservations: Arc<dyn ReservationStore>,
    ) -> AppResult<Self> {
        let hasher = Arc::new(PasswordHasher::new()?);
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = Arc::new(JwtDecoder::new(&config.auth));

        Ok(Self {
            config: Arc::new(config),
            jwt_decoder: decoder,
            auth_service: Arc::new(AuthService::new(users, hasher, encoder)),
            reservation_service: Arc::new(ReservationService::new(reservations)),
        })
    }
}
