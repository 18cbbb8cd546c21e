//! Registration and login — the credential trust boundary.

use std::sync::Arc;

use tracing::{info, warn};

use roomhub_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use roomhub_auth::password::PasswordHasher;
use roomhub_core::error::AppError;
use roomhub_database::store::UserStore;
use roomhub_entity::{NewUser, User};

use crate::context::RequestContext;

/// Generic login failure message. Unknown identity and wrong password are
/// deliberately indistinguishable to the caller.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Generic registration failure message; must not confirm that the
/// identity already exists.
const REGISTRATION_FAILED: &str =
    "Could not complete the registration. Check the data and try again.";

/// Handles registration, login, and profile lookup.
#[derive(Clone)]
pub struct AuthService {
    /// User persistence.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The issued credential.
    pub token: IssuedToken,
    /// The authenticated user.
    pub user: User,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Registers a new user.
    ///
    /// The returned record carries the identity and creation time only;
    /// the hash never leaves the server.
    pub async fn register(&self, email: &str, password: &str, ip: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        if self.users.find_by_email(&email).await?.is_some() {
            warn!(email = %email, ip = %ip, "Registration attempt for existing identity");
            return Err(AppError::duplicate_identity(REGISTRATION_FAILED));
        }

        let password_hash = self.hasher.hash_password(password)?;

        // The store's unique constraint is the backstop for a concurrent
        // registration that slipped past the check above.
        let user = self
            .users
            .insert(&NewUser {
                email: email.clone(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, ip = %ip, "User registered");
        Ok(user)
    }

    /// Authenticates a user and issues a time-bounded token.
    ///
    /// When no account matches the identity, a dummy verification of
    /// equivalent cost still runs before failing, so response latency does
    /// not reveal whether the account exists.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip: &str,
    ) -> Result<LoginOutcome, AppError> {
        let email = normalize_email(email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            self.hasher.dummy_verify(password);
            warn!(email = %email, ip = %ip, outcome = "unknown_identity", "Login failed");
            return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(email = %email, ip = %ip, outcome = "wrong_password", "Login failed");
            return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
        }

        let token = self.encoder.issue(&user)?;
        info!(user_id = %user.id, email = %user.email, ip = %ip, outcome = "success", "Login");

        Ok(LoginOutcome { token, user })
    }

    /// Returns the authenticated caller's own record.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

/// Normalize an identity key: trim surrounding whitespace and lowercase.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
