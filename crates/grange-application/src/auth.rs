//! Authentication flow.
//!
//! Orchestrates the backend auth endpoints against the session store, and
//! decides the start route the way the navigation tree did: login flow when
//! no token is held, farm creation when the account has no farm, otherwise
//! the main flow.

use crate::error::UseCaseError;
use crate::farm_scope::{FarmContext, FarmScope};
use grange_api::auth::{Credentials, Registration};
use grange_core::validate;
use tracing::info;

/// Where the app should land after startup or login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRoute {
    /// No token held; show the login flow.
    Login,
    /// Authenticated but farmless; route to farm creation.
    FarmCreation,
    /// Authenticated with at least one farm.
    Main,
}

pub struct AuthFlow {
    ctx: FarmContext,
}

impl AuthFlow {
    pub fn new(ctx: FarmContext) -> Self {
        Self { ctx }
    }

    /// Exchanges credentials for a token and persists the session.
    ///
    /// The durable write is awaited before the in-memory state flips, so a
    /// failed write leaves the user logged out rather than half logged in.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), UseCaseError> {
        validate::require_non_empty("email", email)?;
        validate::require_non_empty("password", password)?;

        let credentials = Credentials::new(email, password);
        let token = self.ctx.backend().login(&credentials).await?;
        self.ctx.session().login(&token, None).await?;
        info!("login completed");
        Ok(())
    }

    /// Registers a new account. Does not log in; the caller follows up with
    /// `login`.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<String, UseCaseError> {
        validate::require_non_empty("full name", full_name)?;
        validate::require_non_empty("email", email)?;
        validate::require_non_empty("password", password)?;

        let registration = Registration {
            full_name: full_name.to_string(),
            email: email.to_lowercase(),
            phone: phone.to_string(),
            password: password.to_string(),
        };
        Ok(self.ctx.backend().register(&registration).await?)
    }

    /// Clears the session. The bearer token stays valid backend-side until
    /// natural expiry.
    pub async fn logout(&self) -> Result<(), UseCaseError> {
        self.ctx.session().logout().await?;
        Ok(())
    }

    /// Decides the start route for the current session.
    pub async fn start_route(&self) -> Result<StartRoute, UseCaseError> {
        if !self.ctx.session().session().await.is_authenticated {
            return Ok(StartRoute::Login);
        }
        match self.ctx.resolve_scope().await {
            Ok(FarmScope::NoFarm) => Ok(StartRoute::FarmCreation),
            Ok(FarmScope::Selected(_)) => Ok(StartRoute::Main),
            // A rejected token already forced a logout; land on Login.
            Err(e) if e.is_unauthorized() => Ok(StartRoute::Login),
            Err(e) => Err(e),
        }
    }
}
