//! User Commands
//!
//! Session lookup, login, registration and logout.

use crate::models::{LoginCredentials, Registration, User};
use crate::store::Action;
use super::{Api, GatewayError, Result};

impl Api {
    /// The logged in user, if the session cookie is still valid
    pub async fn current_user(&self) -> Result<Action> {
        let user: Option<User> = self.get("users").await?;
        Ok(Action::SetUser { user })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Action> {
        let user: User = self
            .post("auth", &LoginCredentials { email, password })
            .await
            .map_err(GatewayError::into_login_failure)?;
        Ok(Action::SetUser { user: Some(user) })
    }

    pub async fn register(&self, registration: &Registration<'_>) -> Result<Action> {
        let user: User = self
            .post("users", registration)
            .await
            .map_err(GatewayError::into_login_failure)?;
        Ok(Action::SetUser { user: Some(user) })
    }

    pub async fn logout(&self) -> Result<Action> {
        self.delete("auth").await?;
        Ok(Action::SessionEnded)
    }
}
