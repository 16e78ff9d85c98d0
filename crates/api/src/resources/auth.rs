//! Admin authentication.

use secrecy::SecretString;
use serde_json::json;
use tracing::{instrument, warn};

use crate::envelope::{Acknowledgement, LoginResponse};
use crate::error::ApiError;
use crate::transport::ApiClient;

impl ApiClient {
    /// Log in as an admin user and store the bearer token in the session.
    ///
    /// The token is persisted to the session's state file when it has one;
    /// a persistence failure is logged but does not fail the login.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the credentials are rejected,
    /// or the response carries no token.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let response: LoginResponse = self
            .send_json(
                reqwest::Method::POST,
                "/api/admin/auth/login",
                &json!({ "email": email, "password": password }),
            )
            .await?;

        let token = response
            .token()
            .ok_or_else(|| ApiError::InvalidResponse("login response carried no token".into()))?;

        self.session().set_token(SecretString::from(token));
        if let Err(err) = self.session().persist() {
            warn!(error = %err, "failed to persist session after login");
        }
        Ok(())
    }

    /// Register a new admin user. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the
    /// registration.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Acknowledgement, ApiError> {
        self.send_json(
            reqwest::Method::POST,
            "/api/v1/auth/register",
            &json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    /// Drop the session token. Purely client-side; the server keeps no
    /// session state beyond the token itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleared session cannot be persisted.
    pub fn logout(&self) -> Result<(), crate::SessionError> {
        self.session().clear_token();
        self.session().persist()
    }
}
