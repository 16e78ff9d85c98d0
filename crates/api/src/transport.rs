//! Shared request path for every resource client.

use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::session::Session;

/// Fallback message when an error response carries no usable body.
const GENERIC_FAILURE: &str = "API request failed";

/// Client for the Velvetine storefront API.
///
/// Cheap to clone; clones share the underlying connection pool and the
/// [`Session`]. Resource methods live in [`crate::resources`], split by API
/// surface, and all funnel through the private `execute` path here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    session: Session,
}

impl ApiClient {
    /// Create a client over an existing session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            http: Client::new(),
            session,
        }
    }

    /// The session this client authenticates with.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }

    /// Absolute URL for an API path like `/api/v1/product/list`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        let base = self.session.base_url();
        format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach the bearer token when the session has one. Unauthenticated
    /// requests (login, public lists) go out bare.
    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// Fail fast on admin endpoints when nobody is logged in, instead of
    /// bouncing off the server's 401.
    pub(crate) fn require_token(&self) -> Result<(), ApiError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(ApiError::MissingToken)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.http.get(self.endpoint(path)));
        self.execute(request).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(self.http.request(method, self.endpoint(path)))
            .json(body);
        self.execute(request).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.http.delete(self.endpoint(path)));
        self.execute(request).await
    }

    /// Send a request and decode the JSON body, mapping non-success
    /// statuses to [`ApiError::Status`].
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(status = %status, len = bytes.len(), "API response");

        if !status.is_success() {
            return Err(error_for_status(status, &bytes));
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))
    }

    /// Unauthenticated reachability probe.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable or answers with a
    /// non-success status.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get_json("/health").await
    }
}

/// Build the error for a non-success response, preferring the body's
/// `message` field over a generic one.
pub(crate) fn error_for_status(status: StatusCode, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| GENERIC_FAILURE.to_owned());

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_error_prefers_body_message() {
        let err = error_for_status(
            StatusCode::UNAUTHORIZED,
            br#"{"message":"Invalid credentials"}"#,
        );
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_error_falls_back_on_non_json_body() {
        let err = error_for_status(StatusCode::BAD_GATEWAY, b"<html>502</html>");
        assert_eq!(err.to_string(), GENERIC_FAILURE);
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_error_falls_back_when_message_missing() {
        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, br#"{"error":"boom"}"#);
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_error_falls_back_when_message_not_a_string() {
        let err = error_for_status(StatusCode::BAD_REQUEST, br#"{"message":42}"#);
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_endpoint_joins_without_duplicate_slash() {
        let session = Session::ephemeral();
        let client = ApiClient::new(session);
        assert_eq!(
            client.endpoint("/api/v1/product/list"),
            "https://api.velvetine.shop/api/v1/product/list"
        );
        assert_eq!(
            client.endpoint("api/admin/order/list"),
            "https://api.velvetine.shop/api/admin/order/list"
        );
    }
}
