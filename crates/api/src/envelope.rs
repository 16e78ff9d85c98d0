//! Response envelopes the API wraps its payloads in.

use serde::Deserialize;

/// A paginated list response: `{ "data": [...], "total": N }`.
///
/// Both fields default so that endpoints which omit `total` (or return an
/// empty body shape) still decode.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

/// A single-record response: `{ "data": {...} }`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Login response. Some deployments nest the token under `data`, others
/// return it top-level; [`LoginResponse::token`] resolves the precedence.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    data: Option<LoginData>,
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    #[serde(default)]
    token: Option<String>,
}

impl LoginResponse {
    /// The bearer token, preferring `data.token` over the top-level field.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.token.as_deref())
            .or(self.token.as_deref())
    }
}

/// Mutation acknowledgement: `{ "success": true, "message": "..." }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_defaults_missing_fields() {
        let envelope: ListEnvelope<u32> = serde_json::from_str("{}").expect("decodes");
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.total, 0);
    }

    #[test]
    fn test_list_envelope_decodes_both_fields() {
        let envelope: ListEnvelope<u32> =
            serde_json::from_str(r#"{"data":[1,2,3],"total":42}"#).expect("decodes");
        assert_eq!(envelope.data, vec![1, 2, 3]);
        assert_eq!(envelope.total, 42);
    }

    #[test]
    fn test_login_token_prefers_nested() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"data":{"token":"nested"},"token":"flat"}"#).expect("decodes");
        assert_eq!(response.token(), Some("nested"));
    }

    #[test]
    fn test_login_token_falls_back_to_top_level() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"flat"}"#).expect("decodes");
        assert_eq!(response.token(), Some("flat"));

        let response: LoginResponse =
            serde_json::from_str(r#"{"data":{},"token":"flat"}"#).expect("decodes");
        assert_eq!(response.token(), Some("flat"));
    }

    #[test]
    fn test_login_token_absent() {
        let response: LoginResponse = serde_json::from_str(r#"{"data":{}}"#).expect("decodes");
        assert_eq!(response.token(), None);
    }
}
