//! Image upload. The upload endpoint is the least disciplined part of the
//! API: depending on deployment it answers with a bare URL string, a JSON
//! string, or one of several envelope shapes. [`resolve_upload_url`] pins
//! down the precedence.

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::instrument;

use crate::error::ApiError;
use crate::transport::ApiClient;

const GENERIC_UPLOAD_FAILURE: &str = "Upload failed";

impl ApiClient {
    /// Upload an image and return its public URL.
    ///
    /// The file travels as the `image` field of a multipart form.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Upload`] if the server rejects the upload, and
    /// [`ApiError::InvalidResponse`] if the success response contains no
    /// recognizable URL.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        self.require_token()?;
        let part = Part::bytes(bytes).file_name(filename.to_owned());
        let form = Form::new().part("image", part);

        let request = self
            .authorize(self.http().post(self.endpoint("/api/admin/upload/image")))
            .multipart(form);
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Error bodies may be JSON with a message, or arbitrary text.
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .or_else(|| {
                    let trimmed = text.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_owned())
                })
                .unwrap_or_else(|| GENERIC_UPLOAD_FAILURE.to_owned());
            return Err(ApiError::Upload(message));
        }

        // Some deployments answer with the URL as plain text.
        let trimmed = text.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(trimmed.to_owned());
        }

        let value: Value = serde_json::from_str(&text).map_err(|_| {
            ApiError::InvalidResponse("upload response was not a URL or JSON".into())
        })?;
        resolve_upload_url(&value)
    }
}

/// Extract the uploaded file's URL from a JSON upload response.
///
/// Shapes are tried in order:
/// 1. a bare JSON string;
/// 2. `data` as a string;
/// 3. `data.url`;
/// 4. top-level `url`;
/// 5. top-level `imageUrl`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidResponse`] naming the keys that were present
/// when none of the shapes match.
pub fn resolve_upload_url(value: &Value) -> Result<String, ApiError> {
    if let Some(url) = value.as_str() {
        return Ok(url.to_owned());
    }
    if let Some(url) = value.get("data").and_then(Value::as_str) {
        return Ok(url.to_owned());
    }
    if let Some(url) = value
        .get("data")
        .and_then(|data| data.get("url"))
        .and_then(Value::as_str)
    {
        return Ok(url.to_owned());
    }
    if let Some(url) = value.get("url").and_then(Value::as_str) {
        return Ok(url.to_owned());
    }
    if let Some(url) = value.get("imageUrl").and_then(Value::as_str) {
        return Ok(url.to_owned());
    }

    let keys = value
        .as_object()
        .map(|map| map.keys().cloned().collect::<Vec<_>>().join(", "))
        .unwrap_or_default();
    Err(ApiError::InvalidResponse(format!(
        "upload response carried no URL (keys: [{keys}])"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolves_bare_string() {
        let url = resolve_upload_url(&json!("https://cdn/x.jpg")).expect("resolves");
        assert_eq!(url, "https://cdn/x.jpg");
    }

    #[test]
    fn test_resolves_data_string() {
        let url = resolve_upload_url(&json!({"data": "https://cdn/a.jpg"})).expect("resolves");
        assert_eq!(url, "https://cdn/a.jpg");
    }

    #[test]
    fn test_resolves_nested_data_url() {
        let url =
            resolve_upload_url(&json!({"data": {"url": "https://cdn/b.jpg"}})).expect("resolves");
        assert_eq!(url, "https://cdn/b.jpg");
    }

    #[test]
    fn test_resolves_top_level_url() {
        let url = resolve_upload_url(&json!({"url": "https://cdn/c.jpg"})).expect("resolves");
        assert_eq!(url, "https://cdn/c.jpg");
    }

    #[test]
    fn test_resolves_image_url() {
        let url = resolve_upload_url(&json!({"imageUrl": "https://cdn/d.jpg"})).expect("resolves");
        assert_eq!(url, "https://cdn/d.jpg");
    }

    #[test]
    fn test_data_string_wins_over_top_level_url() {
        let url = resolve_upload_url(&json!({
            "data": "https://cdn/data.jpg",
            "url": "https://cdn/url.jpg"
        }))
        .expect("resolves");
        assert_eq!(url, "https://cdn/data.jpg");
    }

    #[test]
    fn test_error_enumerates_keys() {
        let err = resolve_upload_url(&json!({"ok": true, "size": 1024}))
            .expect_err("no URL present");
        let message = err.to_string();
        assert!(message.contains("ok"));
        assert!(message.contains("size"));
    }

    #[test]
    fn test_error_on_non_object() {
        assert!(resolve_upload_url(&json!(42)).is_err());
    }
}
