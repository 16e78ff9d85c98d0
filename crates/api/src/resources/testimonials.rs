//! Customer testimonial CRUD.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use velvetine_core::Rating;

use crate::envelope::{Acknowledgement, DataEnvelope, ListEnvelope};
use crate::error::ApiError;
use crate::transport::ApiClient;

/// A stored testimonial.
///
/// The testimonial fields are snake_case on the wire, unlike the rest of
/// the API; only the Mongo timestamps are camelCase.
#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub review: Option<Rating>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_address: Option<String>,
    #[serde(default)]
    pub user_image: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payload for a testimonial.
#[derive(Debug, Clone, Serialize)]
pub struct TestimonialPayload {
    pub message: String,
    pub review: Rating,
    pub user_name: String,
    pub user_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_image: Option<String>,
}

/// Update payload: every field optional so partial edits only send what
/// changed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestimonialPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ApiClient {
    /// List testimonials, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when not logged in, or an error
    /// if the request fails.
    #[instrument(skip(self))]
    pub async fn list_testimonials(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ListEnvelope<Testimonial>, ApiError> {
        self.require_token()?;
        self.get_json(&format!(
            "/api/admin/testimonial/list?page={page}&limit={limit}"
        ))
        .await
    }

    /// Create a testimonial.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when not logged in, or an error
    /// if the server rejects the payload.
    #[instrument(skip(self, payload), fields(user = %payload.user_name))]
    pub async fn add_testimonial(
        &self,
        payload: &TestimonialPayload,
    ) -> Result<Testimonial, ApiError> {
        self.require_token()?;
        let envelope: DataEnvelope<Testimonial> = self
            .send_json(reqwest::Method::POST, "/api/admin/testimonial/add", payload)
            .await?;
        Ok(envelope.data)
    }

    /// Partially update a testimonial.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when not logged in, or an error
    /// if the testimonial does not exist.
    #[instrument(skip(self, patch))]
    pub async fn update_testimonial(
        &self,
        id: &str,
        patch: &TestimonialPatch,
    ) -> Result<Testimonial, ApiError> {
        self.require_token()?;
        let envelope: DataEnvelope<Testimonial> = self
            .send_json(
                reqwest::Method::PUT,
                &format!("/api/admin/testimonial/update/{id}"),
                patch,
            )
            .await?;
        Ok(envelope.data)
    }

    /// Delete a testimonial.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when not logged in, or an error
    /// if the testimonial does not exist.
    #[instrument(skip(self))]
    pub async fn delete_testimonial(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.require_token()?;
        self.delete_json(&format!("/api/admin/testimonial/delete/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_testimonial_tolerates_sparse_documents() {
        let testimonial: Testimonial =
            serde_json::from_str(r#"{"_id":"t1","message":"Lovely."}"#).expect("decodes");
        assert_eq!(testimonial.id, "t1");
        assert!(testimonial.review.is_none());
        assert!(testimonial.user_image.is_none());
    }

    #[test]
    fn test_testimonial_reads_snake_case_wire_fields() {
        let testimonial: Testimonial = serde_json::from_str(
            r#"{
                "_id": "t1",
                "message": "Lovely.",
                "review": 4,
                "user_name": "Dana Reis",
                "user_address": "Lisbon, PT",
                "user_image": "https://cdn/u.jpg",
                "is_active": true,
                "createdAt": "2026-07-15T18:00:00Z"
            }"#,
        )
        .expect("decodes");
        assert_eq!(testimonial.user_name, "Dana Reis");
        assert_eq!(testimonial.user_address.as_deref(), Some("Lisbon, PT"));
        assert_eq!(testimonial.user_image.as_deref(), Some("https://cdn/u.jpg"));
        assert_eq!(testimonial.is_active, Some(true));
        assert!(testimonial.created_at.is_some());
    }

    #[test]
    fn test_payload_uses_snake_case_and_omits_absent_image() {
        let payload = TestimonialPayload {
            message: "Great quality".into(),
            review: Rating::clamped(5),
            user_name: "Dana".into(),
            user_address: "Lisbon, PT".into(),
            user_image: None,
        };
        let json = serde_json::to_value(&payload).expect("serializes");
        assert!(json.get("user_image").is_none());
        assert!(json.get("userName").is_none());
        assert_eq!(json["user_name"], "Dana");
        assert_eq!(json["user_address"], "Lisbon, PT");
        assert_eq!(json["review"], 5);
    }

    #[test]
    fn test_patch_sends_only_set_fields() {
        let patch = TestimonialPatch {
            message: Some("Edited".into()),
            ..TestimonialPatch::default()
        };
        let json = serde_json::to_value(&patch).expect("serializes");
        assert_eq!(json.as_object().map(serde_json::Map::len), Some(1));
        assert_eq!(json["message"], "Edited");
    }

    #[tokio::test]
    async fn test_admin_calls_fail_fast_without_token() {
        let client = ApiClient::new(Session::ephemeral());
        let err = client
            .delete_testimonial("t1")
            .await
            .expect_err("no token stored");
        assert!(matches!(err, ApiError::MissingToken));
    }
}
