//! Landing page sections: keyed blobs of page content, of which the hero
//! section is the one the console edits.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::envelope::{DataEnvelope, ListEnvelope};
use crate::error::ApiError;
use crate::transport::ApiClient;

/// Well-known key of the hero section.
pub const HERO_SECTION_KEY: &str = "hero";

/// A stored landing section. `content` keeps the section-specific fields
/// unparsed so one type covers every section kind.
#[derive(Debug, Clone, Deserialize)]
pub struct LandingSection {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(flatten)]
    pub content: Value,
}

/// Editable fields of the hero section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,
}

/// Create/update payload: the key plus the section's own fields, flattened
/// to the top level the way the API expects.
#[derive(Debug, Serialize)]
pub struct SectionPayload<'a, T: Serialize> {
    pub key: &'a str,
    #[serde(flatten)]
    pub content: &'a T,
}

impl ApiClient {
    /// Fetch all landing sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn landing_sections(&self) -> Result<Vec<LandingSection>, ApiError> {
        let envelope: ListEnvelope<LandingSection> =
            self.get_json("/api/v1/landing/sections").await?;
        Ok(envelope.data)
    }

    /// Fetch one landing section by key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with status 404 if no section has the
    /// key; callers that treat an absent section as empty should check
    /// [`ApiError::is_not_found`].
    #[instrument(skip(self))]
    pub async fn landing_section(&self, key: &str) -> Result<LandingSection, ApiError> {
        let envelope: DataEnvelope<LandingSection> = self
            .get_json(&format!(
                "/api/v1/landing/section/{}",
                urlencoding::encode(key)
            ))
            .await?;
        Ok(envelope.data)
    }

    /// Create a landing section.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    #[instrument(skip(self, content))]
    pub async fn add_landing_section<T: Serialize + Sync>(
        &self,
        key: &str,
        content: &T,
    ) -> Result<LandingSection, ApiError> {
        self.require_token()?;
        let envelope: DataEnvelope<LandingSection> = self
            .send_json(
                reqwest::Method::POST,
                "/api/admin/landing/section/add",
                &SectionPayload { key, content },
            )
            .await?;
        Ok(envelope.data)
    }

    /// Update a landing section by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the section does not exist.
    #[instrument(skip(self, content))]
    pub async fn update_landing_section<T: Serialize + Sync>(
        &self,
        id: &str,
        key: &str,
        content: &T,
    ) -> Result<LandingSection, ApiError> {
        self.require_token()?;
        let envelope: DataEnvelope<LandingSection> = self
            .send_json(
                reqwest::Method::PUT,
                &format!("/api/admin/landing/section/update/{id}"),
                &SectionPayload { key, content },
            )
            .await?;
        Ok(envelope.data)
    }
}
