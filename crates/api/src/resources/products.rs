//! Product catalogue CRUD.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use velvetine_core::ProductTag;

use crate::envelope::{Acknowledgement, DataEnvelope, ListEnvelope};
use crate::error::ApiError;
use crate::transport::ApiClient;

/// A product as stored by the API. Reads are lenient: older records predate
/// several fields, so everything beyond the id defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<ProductTag>,
    #[serde(default)]
    pub color_variants: Vec<ColorVariantRecord>,
}

/// A stored colour variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariantRecord {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub color_name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Create/update payload for a product. Prices travel as strings, matching
/// what the forms collect and what the API stores.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub tags: Vec<ProductTag>,
    pub color_variants: Vec<ColorVariantPayload>,
}

/// Colour variant within a [`ProductPayload`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariantPayload {
    pub color: String,
    pub color_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ApiClient {
    /// List products, one page at a time, optionally filtered by category
    /// and/or tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        page: u32,
        limit: u32,
        category: Option<&str>,
        tag: Option<ProductTag>,
    ) -> Result<ListEnvelope<ProductRecord>, ApiError> {
        let mut path = format!("/api/v1/product/list?page={page}&limit={limit}");
        if let Some(category) = category {
            path.push_str("&category=");
            path.push_str(&urlencoding::encode(category));
        }
        if let Some(tag) = tag {
            path.push_str("&tag=");
            path.push_str(&urlencoding::encode(tag.as_str()));
        }
        self.get_json(&path).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the
    /// payload.
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn add_product(&self, payload: &ProductPayload) -> Result<ProductRecord, ApiError> {
        self.require_token()?;
        let envelope: DataEnvelope<ProductRecord> = self
            .send_json(reqwest::Method::POST, "/api/admin/product/add", payload)
            .await?;
        Ok(envelope.data)
    }

    /// Replace a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    #[instrument(skip(self, payload))]
    pub async fn update_product(
        &self,
        id: &str,
        payload: &ProductPayload,
    ) -> Result<ProductRecord, ApiError> {
        self.require_token()?;
        let envelope: DataEnvelope<ProductRecord> = self
            .send_json(
                reqwest::Method::PUT,
                &format!("/api/admin/product/update/{id}"),
                payload,
            )
            .await?;
        Ok(envelope.data)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.require_token()?;
        self.delete_json(&format!("/api/admin/product/delete/{id}"))
            .await
    }
}
