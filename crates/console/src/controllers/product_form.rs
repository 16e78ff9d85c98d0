//! Product create/edit form: draft fields, tag toggles, colour variants and
//! per-variant image uploads.

use std::collections::HashMap;

use tracing::{error, instrument};
use uuid::Uuid;

use velvetine_api::resources::{ColorVariantPayload, ProductPayload, ProductRecord};
use velvetine_api::{ApiClient, ApiError};
use velvetine_core::ProductTag;

use super::{data_url, image_mime_for, InvalidImage};

/// A colour variant row on the form. The id is local to the form and never
/// sent to the API; it keys the per-variant upload state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorVariant {
    pub id: Uuid,
    pub color: String,
    pub color_name: String,
    pub image: Option<String>,
}

impl ColorVariant {
    /// The variant every new form starts with.
    #[must_use]
    pub fn default_gray() -> Self {
        Self {
            id: Uuid::new_v4(),
            color: "#374151".into(),
            color_name: "Gray".into(),
            image: None,
        }
    }

    /// The variant added by the "add variant" button.
    #[must_use]
    pub fn default_black() -> Self {
        Self {
            id: Uuid::new_v4(),
            color: "#000000".into(),
            color_name: String::new(),
            image: None,
        }
    }
}

/// Upload lifecycle of one variant's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Done,
    Failed,
}

/// Draft field values, separate from the variant list so edit mode can load
/// them wholesale.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub original_price: String,
    pub category: String,
}

/// State behind the product form.
#[derive(Debug)]
pub struct ProductFormController {
    draft: ProductDraft,
    tags: Vec<ProductTag>,
    variants: Vec<ColorVariant>,
    uploads: HashMap<Uuid, UploadState>,
    submitting: bool,
}

impl Default for ProductFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductFormController {
    /// Fresh form: one gray variant, no tags.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: ProductDraft::default(),
            tags: Vec::new(),
            variants: vec![ColorVariant::default_gray()],
            uploads: HashMap::new(),
            submitting: false,
        }
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    #[must_use]
    pub const fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    #[must_use]
    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    #[must_use]
    pub fn tags(&self) -> &[ProductTag] {
        &self.tags
    }

    #[must_use]
    pub fn variants(&self) -> &[ColorVariant] {
        &self.variants
    }

    #[must_use]
    pub fn upload_state(&self, variant_id: Uuid) -> UploadState {
        self.uploads.get(&variant_id).copied().unwrap_or_default()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    // ========================================================================
    // Pure transitions
    // ========================================================================

    /// Toggle a tag's membership.
    pub fn toggle_tag(&mut self, tag: ProductTag) {
        if let Some(position) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(position);
        } else {
            self.tags.push(tag);
        }
    }

    /// Append a black variant row.
    pub fn add_variant(&mut self) -> Uuid {
        let variant = ColorVariant::default_black();
        let id = variant.id;
        self.variants.push(variant);
        id
    }

    /// Remove a variant row. The form always keeps at least one variant;
    /// removing the last one is a no-op.
    pub fn remove_variant(&mut self, id: Uuid) {
        if self.variants.len() <= 1 {
            return;
        }
        self.variants.retain(|variant| variant.id != id);
        self.uploads.remove(&id);
    }

    /// Mutable access to a variant row.
    pub fn variant_mut(&mut self, id: Uuid) -> Option<&mut ColorVariant> {
        self.variants.iter_mut().find(|variant| variant.id == id)
    }

    /// Set a variant's image to an inline preview of a local file. The real
    /// URL arrives via [`Self::upload_variant_image`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImage`] if the file is not a supported image type.
    pub fn set_image_preview(
        &mut self,
        id: Uuid,
        name: &str,
        bytes: &[u8],
    ) -> Result<(), InvalidImage> {
        let mime = image_mime_for(name).ok_or_else(|| InvalidImage {
            name: name.to_owned(),
        })?;
        let preview = data_url(mime, bytes);
        if let Some(variant) = self.variant_mut(id) {
            variant.image = Some(preview);
        }
        Ok(())
    }

    /// Reset to a fresh form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fill the form from an existing product for editing.
    pub fn load_record(&mut self, record: &ProductRecord) {
        self.draft = ProductDraft {
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price.clone().unwrap_or_default(),
            original_price: record.original_price.clone().unwrap_or_default(),
            category: record.category.clone().unwrap_or_default(),
        };
        self.tags = record.tags.clone();
        self.variants = record
            .color_variants
            .iter()
            .map(|variant| ColorVariant {
                id: Uuid::new_v4(),
                color: variant.color.clone(),
                color_name: variant.color_name.clone(),
                image: variant.image.clone(),
            })
            .collect();
        if self.variants.is_empty() {
            self.variants.push(ColorVariant::default_gray());
        }
        self.uploads.clear();
    }

    /// Fill the form from a draft payload, used when a collection slot is
    /// re-opened for editing.
    pub fn load_payload(&mut self, payload: &ProductPayload) {
        self.draft = ProductDraft {
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price.clone(),
            original_price: payload.original_price.clone().unwrap_or_default(),
            category: payload.category.clone().unwrap_or_default(),
        };
        self.tags = payload.tags.clone();
        self.variants = payload
            .color_variants
            .iter()
            .map(|variant| ColorVariant {
                id: Uuid::new_v4(),
                color: variant.color.clone(),
                color_name: variant.color_name.clone(),
                image: variant.image.clone(),
            })
            .collect();
        if self.variants.is_empty() {
            self.variants.push(ColorVariant::default_gray());
        }
        self.uploads.clear();
    }

    /// Build the API payload from the current form state.
    #[must_use]
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
            price: self.draft.price.clone(),
            original_price: (!self.draft.original_price.is_empty())
                .then(|| self.draft.original_price.clone()),
            category: (!self.draft.category.is_empty()).then(|| self.draft.category.clone()),
            tags: self.tags.clone(),
            color_variants: self
                .variants
                .iter()
                .map(|variant| ColorVariantPayload {
                    color: variant.color.clone(),
                    color_name: variant.color_name.clone(),
                    image: variant.image.clone(),
                })
                .collect(),
        }
    }

    // ========================================================================
    // Async operations
    // ========================================================================

    /// Upload an image for one variant, tracking per-variant progress so
    /// other rows stay interactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails; the variant's state becomes
    /// [`UploadState::Failed`] and its previous image is kept.
    #[instrument(skip(self, client, bytes), fields(len = bytes.len()))]
    pub async fn upload_variant_image(
        &mut self,
        client: &ApiClient,
        id: Uuid,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        self.uploads.insert(id, UploadState::Uploading);
        match client.upload_image(filename, bytes).await {
            Ok(url) => {
                if let Some(variant) = self.variant_mut(id) {
                    variant.image = Some(url);
                }
                self.uploads.insert(id, UploadState::Done);
                Ok(())
            }
            Err(err) => {
                self.uploads.insert(id, UploadState::Failed);
                error!(error = %err, "variant image upload failed");
                Err(err)
            }
        }
    }

    /// Create a product from the form, resetting it on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the form is kept.
    #[instrument(skip(self, client))]
    pub async fn submit_new(&mut self, client: &ApiClient) -> Result<ProductRecord, ApiError> {
        if self.submitting {
            return Err(ApiError::InvalidResponse("submit already in flight".into()));
        }
        self.submitting = true;
        let result = client.add_product(&self.payload()).await;
        self.submitting = false;

        let record = result?;
        self.reset();
        Ok(record)
    }

    /// Update an existing product from the form.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, client))]
    pub async fn submit_update(
        &mut self,
        client: &ApiClient,
        id: &str,
    ) -> Result<ProductRecord, ApiError> {
        if self.submitting {
            return Err(ApiError::InvalidResponse("submit already in flight".into()));
        }
        self.submitting = true;
        let result = client.update_product(id, &self.payload()).await;
        self.submitting = false;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_form_starts_with_gray_variant() {
        let form = ProductFormController::new();
        assert_eq!(form.variants().len(), 1);
        assert_eq!(form.variants()[0].color, "#374151");
        assert_eq!(form.variants()[0].color_name, "Gray");
    }

    #[test]
    fn test_added_variant_defaults_to_black() {
        let mut form = ProductFormController::new();
        let id = form.add_variant();
        let added = form.variant_mut(id).expect("variant exists");
        assert_eq!(added.color, "#000000");
        assert!(added.color_name.is_empty());
    }

    #[test]
    fn test_last_variant_cannot_be_removed() {
        let mut form = ProductFormController::new();
        let only = form.variants()[0].id;
        form.remove_variant(only);
        assert_eq!(form.variants().len(), 1);

        let second = form.add_variant();
        form.remove_variant(second);
        assert_eq!(form.variants().len(), 1);
        assert_eq!(form.variants()[0].id, only);
    }

    #[test]
    fn test_toggle_tag_twice_removes_it() {
        let mut form = ProductFormController::new();
        form.toggle_tag(ProductTag::Hot);
        form.toggle_tag(ProductTag::Sale);
        assert_eq!(form.tags(), [ProductTag::Hot, ProductTag::Sale]);

        form.toggle_tag(ProductTag::Hot);
        assert_eq!(form.tags(), [ProductTag::Sale]);
    }

    #[test]
    fn test_upload_state_defaults_to_idle() {
        let form = ProductFormController::new();
        assert_eq!(form.upload_state(Uuid::new_v4()), UploadState::Idle);
    }

    #[test]
    fn test_payload_omits_empty_optionals() {
        let mut form = ProductFormController::new();
        form.draft_mut().name = "Velvet Tote".into();
        form.draft_mut().price = "49.99".into();

        let payload = form.payload();
        assert!(payload.original_price.is_none());
        assert!(payload.category.is_none());
        assert_eq!(payload.color_variants.len(), 1);
    }

    #[test]
    fn test_load_record_round_trips_fields() {
        let record: ProductRecord = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Velvet Tote",
            "description": "A tote.",
            "price": "49.99",
            "originalPrice": "59.99",
            "tags": ["HOT"],
            "colorVariants": [
                {"color": "#ff0000", "colorName": "Red", "image": "https://cdn/red.jpg"}
            ]
        }))
        .expect("valid fixture");

        let mut form = ProductFormController::new();
        form.load_record(&record);

        assert_eq!(form.draft().name, "Velvet Tote");
        assert_eq!(form.draft().original_price, "59.99");
        assert_eq!(form.tags(), [ProductTag::Hot]);
        assert_eq!(form.variants()[0].color_name, "Red");

        let payload = form.payload();
        assert_eq!(payload.original_price.as_deref(), Some("59.99"));
        assert_eq!(
            payload.color_variants[0].image.as_deref(),
            Some("https://cdn/red.jpg")
        );
    }

    #[test]
    fn test_load_record_without_variants_gets_default() {
        let record: ProductRecord =
            serde_json::from_value(json!({"_id": "p2", "name": "Bare"})).expect("valid fixture");

        let mut form = ProductFormController::new();
        form.load_record(&record);
        assert_eq!(form.variants().len(), 1);
        assert_eq!(form.variants()[0].color, "#374151");
    }

    #[test]
    fn test_image_preview_requires_supported_type() {
        let mut form = ProductFormController::new();
        let id = form.variants()[0].id;

        assert!(form.set_image_preview(id, "swatch.webp", &[1, 2]).is_ok());
        assert!(form.variants()[0]
            .image
            .as_deref()
            .is_some_and(|url| url.starts_with("data:image/webp;base64,")));

        let err = form
            .set_image_preview(id, "swatch.svg", &[1])
            .expect_err("svg unsupported");
        assert_eq!(err.name, "swatch.svg");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = ProductFormController::new();
        form.draft_mut().name = "X".into();
        form.toggle_tag(ProductTag::New);
        form.add_variant();

        form.reset();
        assert!(form.draft().name.is_empty());
        assert!(form.tags().is_empty());
        assert_eq!(form.variants().len(), 1);
    }
}
