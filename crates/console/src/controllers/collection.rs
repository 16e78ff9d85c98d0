//! "Best collection" curation: a capped set of product drafts, built with
//! the product form and saved to the catalogue tagged as best sellers.

use tracing::instrument;
use uuid::Uuid;

use velvetine_api::resources::ProductPayload;
use velvetine_api::{ApiClient, ApiError};
use velvetine_core::ProductTag;

use super::product_form::ProductFormController;

/// Maximum products in the collection.
pub const COLLECTION_CAPACITY: usize = 4;

/// One slot of the collection: a locally-identified product draft.
#[derive(Debug, Clone)]
pub struct CollectionProduct {
    pub id: Uuid,
    pub draft: ProductPayload,
}

/// The collection was already at capacity.
#[derive(Debug, thiserror::Error)]
#[error("collection is full ({COLLECTION_CAPACITY} products)")]
pub struct CollectionFull;

/// State behind the best-collection screen: up to four slots, each edited
/// through the shared product form.
#[derive(Debug, Default)]
pub struct BestCollectionManager {
    products: Vec<CollectionProduct>,
    editing: Option<usize>,
    form: ProductFormController,
}

impl BestCollectionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn products(&self) -> &[CollectionProduct] {
        &self.products
    }

    #[must_use]
    pub const fn form(&self) -> &ProductFormController {
        &self.form
    }

    #[must_use]
    pub fn form_mut(&mut self) -> &mut ProductFormController {
        &mut self.form
    }

    /// Index of the slot being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Whether another product can still be added.
    #[must_use]
    pub fn can_add_more(&self) -> bool {
        self.products.len() < COLLECTION_CAPACITY
    }

    /// The form is shown while editing a slot or while there is room for a
    /// new product.
    #[must_use]
    pub fn form_visible(&self) -> bool {
        self.editing.is_some() || self.can_add_more()
    }

    /// Save the form into the collection: replaces the edited slot, or
    /// appends a new one.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionFull`] when appending to a full collection; the
    /// form is kept so nothing is lost.
    pub fn save(&mut self) -> Result<(), CollectionFull> {
        let draft = self.form.payload();
        match self.editing.take() {
            Some(index) if index < self.products.len() => {
                self.products[index].draft = draft;
            }
            _ => {
                if !self.can_add_more() {
                    return Err(CollectionFull);
                }
                self.products.push(CollectionProduct {
                    id: Uuid::new_v4(),
                    draft,
                });
            }
        }
        self.form.reset();
        Ok(())
    }

    /// Load a slot into the form for editing: draft fields, tags and colour
    /// variants all come back.
    pub fn edit(&mut self, index: usize) {
        if index >= self.products.len() {
            return;
        }
        self.editing = Some(index);
        self.form.load_payload(&self.products[index].draft);
    }

    /// Remove a slot. Resets the form only when that slot was being edited.
    pub fn delete(&mut self, index: usize) {
        if index >= self.products.len() {
            return;
        }
        self.products.remove(index);
        match self.editing {
            Some(editing) if editing == index => {
                self.editing = None;
                self.form.reset();
            }
            Some(editing) if editing > index => {
                self.editing = Some(editing - 1);
            }
            _ => {}
        }
    }

    /// Publish every slot to the catalogue, tagged as best sellers.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; already-published slots are
    /// not rolled back.
    #[instrument(skip(self, client), fields(count = self.products.len()))]
    pub async fn publish(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        for slot in &self.products {
            let mut payload = slot.draft.clone();
            if !payload.tags.contains(&ProductTag::BestSeller) {
                payload.tags.push(ProductTag::BestSeller);
            }
            client.add_product(&payload).await?;
        }
        self.products.clear();
        self.editing = None;
        self.form.reset();
        Ok(())
    }
}
