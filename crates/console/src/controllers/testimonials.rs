//! Testimonial management screen: paginated list plus a create/edit form
//! whose image comes either from a URL or a local file upload.

use tracing::{debug, error, instrument};

use velvetine_api::resources::{Testimonial, TestimonialPatch, TestimonialPayload};
use velvetine_api::{ApiClient, ApiError};
use velvetine_core::{Pagination, Rating};

use super::{data_url, image_mime_for, InvalidImage};

/// Testimonials shown per page.
pub const TESTIMONIAL_PAGE_SIZE: u32 = 10;

/// Where the form's image comes from. Choosing one source clears the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A URL pasted by the admin.
    Url(String),
    /// A local file, held until submit uploads it.
    File {
        name: String,
        bytes: Vec<u8>,
        /// Inline `data:` URL for the form preview.
        preview: String,
    },
}

/// Form state for creating or editing a testimonial.
#[derive(Debug, Default)]
pub struct TestimonialForm {
    pub message: String,
    pub review: Rating,
    pub user_name: String,
    pub user_address: String,
    pub image: Option<ImageSource>,
}

/// State behind the testimonial management screen.
#[derive(Debug, Default)]
pub struct TestimonialManager {
    testimonials: Vec<Testimonial>,
    total: u64,
    page: u32,
    loading: bool,
    seq: u64,
    form: TestimonialForm,
    edit_id: Option<String>,
    delete_id: Option<String>,
    submitting: bool,
    deleting: bool,
}

impl TestimonialManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub const fn form(&self) -> &TestimonialForm {
        &self.form
    }

    #[must_use]
    pub fn form_mut(&mut self) -> &mut TestimonialForm {
        &mut self.form
    }

    /// Id of the testimonial being edited, if the form is in edit mode.
    #[must_use]
    pub fn edit_id(&self) -> Option<&str> {
        self.edit_id.as_deref()
    }

    /// Id awaiting delete confirmation, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.delete_id.as_deref()
    }

    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        Pagination::new(self.page, TESTIMONIAL_PAGE_SIZE, self.total)
    }

    // ========================================================================
    // Pure transitions
    // ========================================================================

    pub const fn begin_load(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    /// Apply a list response; `false` means a newer load superseded it.
    pub fn apply_list(&mut self, seq: u64, testimonials: Vec<Testimonial>, total: u64) -> bool {
        if seq != self.seq {
            debug!(seq, current = self.seq, "discarding stale testimonial list");
            return false;
        }
        self.testimonials = testimonials;
        self.total = total;
        self.loading = false;
        true
    }

    pub const fn fail_load(&mut self, seq: u64) {
        if seq == self.seq {
            self.loading = false;
        }
    }

    pub const fn set_page(&mut self, page: u32) {
        self.page = if page == 0 { 1 } else { page };
    }

    pub const fn next_page(&mut self) {
        if self.pagination().can_go_next() {
            self.page += 1;
        }
    }

    pub const fn prev_page(&mut self) {
        if self.pagination().can_go_prev() {
            self.page -= 1;
        }
    }

    /// Stage a local file as the form image, replacing any URL.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImage`] if the filename's extension is not a
    /// supported image type.
    pub fn select_image_file(&mut self, name: &str, bytes: Vec<u8>) -> Result<(), InvalidImage> {
        let mime = image_mime_for(name).ok_or_else(|| InvalidImage {
            name: name.to_owned(),
        })?;
        let preview = data_url(mime, &bytes);
        self.form.image = Some(ImageSource::File {
            name: name.to_owned(),
            bytes,
            preview,
        });
        Ok(())
    }

    /// Switch the form image to a pasted URL, dropping any staged file.
    pub fn set_image_url(&mut self, url: String) {
        self.form.image = if url.is_empty() {
            None
        } else {
            Some(ImageSource::Url(url))
        };
    }

    /// Fill the form from an existing testimonial and enter edit mode.
    pub fn open_edit(&mut self, testimonial: &Testimonial) {
        self.edit_id = Some(testimonial.id.clone());
        self.form = TestimonialForm {
            message: testimonial.message.clone(),
            review: testimonial.review.unwrap_or_default(),
            user_name: testimonial.user_name.clone(),
            user_address: testimonial.user_address.clone().unwrap_or_default(),
            image: testimonial.user_image.clone().map(ImageSource::Url),
        };
    }

    /// Clear the form and leave edit mode.
    pub fn reset_form(&mut self) {
        self.form = TestimonialForm::default();
        self.edit_id = None;
    }

    /// Mark a testimonial for deletion, pending confirmation.
    pub fn request_delete(&mut self, id: &str) {
        self.delete_id = Some(id.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.delete_id = None;
    }

    // ========================================================================
    // Async operations
    // ========================================================================

    /// Load the current page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the previous list is kept.
    #[instrument(skip(self, client), fields(page = self.page))]
    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let seq = self.begin_load();
        match client.list_testimonials(self.page, TESTIMONIAL_PAGE_SIZE).await {
            Ok(envelope) => {
                self.apply_list(seq, envelope.data, envelope.total);
                Ok(())
            }
            Err(err) => {
                self.fail_load(seq);
                error!(error = %err, "failed to load testimonials");
                Err(err)
            }
        }
    }

    /// Submit the form: upload a staged image file first, then create or
    /// update depending on edit mode, then reload the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload, the save, or the reload fails. A
    /// failed upload leaves the form intact so the admin can retry.
    #[instrument(skip(self, client))]
    pub async fn submit(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        if self.submitting {
            return Ok(());
        }
        self.submitting = true;
        let result = self.submit_inner(client).await;
        self.submitting = false;

        result?;
        self.reset_form();
        self.load(client).await
    }

    async fn submit_inner(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let image = match &self.form.image {
            Some(ImageSource::Url(url)) => Some(url.clone()),
            Some(ImageSource::File { name, bytes, .. }) => {
                Some(client.upload_image(name, bytes.clone()).await?)
            }
            None => None,
        };

        match &self.edit_id {
            Some(id) => {
                let patch = TestimonialPatch {
                    message: Some(self.form.message.clone()),
                    review: Some(self.form.review),
                    user_name: Some(self.form.user_name.clone()),
                    user_address: Some(self.form.user_address.clone()),
                    user_image: image,
                    is_active: None,
                };
                client.update_testimonial(id, &patch).await?;
            }
            None => {
                let payload = TestimonialPayload {
                    message: self.form.message.clone(),
                    review: self.form.review,
                    user_name: self.form.user_name.clone(),
                    user_address: self.form.user_address.clone(),
                    user_image: image,
                };
                client.add_testimonial(&payload).await?;
            }
        }
        Ok(())
    }

    /// Delete the testimonial marked by [`Self::request_delete`], then
    /// reload the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete or the reload fails.
    #[instrument(skip(self, client))]
    pub async fn confirm_delete(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let Some(id) = self.delete_id.clone() else {
            return Ok(());
        };
        if self.deleting {
            return Ok(());
        }
        self.deleting = true;
        let result = client.delete_testimonial(&id).await;
        self.deleting = false;
        self.delete_id = None;

        result?;
        self.load(client).await
    }
}
