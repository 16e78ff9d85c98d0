//! Screen controllers.

mod collection;
mod hero;
mod orders;
mod product_form;
mod testimonials;

pub use collection::{BestCollectionManager, CollectionFull, CollectionProduct, COLLECTION_CAPACITY};
pub use hero::HeroSectionEditor;
pub use orders::{OrderManager, ORDER_PAGE_SIZE};
pub use product_form::{ColorVariant, ProductDraft, ProductFormController, UploadState};
pub use testimonials::{ImageSource, TestimonialForm, TestimonialManager, TESTIMONIAL_PAGE_SIZE};

use base64::Engine as _;

/// A selected file was not a supported image type.
#[derive(Debug, thiserror::Error)]
#[error("unsupported image file: {name}")]
pub struct InvalidImage {
    pub name: String,
}

/// MIME type for an image filename, judged by extension.
#[must_use]
pub fn image_mime_for(name: &str) -> Option<&'static str> {
    let extension = name.rsplit('.').next()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Inline `data:` URL for previewing an image before upload.
#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}
