//! Testimonial management commands.
//!
//! # Usage
//!
//! ```bash
//! velvetine testimonials list
//! velvetine testimonials add -n "Dana" -m "Lovely quality" -r 5 -a "Lisbon, PT"
//! velvetine testimonials delete 66a1b2c3
//! ```

use velvetine_console::controllers::TestimonialManager;
use velvetine_core::Rating;

use super::{client, resolve_image, CliError};

/// List one page of testimonials.
pub async fn list(page: u32) -> Result<(), CliError> {
    let client = client()?;
    let mut manager = TestimonialManager::new();
    manager.set_page(page);
    manager.load(&client).await?;

    let pagination = manager.pagination();
    tracing::info!(
        "Testimonials (page {} of {}, {} total):",
        pagination.page,
        pagination.total_pages(),
        pagination.total
    );
    for testimonial in manager.testimonials() {
        let stars = testimonial
            .review
            .map_or_else(|| "-".to_owned(), |rating| rating.to_string());
        tracing::info!(
            "  {}  {stars}*  {:<20}  {}",
            testimonial.id,
            testimonial.user_name,
            testimonial.message
        );
    }
    Ok(())
}

/// Create a testimonial, uploading a local image file if one is given.
pub async fn add(
    name: &str,
    message: &str,
    review: u8,
    address: &str,
    image: Option<&str>,
) -> Result<(), CliError> {
    let review = Rating::new(review)
        .ok_or_else(|| CliError::Input(format!("review must be 1-5, got {review}")))?;

    let client = client()?;
    let mut manager = TestimonialManager::new();
    {
        let form = manager.form_mut();
        form.user_name = name.to_owned();
        form.message = message.to_owned();
        form.review = review;
        form.user_address = address.to_owned();
    }
    if let Some(image) = image {
        let url = resolve_image(&client, image).await?;
        manager.set_image_url(url);
    }

    manager.submit(&client).await?;
    tracing::info!("Testimonial added for {name}");
    Ok(())
}

/// Delete a testimonial.
pub async fn delete(id: &str) -> Result<(), CliError> {
    let client = client()?;
    let mut manager = TestimonialManager::new();
    manager.request_delete(id);
    manager.confirm_delete(&client).await?;
    tracing::info!("Testimonial {id} deleted");
    Ok(())
}
