//! Landing page hero section commands.
//!
//! # Usage
//!
//! ```bash
//! velvetine hero show
//! velvetine hero set --price 49.99 --rating 4.8 --review-count 230
//! velvetine hero set --image ./hero.jpg
//! ```

use velvetine_console::controllers::HeroSectionEditor;

use super::{client, resolve_image, CliError};

/// Arguments for `hero set`. Only the given fields change.
pub struct SetArgs {
    pub image: Option<String>,
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
}

/// Show the current hero section.
pub async fn show() -> Result<(), CliError> {
    let client = client()?;
    let mut editor = HeroSectionEditor::new();
    editor.load(&client).await?;

    if !editor.exists() {
        tracing::info!("No hero section configured yet");
        return Ok(());
    }
    let content = editor.content();
    tracing::info!("Hero section:");
    tracing::info!("  Image: {}", content.image.as_deref().unwrap_or("-"));
    tracing::info!("  Price: {}", content.price.as_deref().unwrap_or("-"));
    tracing::info!(
        "  Rating: {}",
        content.rating.map_or_else(|| "-".to_owned(), |r| r.to_string())
    );
    tracing::info!(
        "  Reviews: {}",
        content
            .review_count
            .map_or_else(|| "-".to_owned(), |c| c.to_string())
    );
    Ok(())
}

/// Update hero fields, creating the section if it does not exist.
pub async fn set(args: SetArgs) -> Result<(), CliError> {
    let client = client()?;
    let mut editor = HeroSectionEditor::new();
    editor.load(&client).await?;

    if let Some(image) = &args.image {
        let url = resolve_image(&client, image).await?;
        editor.content_mut().image = Some(url);
    }
    if let Some(price) = args.price {
        editor.content_mut().price = Some(price);
    }
    if let Some(rating) = args.rating {
        editor.content_mut().rating = Some(rating);
    }
    if let Some(review_count) = args.review_count {
        editor.content_mut().review_count = Some(review_count);
    }

    editor.save(&client).await?;
    tracing::info!("Hero section saved");
    Ok(())
}
