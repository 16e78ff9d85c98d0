//! Product catalogue commands.
//!
//! # Usage
//!
//! ```bash
//! velvetine products list --tag "BEST SELLER"
//! velvetine products add -n "Velvet Tote" -p 49.99 -t HOT -t SALE
//! velvetine products delete 66a1b2c3
//! ```

use velvetine_console::controllers::ProductFormController;
use velvetine_core::ProductTag;

use super::{client, CliError};

/// Arguments for `products add`.
pub struct AddArgs {
    pub name: String,
    pub description: String,
    pub price: String,
    pub original_price: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<ProductTag>,
}

/// Products shown per page.
const PRODUCT_PAGE_SIZE: u32 = 20;

/// List products, optionally filtered.
pub async fn list(
    page: u32,
    category: Option<&str>,
    tag: Option<ProductTag>,
) -> Result<(), CliError> {
    let client = client()?;
    let envelope = client
        .list_products(page, PRODUCT_PAGE_SIZE, category, tag)
        .await?;

    tracing::info!("Products (page {page}, {} total):", envelope.total);
    for product in &envelope.data {
        let tags = product
            .tags
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(
            "  {}  {:<30}  {}  [{tags}]",
            product.id,
            product.name,
            product.price.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Create a product through the form controller, so defaults (the initial
/// gray variant) match the console's.
pub async fn add(args: AddArgs) -> Result<(), CliError> {
    let client = client()?;
    let mut form = ProductFormController::new();
    {
        let draft = form.draft_mut();
        draft.name = args.name;
        draft.description = args.description;
        draft.price = args.price;
        draft.original_price = args.original_price.unwrap_or_default();
        draft.category = args.category.unwrap_or_default();
    }
    for tag in args.tags {
        form.toggle_tag(tag);
    }

    let record = form.submit_new(&client).await?;
    tracing::info!("Product created: {} ({})", record.name, record.id);
    Ok(())
}

/// Delete a product.
pub async fn delete(id: &str) -> Result<(), CliError> {
    let client = client()?;
    client.delete_product(id).await?;
    tracing::info!("Product {id} deleted");
    Ok(())
}
