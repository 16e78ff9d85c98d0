//! Order management commands.
//!
//! # Usage
//!
//! ```bash
//! velvetine orders list --page 2
//! velvetine orders show 66a1b2c3
//! velvetine orders set-status 66a1b2c3 shipped
//! ```

use velvetine_console::controllers::OrderManager;
use velvetine_core::OrderStatus;

use super::{client, CliError};

/// List one page of orders.
pub async fn list(page: u32) -> Result<(), CliError> {
    let client = client()?;
    let mut manager = OrderManager::new();
    manager.set_page(page);
    manager.load(&client).await?;

    let pagination = manager.pagination();
    tracing::info!(
        "Orders (page {} of {}, {} total):",
        pagination.page,
        pagination.total_pages(),
        pagination.total
    );
    for order in manager.orders() {
        let number = order.order_id.as_deref().unwrap_or(&order.id);
        let customer = order
            .user
            .as_ref()
            .and_then(|user| user.name.as_deref())
            .unwrap_or("-");
        let total = order
            .total
            .map_or_else(|| "-".to_owned(), |t| format!("{t:.2}"));
        tracing::info!(
            "  {number}  {status:<16}  {customer:<20}  {total}",
            status = order.status.label()
        );
    }
    Ok(())
}

/// Show one order with its line items.
pub async fn show(id: &str) -> Result<(), CliError> {
    let client = client()?;
    let mut manager = OrderManager::new();
    manager.open_detail(&client, id).await?;

    let Some(order) = manager.selected() else {
        return Ok(());
    };
    tracing::info!("Order {}", order.order_id.as_deref().unwrap_or(&order.id));
    tracing::info!("  Status: {}", order.status.label());
    if let Some(payment) = &order.payment_method {
        tracing::info!(
            "  Payment: {payment} ({})",
            order.payment_status.as_deref().unwrap_or("-")
        );
    }
    if let Some(user) = &order.user {
        tracing::info!(
            "  Customer: {} <{}>",
            user.name.as_deref().unwrap_or("-"),
            user.email.as_deref().unwrap_or("-")
        );
    }
    if let Some(address) = &order.deliver_to {
        tracing::info!(
            "  Ship to: {}, {}, {} {}",
            address.full_name.as_deref().unwrap_or("-"),
            address.address_line1.as_deref().unwrap_or("-"),
            address.city.as_deref().unwrap_or("-"),
            address.pincode.as_deref().unwrap_or("")
        );
    }
    for item in &order.items {
        let name = item.product_name.as_deref().unwrap_or_else(|| {
            item.product.as_ref().map_or("-", |product| match product {
                velvetine_api::resources::ProductRef::Snapshot { name, .. } => {
                    name.as_deref().unwrap_or("-")
                }
                velvetine_api::resources::ProductRef::Id(id) => id.as_str(),
            })
        });
        tracing::info!(
            "  {} x{}  @ {}",
            name,
            item.quantity.unwrap_or(1),
            item.price_per_item
                .map_or_else(|| "-".to_owned(), |p| format!("{p:.2}"))
        );
    }
    if let Some(subtotal) = order.subtotal {
        tracing::info!("  Subtotal: {subtotal:.2}");
    }
    if let Some(shipping) = order.shipping_charge {
        tracing::info!("  Shipping: {shipping:.2}");
    }
    if let Some(total) = order.total {
        tracing::info!("  Total: {total:.2}");
    }
    Ok(())
}

/// Change an order's status.
pub async fn set_status(id: &str, status: OrderStatus) -> Result<(), CliError> {
    let client = client()?;
    let mut manager = OrderManager::new();
    manager.change_status(&client, id, status).await?;
    tracing::info!("Order {id} is now {}", status.label());
    Ok(())
}
