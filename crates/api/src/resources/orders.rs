//! Order listing, detail and status transitions.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use velvetine_core::OrderStatus;

use crate::envelope::{DataEnvelope, ListEnvelope};
use crate::error::ApiError;
use crate::transport::ApiClient;

/// An order placed through the storefront.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-facing order number, distinct from the database id.
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub user: Option<OrderUser>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub deliver_to: Option<DeliveryAddress>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub shipping_charge: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    /// Lifecycle timeline; each timestamp is set when the order enters the
    /// matching status.
    #[serde(default)]
    pub placed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shipped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub out_for_delivery_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_delivery_date: Option<DateTime<Utc>>,
}

/// Customer snapshot embedded in an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Shipping destination embedded in an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub landmark: Option<String>,
}

/// One line item of an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product: Option<ProductRef>,
    /// Name as sold, kept even when the product was later deleted.
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub price_per_item: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub total_for_item: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

/// The `product` field of a line item: either a populated snapshot or a
/// bare id, depending on whether the server expanded the reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Snapshot {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        image: Option<String>,
    },
    Id(String),
}

impl ProductRef {
    /// The product id regardless of expansion.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Snapshot { id, .. } | Self::Id(id) => id,
        }
    }
}

impl ApiClient {
    /// List orders, newest first, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller is not
    /// authenticated.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ListEnvelope<Order>, ApiError> {
        self.require_token()?;
        self.get_json(&format!("/api/admin/order/list?page={page}&limit={limit}"))
            .await
    }

    /// Fetch one order with expanded line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order does not exist.
    #[instrument(skip(self))]
    pub async fn order_detail(&self, id: &str) -> Result<Order, ApiError> {
        self.require_token()?;
        let envelope: DataEnvelope<Order> =
            self.get_json(&format!("/api/admin/order/{id}")).await?;
        Ok(envelope.data)
    }

    /// Transition an order to a new status. The server owns transition
    /// legality; any status may be requested.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the
    /// transition.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.require_token()?;
        let envelope: DataEnvelope<Order> = self
            .send_json(
                reqwest::Method::PUT,
                &format!("/api/admin/order/update-status/{id}"),
                &json!({ "status": status }),
            )
            .await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_decodes_expanded_items() {
        let order: Order = serde_json::from_str(
            r#"{
                "_id": "o1",
                "orderId": "VLV-1042",
                "status": "shipped",
                "paymentMethod": "cod",
                "items": [
                    {
                        "product": {"_id": "p1", "name": "Tote"},
                        "productName": "Tote",
                        "quantity": 2,
                        "pricePerItem": 49.99,
                        "totalForItem": 99.98
                    }
                ],
                "subtotal": 99.98,
                "shippingCharge": 5.0,
                "total": 104.98,
                "placedAt": "2026-08-01T12:00:00Z",
                "shippedAt": "2026-08-03T09:00:00Z"
            }"#,
        )
        .expect("decodes");
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.order_id.as_deref(), Some("VLV-1042"));
        let product = order.items[0].product.as_ref().expect("has product");
        assert_eq!(product.id(), "p1");
        assert_eq!(order.items[0].total_for_item, Some(99.98));
        assert!(order.placed_at.is_some());
        assert!(order.delivered_at.is_none());
    }

    #[test]
    fn test_order_decodes_unexpanded_item_refs() {
        let item: OrderItem =
            serde_json::from_str(r#"{"product":"p9","quantity":1}"#).expect("decodes");
        assert_eq!(item.product.as_ref().map(ProductRef::id), Some("p9"));
    }

    #[test]
    fn test_order_tolerates_sparse_documents() {
        let order: Order = serde_json::from_str(r#"{"_id":"o2"}"#).expect("decodes");
        assert_eq!(order.status, OrderStatus::OrderPlaced);
        assert!(order.items.is_empty());
        assert!(order.user.is_none());
        assert!(order.deliver_to.is_none());
    }

    #[test]
    fn test_delivery_address_decodes() {
        let address: DeliveryAddress = serde_json::from_str(
            r#"{
                "fullName": "Dana Reis",
                "addressLine1": "Rua das Flores 12",
                "city": "Lisbon",
                "pincode": "1100-001",
                "landmark": "Next to the bakery"
            }"#,
        )
        .expect("decodes");
        assert_eq!(address.full_name.as_deref(), Some("Dana Reis"));
        assert_eq!(address.pincode.as_deref(), Some("1100-001"));
        assert!(address.address_line2.is_none());
    }
}
