//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Status of an order, as reported by the Velvetine API.
///
/// Orders are created server-side; the console only reads orders and
/// transitions their status. The wire form is `snake_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    OrderPlaced,
    Confirmed,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in lifecycle order. Used to populate status pickers.
    pub const ALL: [Self; 6] = [
        Self::OrderPlaced,
        Self::Confirmed,
        Self::Shipped,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Wire value, e.g. `out_for_delivery`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderPlaced => "order_placed",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Human-readable label, e.g. "Out For Delivery".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrderPlaced => "Order Placed",
            Self::Confirmed => "Confirmed",
            Self::Shipped => "Shipped",
            Self::OutForDelivery => "Out For Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order_placed" => Ok(Self::OrderPlaced),
            "confirmed" => Ok(Self::Confirmed),
            "shipped" => Ok(Self::Shipped),
            "out_for_delivery" => Ok(Self::OutForDelivery),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
