//! Shared fixtures: realistic API documents, built from the JSON the
//! server actually sends so decode leniency is exercised too.

use serde_json::json;

use velvetine_api::resources::{Order, ProductRecord, Testimonial};

/// An order document as `/api/admin/order/list` returns it.
#[must_use]
pub fn order(id: &str, status: &str) -> Order {
    serde_json::from_value(json!({
        "_id": id,
        "orderId": format!("VLV-{id}"),
        "status": status,
        "user": { "name": "Dana Reis", "email": "dana@example.com" },
        "paymentMethod": "cod",
        "paymentStatus": "pending",
        "deliverTo": {
            "fullName": "Dana Reis",
            "addressLine1": "Rua das Flores 12",
            "city": "Lisbon",
            "state": "Lisboa",
            "pincode": "1100-001"
        },
        "items": [
            {
                "product": { "_id": "p1", "name": "Velvet Tote" },
                "productName": "Velvet Tote",
                "quantity": 1,
                "pricePerItem": 49.99,
                "totalForItem": 49.99
            }
        ],
        "subtotal": 49.99,
        "shippingCharge": 5.0,
        "total": 54.99,
        "placedAt": "2026-08-01T09:30:00Z"
    }))
    .expect("order fixture decodes")
}

/// A page of order documents.
#[must_use]
pub fn order_page(count: usize, status: &str) -> Vec<Order> {
    (0..count)
        .map(|i| order(&format!("o{i}"), status))
        .collect()
}

/// A testimonial document as `/api/admin/testimonial/list` returns it.
#[must_use]
pub fn testimonial(id: &str) -> Testimonial {
    serde_json::from_value(json!({
        "_id": id,
        "message": "Beautiful craftsmanship, fast shipping.",
        "review": 5,
        "user_name": "Dana Reis",
        "user_address": "Lisbon, PT",
        "user_image": "https://cdn.velvetine.shop/u/dana.jpg",
        "is_active": true,
        "createdAt": "2026-07-15T18:00:00Z"
    }))
    .expect("testimonial fixture decodes")
}

/// A product document as `/api/v1/product/list` returns it.
#[must_use]
pub fn product(id: &str, name: &str) -> ProductRecord {
    serde_json::from_value(json!({
        "_id": id,
        "name": name,
        "description": "Hand-finished velvet.",
        "price": "49.99",
        "originalPrice": "59.99",
        "category": "bags",
        "tags": ["BEST SELLER", "NEW"],
        "colorVariants": [
            { "color": "#374151", "colorName": "Gray", "image": "https://cdn/g.jpg" },
            { "color": "#000000", "colorName": "Black" }
        ]
    }))
    .expect("product fixture decodes")
}
