//! Wire-format tolerance: the API's envelopes vary between deployments, so
//! the decoders have to accept every shape seen in production.

use serde_json::json;

use velvetine_api::resources::{resolve_upload_url, Order, Testimonial};
use velvetine_api::{ListEnvelope, LoginResponse};
use velvetine_core::OrderStatus;

// ============================================================================
// Upload response shapes
// ============================================================================

#[test]
fn test_upload_url_shapes_in_precedence_order() {
    let cases = [
        (json!("https://cdn/1.jpg"), "https://cdn/1.jpg"),
        (json!({"data": "https://cdn/2.jpg"}), "https://cdn/2.jpg"),
        (json!({"data": {"url": "https://cdn/3.jpg"}}), "https://cdn/3.jpg"),
        (json!({"url": "https://cdn/4.jpg"}), "https://cdn/4.jpg"),
        (json!({"imageUrl": "https://cdn/5.jpg"}), "https://cdn/5.jpg"),
    ];
    for (value, expected) in cases {
        let url = resolve_upload_url(&value).expect("resolves");
        assert_eq!(url, expected);
    }
}

#[test]
fn test_upload_url_precedence_when_shapes_overlap() {
    // `data` as a string beats everything nested or top-level.
    let url = resolve_upload_url(&json!({
        "data": "https://cdn/data.jpg",
        "url": "https://cdn/url.jpg",
        "imageUrl": "https://cdn/image.jpg"
    }))
    .expect("resolves");
    assert_eq!(url, "https://cdn/data.jpg");

    // `data.url` beats top-level `url`.
    let url = resolve_upload_url(&json!({
        "data": {"url": "https://cdn/nested.jpg"},
        "url": "https://cdn/url.jpg"
    }))
    .expect("resolves");
    assert_eq!(url, "https://cdn/nested.jpg");
}

#[test]
fn test_upload_error_names_the_keys_it_saw() {
    let err = resolve_upload_url(&json!({"success": true, "bytes": 2048}))
        .expect_err("no URL anywhere");
    let message = err.to_string();
    assert!(message.contains("success"), "got: {message}");
    assert!(message.contains("bytes"), "got: {message}");
}

// ============================================================================
// Login response shapes
// ============================================================================

#[test]
fn test_login_token_nested_wins() {
    let response: LoginResponse = serde_json::from_value(json!({
        "data": {"token": "nested-token"},
        "token": "flat-token"
    }))
    .expect("decodes");
    assert_eq!(response.token(), Some("nested-token"));
}

#[test]
fn test_login_token_flat_fallback() {
    let response: LoginResponse =
        serde_json::from_value(json!({"token": "flat-token"})).expect("decodes");
    assert_eq!(response.token(), Some("flat-token"));
}

#[test]
fn test_login_without_token_is_detectable() {
    let response: LoginResponse =
        serde_json::from_value(json!({"data": {"user": "dana"}})).expect("decodes");
    assert_eq!(response.token(), None);
}

// ============================================================================
// List envelopes and document leniency
// ============================================================================

#[test]
fn test_list_envelope_without_total_defaults_to_zero() {
    let envelope: ListEnvelope<Testimonial> =
        serde_json::from_value(json!({"data": [{"_id": "t1"}]})).expect("decodes");
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.total, 0);
}

#[test]
fn test_minimal_order_document_decodes() {
    let order: Order = serde_json::from_value(json!({"_id": "o1"})).expect("decodes");
    assert_eq!(order.status, OrderStatus::OrderPlaced);
    assert!(order.items.is_empty());
    assert!(order.placed_at.is_none());
}

#[test]
fn test_unexpanded_product_refs_decode() {
    let order: Order = serde_json::from_value(json!({
        "_id": "o1",
        "items": [{"product": "p42", "quantity": 2}]
    }))
    .expect("decodes");
    let product = order.items[0].product.as_ref().expect("has ref");
    assert_eq!(product.id(), "p42");
}
