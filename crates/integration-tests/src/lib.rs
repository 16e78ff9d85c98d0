//! Integration tests for the Velvetine console.
//!
//! # Running Tests
//!
//! ```bash
//! # Controller and wire-format tests (no server needed)
//! cargo test -p velvetine-integration-tests
//!
//! # Live API tests (require a running API and credentials)
//! VELVETINE_API_URL=http://localhost:4000 \
//! cargo test -p velvetine-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `order_workflow` - Order screen state transitions
//! - `response_shapes` - Wire-format tolerance (envelopes, upload, login)
//! - `form_controllers` - Product form, best collection, testimonial form
//! - `live_api` - End-to-end tests against a real deployment (ignored by
//!   default)

pub mod fixtures;
