//! Client library for the Velvetine storefront API.
//!
//! [`ApiClient`] wraps a shared [`Session`] (base URL plus bearer token) and
//! exposes one resource module per API surface: auth, landing sections,
//! products, orders, testimonials and image upload. All requests go through
//! a single transport path so status handling and error mapping stay uniform.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod envelope;
mod error;
mod session;
mod transport;

pub mod resources;

pub use envelope::{Acknowledgement, DataEnvelope, ListEnvelope, LoginResponse};
pub use error::ApiError;
pub use session::{Session, SessionError, DEFAULT_API_BASE_URL};
pub use transport::ApiClient;
