//! Velvetine Core - Shared types library.
//!
//! This crate provides common types used across all Velvetine console
//! components:
//! - `api` - REST client for the remote Velvetine API
//! - `console` - Per-screen controllers for the admin console
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Order statuses, product tags, ratings, and pagination math

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
