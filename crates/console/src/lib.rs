//! Admin console state management.
//!
//! Each screen of the console is backed by a controller in
//! [`controllers`]: a plain struct holding the screen's state, with pure
//! transition methods that the async operations drive. Keeping the
//! transitions synchronous makes every piece of screen logic testable
//! without a live API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controllers;

pub use config::{ConfigError, ConsoleConfig};
