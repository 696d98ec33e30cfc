//! Error handling
//!
//! Defines error types for the account manager.

pub mod types;

pub use types::*;
