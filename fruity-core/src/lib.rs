//! FruityLookup Core Library
//!
//! Shared types and errors for the FruityLookup project.
//! This crate is used by the `fruityctl` client and CLI.

pub mod error;
pub mod model;

// Re-export commonly used types
pub use error::*;
pub use model::*;

/// Root of the public FruityVice fruit endpoint.
pub const DEFAULT_API_URL: &str = "https://www.fruityvice.com/api/fruit";
