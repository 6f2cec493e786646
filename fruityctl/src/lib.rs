//! FruityLookup CLI Library
//!
//! Fetches fruit records from the FruityVice API and renders them as
//! human-readable text or JSON.
//!
//! # Public API
//!
//! [`lookup_fruit`] covers the common case in one call. For finer control use
//! [`client::FruitClient`] and [`format::format_fruit`] directly.
//!
//! ```no_run
//! # async fn example() -> fruity_core::Result<()> {
//! let text = fruityctl::lookup_fruit("apple", "human", None).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for the FruityVice API.
pub mod client;

/// Configuration types for the CLI tool.
pub mod config;

/// Human and machine output formatting.
pub mod format;

#[cfg(test)]
pub mod test_utils;

use fruity_core::Result;

use crate::client::FruitClient;
use crate::format::{format_fruit, get_formatter};

/// Look up a fruit by name and return the formatted information.
///
/// # Arguments
///
/// * `name` - Fruit name, appended to the base URL as-is
/// * `format_type` - `"human"` or `"machine"`
/// * `api_url` - Optional base URL overriding the public API
///
/// # Errors
///
/// - [`fruity_core::FruityError::NotFound`] if the API has no such fruit
/// - [`fruity_core::FruityError::Transport`] on connection or HTTP failures
/// - [`fruity_core::FruityError::InvalidFormat`] for an unknown format tag
pub async fn lookup_fruit(name: &str, format_type: &str, api_url: Option<&str>) -> Result<String> {
    let client = FruitClient::new(api_url)?;
    let fruit = client.get_fruit_by_name(name).await?;

    let format = get_formatter(format_type)?;
    format_fruit(&fruit, format)
}
