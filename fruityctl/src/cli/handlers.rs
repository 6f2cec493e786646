//! Lookup execution and error reporting

use fruity_core::{FruityError, Result};

use crate::client::FruitClient;
use crate::config::CliConfig;
use crate::format::format_fruit;

/// Exit code when the fruit does not exist.
pub const EXIT_NOT_FOUND: i32 = 1;

/// Exit code for connection and HTTP failures.
pub const EXIT_CONNECTION_ERROR: i32 = 2;

/// Fetch the configured fruit and render it.
pub async fn handle_lookup(config: &CliConfig, fruit_name: &str) -> Result<String> {
    let client = FruitClient::new(Some(config.api_url.as_str()))?;
    let fruit = client.get_fruit_by_name(fruit_name).await?;

    format_fruit(&fruit, config.output_format)
}

/// Map an error to its exit code and stderr message.
///
/// Returns `None` for errors the CLI does not handle itself.
pub fn error_report(err: &FruityError) -> Option<(i32, String)> {
    match err {
        FruityError::NotFound(_) => Some((EXIT_NOT_FOUND, format!("Error: {}", err))),
        FruityError::Transport(_) => Some((
            EXIT_CONNECTION_ERROR,
            format!("Connection error: {}", err),
        )),
        _ => None,
    }
}
