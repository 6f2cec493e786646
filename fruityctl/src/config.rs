//! CLI configuration
//!
//! Settings come from built-in defaults overridden by command-line
//! arguments. Nothing is read from files or the environment.

use fruity_core::DEFAULT_API_URL;

use crate::format::OutputFormat;

/// CLI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Root of the fruit endpoint
    pub api_url: String,

    /// Output format
    pub output_format: OutputFormat,

    /// Enable debug logging
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            output_format: OutputFormat::Human,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder layering command-line values over defaults
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_url: Option<String>,
    output_format: Option<OutputFormat>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set API URL
    ///
    /// An empty URL keeps the default. Anything else is used as given;
    /// malformed URLs surface as transport errors when the request is sent.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.is_empty() {
            self.api_url = Some(url);
        }
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Set verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> CliConfig {
        let defaults = CliConfig::default();

        CliConfig {
            api_url: self.api_url.unwrap_or(defaults.api_url),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            verbose: self.verbose.unwrap_or(defaults.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.api_url, "https://www.fruityvice.com/api/fruit");
        assert_eq!(config.output_format, OutputFormat::Human);
        assert!(!config.verbose);
    }

    #[test]
    fn test_builder_with_defaults() {
        let config = ConfigBuilder::new().build();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_builder_with_custom_values() {
        let config = CliConfig::builder()
            .with_api_url("http://localhost:8080/api/fruit")
            .with_output_format(OutputFormat::Machine)
            .with_verbose(true)
            .build();

        assert_eq!(config.api_url, "http://localhost:8080/api/fruit");
        assert_eq!(config.output_format, OutputFormat::Machine);
        assert!(config.verbose);
    }

    #[test]
    fn test_builder_empty_api_url_keeps_default() {
        let config = ConfigBuilder::new().with_api_url("").build();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_keeps_url_without_scheme() {
        // Left for the HTTP client to reject at send time
        let config = ConfigBuilder::new().with_api_url("localhost:3000").build();
        assert_eq!(config.api_url, "localhost:3000");
    }
}
