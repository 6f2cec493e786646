//! HTTP client for the FruityVice API.

use fruity_core::{Fruit, FruityError, Result, DEFAULT_API_URL};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

/// Normalize a base URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// HTTP client for looking up fruits by name.
///
/// Each lookup issues exactly one GET request. There is no retry logic and
/// no caching; every call is independent of the ones before it.
///
/// # Examples
///
/// ```no_run
/// use fruityctl::client::FruitClient;
///
/// # async fn example() -> fruity_core::Result<()> {
/// let client = FruitClient::new(None)?;
/// let fruit = client.get_fruit_by_name("apple").await?;
/// println!("{} belongs to {}", fruit.name, fruit.family);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FruitClient {
    client: Client,
    base_url: String,
}

impl FruitClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Root of the fruit endpoint; `None` or an empty string selects
    ///   [`DEFAULT_API_URL`]
    ///
    /// # Errors
    ///
    /// Returns [`FruityError::Transport`] if the HTTP client cannot be created.
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fruityctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FruityError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: normalize_url(
                base_url
                    .filter(|url| !url.is_empty())
                    .unwrap_or(DEFAULT_API_URL),
            ),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a fruit name. The name is appended as-is, without escaping.
    pub fn fruit_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    /// Look up a fruit by name.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`FruityError::NotFound`] when the API answers 404
    /// - [`FruityError::Transport`] for any other unsuccessful status, for
    ///   network failures, and for bodies that are not a JSON object
    pub async fn get_fruit_by_name(&self, name: &str) -> Result<Fruit> {
        let url = self.fruit_url(name);
        debug!(%url, "requesting fruit");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            FruityError::Transport(e.to_string())
        })?;

        Self::handle_response(response, name).await
    }

    /// Classify the response status and decode the body.
    async fn handle_response(response: Response, name: &str) -> Result<Fruit> {
        let status = response.status();
        debug!(%status, fruit = name, "received response");

        if status == StatusCode::NOT_FOUND {
            return Err(FruityError::NotFound(name.to_string()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FruityError::Transport(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            warn!(%status, fruit = name, "unsuccessful response");
            return Err(FruityError::Transport(format!("HTTP {}: {}", status, text)));
        }

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| FruityError::Transport(format!("invalid JSON response: {}", e)))?;

        match value.as_object() {
            Some(raw) => Ok(Fruit::from_mapping(raw)),
            None => Err(FruityError::Transport(
                "invalid JSON response: expected an object".to_string(),
            )),
        }
    }
}
