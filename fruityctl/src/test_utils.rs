//! Test utilities for client testing
//!
//! Provides a mock FruityVice server for exercising the HTTP client.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Fruit name that makes the mock answer 500.
pub const BROKEN_FRUIT: &str = "broken";

/// Fruit name that makes the mock answer 200 with a non-JSON body.
pub const GARBLED_FRUIT: &str = "garbled";

/// Mock server state
#[derive(Debug, Clone)]
pub struct MockServerState {
    /// Raw API records keyed by lowercase fruit name
    pub fruits: Arc<HashMap<String, Value>>,
}

impl Default for MockServerState {
    fn default() -> Self {
        let mut fruits = HashMap::new();

        fruits.insert(
            "apple".to_string(),
            json!({
                "id": 1,
                "name": "Apple",
                "family": "Rosaceae",
                "genus": "Malus",
                "order": "Rosales",
                "nutritions": {
                    "carbohydrates": 11.4,
                    "protein": 0.3,
                    "fat": 0.4,
                    "calories": 52,
                    "sugar": 10.3
                }
            }),
        );
        fruits.insert(
            "banana".to_string(),
            json!({
                "id": 6,
                "name": "Banana",
                "family": "Musaceae",
                "genus": "Musa",
                "order": "Zingiberales",
                "nutritions": {
                    "carbohydrates": 22.0,
                    "protein": 1.0,
                    "fat": 0.2,
                    "calories": 96,
                    "sugar": 17.2
                }
            }),
        );
        // Record with most keys missing
        fruits.insert("mystery".to_string(), json!({ "name": "Mystery" }));

        Self {
            fruits: Arc::new(fruits),
        }
    }
}

/// Mock server implementation
#[derive(Debug)]
pub struct MockServer {
    state: MockServerState,
    port: u16,
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockServer {
    /// Create a new mock server
    pub fn new() -> Self {
        Self {
            state: MockServerState::default(),
            port: 0, // Will be assigned when server starts
        }
    }

    /// Start the mock server and return the fruit endpoint base URL
    pub async fn start(mut self) -> Result<(Self, String)> {
        let app = self.create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.port = addr.port();

        let base_url = format!("http://127.0.0.1:{}/api/fruit", self.port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        // Give the server a moment to start and verify it's running
        for _ in 0..20 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Ok((self, base_url))
    }

    /// Create the mock server router
    fn create_router(&self) -> Router {
        Router::new()
            .route("/api/fruit/:name", get(fruit_handler))
            .with_state(self.state.clone())
    }
}

async fn fruit_handler(Path(name): Path<String>, State(state): State<MockServerState>) -> Response {
    match name.as_str() {
        BROKEN_FRUIT => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        GARBLED_FRUIT => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => match state.fruits.get(&name.to_lowercase()) {
            Some(fruit) => Json(fruit.clone()).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Not found" })),
            )
                .into_response(),
        },
    }
}
