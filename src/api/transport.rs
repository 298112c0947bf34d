use crate::errors::TransportError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A source of raw API responses.
///
/// The aggregation layer only ever issues GET requests for JSON bodies, so the
/// seam is a single method. Tests swap in an in-memory implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the body at `url`. Non-success statuses are errors.
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// [`Transport`] over HTTPS using a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a transport. Without a timeout, requests wait indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))
    }
}
