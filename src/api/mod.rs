//! Access to the remote REST API: transport, URL layout, and the typed wire
//! records responses decode into.

pub mod endpoints;
pub mod transport;
pub mod wire;

pub use endpoints::{resource_id, Endpoints};
pub use transport::{HttpTransport, Transport};

use crate::errors::{FetchError, FetchResult};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Fetches API resources and decodes them into wire records.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            endpoints: Endpoints::new(base_url),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET `url` and decode the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let body = self.transport.get(url).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.endpoints.base_url())
            .finish()
    }
}
