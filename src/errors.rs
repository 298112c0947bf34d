use thiserror::Error;

/// Failure of a single remote lookup, before any containment policy applies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The API answered with a non-success status code
    #[error("HTTP status {0}")]
    Status(u16),
    /// The request never produced a response (DNS, TLS, connection reset, timeout)
    #[error("network error: {0}")]
    Network(String),
}

/// Errors from fetching and decoding one API resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The body was not the JSON shape the resource is expected to have
    #[error("malformed response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Transport(TransportError::Status(404)))
    }
}

/// Errors from the on-device key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced to callers of the client.
///
/// Sub-resource failures never appear here: they are replaced by defaults and
/// listed on the returned record instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The search input was blank after trimming
    #[error("Please enter a name or ID")]
    EmptyQuery,
    /// The core record for the requested entity could not be fetched
    #[error("No Pokémon found matching \"{query}\"")]
    NotFound { query: String, reason: FetchError },
    /// The list or membership envelope of a collection request could not be fetched
    #[error("Could not load {resource}: {reason}")]
    CollectionUnavailable { resource: String, reason: String },
    /// Reading or writing the favorites list failed
    #[error("Favorites storage failed: {0}")]
    Persistence(#[from] StoreError),
    /// The configuration could not be read or parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn collection(resource: impl Into<String>, reason: impl ToString) -> Self {
        ClientError::CollectionUnavailable {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}

/// Type alias for Results using ClientError
pub type ClientResult<T> = Result<T, ClientError>;

/// Type alias for Results using FetchError
pub type FetchResult<T> = Result<T, FetchError>;

/// Type alias for Results using StoreError
pub type StoreResult<T> = Result<T, StoreError>;
