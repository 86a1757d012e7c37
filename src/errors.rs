use thiserror::Error;

/// Main SDK error type
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Client HTTP error (4xx)
    #[error("Client error: status code: {status_code}, error code: {error_code:?}, error message: {error_message}")]
    ClientRequest {
        status_code: u16,
        error_code: Option<i64>,
        error_message: String,
    },

    /// Server HTTP error (5xx)
    #[error("Server error: status code: {status_code}, error message: {error_message}")]
    ServerRequest {
        status_code: u16,
        error_message: String,
    },

    /// Generic request error
    #[error("Generic request error: {0}")]
    GenericRequest(String),

    /// Request signing error
    #[error("Signing error: {0}")]
    Signing(String),

    /// JSON serialization or parse error
    #[error("Json parse error: {0}")]
    JsonParse(String),

    /// Response had valid JSON but not the shape the venue documents
    #[error("Decode error: {0}")]
    Decode(String),

    /// A by-ID lookup found no matching order in a successfully fetched snapshot
    #[error("Order {0} not found")]
    OrderNotFound(i64),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a JSON parse error
    pub fn json_parse(msg: impl Into<String>) -> Self {
        Error::JsonParse(msg.into())
    }

    /// Create a decode error for a named field
    pub fn decode(field: &str, msg: impl std::fmt::Display) -> Self {
        Error::Decode(format!("{field}: {msg}"))
    }

    /// Whether this error is the local not-found condition rather than a venue or transport failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::OrderNotFound(_))
    }
}
