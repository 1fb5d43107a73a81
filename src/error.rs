//! Crate-wide error type.
//!
//! ERROR HANDLING
//! ==============
//! Recipe client failures propagate to the caller unchanged. Store failures
//! are rare by construction: corrupt persisted state degrades to defaults and
//! is only reported through `StorageCorrupt` in logs.

/// Errors produced by the recipe client, the stores, and configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("network request failed: {0}")]
    Network(String),

    /// The remote API answered with a non-success status.
    #[error("remote API returned status {status}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not valid JSON or lacked the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The response was well formed but held no matching record.
    #[error("recipe not found: {id}")]
    NotFound { id: String },

    /// A caller passed a value outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A persisted value could not be decoded.
    #[error("stored value under `{key}` is corrupt: {reason}")]
    StorageCorrupt { key: String, reason: String },

    /// The storage backend failed to read or write.
    #[error("storage backend failed: {0}")]
    Storage(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl Error {
    /// Stable machine-readable code for logs and exit diagnostics.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::HttpStatus { .. } => "E_HTTP_STATUS",
            Self::Parse(_) => "E_PARSE",
            Self::NotFound { .. } => "E_NOT_FOUND",
            Self::InvalidArgument(_) => "E_INVALID_ARGUMENT",
            Self::StorageCorrupt { .. } => "E_STORAGE_CORRUPT",
            Self::Storage(_) => "E_STORAGE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// True for transport failures and non-2xx responses.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
