use std::path::PathBuf;

/// Result type alias for hitrate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hitrate operations
///
/// Recording and flushing never fail; only the surfaces around them
/// (configuration loading and the periodic reporter) produce errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// File system operations
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Background reporter failures
    #[error("reporter error: {message}")]
    Reporter { message: String },
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a reporter error
    #[must_use]
    pub fn reporter(message: impl Into<String>) -> Self {
        Error::Reporter {
            message: message.into(),
        }
    }
}
