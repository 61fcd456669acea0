//! Error types for app-root

/// Result type for app-root operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when resolving the application root
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("executable location unavailable: {message}")]
    LocationUnavailable {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl Error {
    pub fn location_unavailable(
        message: impl Into<String>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::LocationUnavailable {
            message: message.into(),
            source,
        }
    }
}
