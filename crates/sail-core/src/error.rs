use thiserror::Error;

/// Application-wide error types for the schedule extractor.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed (remote provider returned a bad status or body).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Reading the static fixture failed.
    #[error("File error: {0}")]
    FileError(String),

    /// The document could not be parsed into a markup tree.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Stable machine-readable identifier for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::HttpError(_) => "http_error",
            AppError::NetworkError(_) => "network_error",
            AppError::Timeout(_) => "timeout",
            AppError::FileError(_) => "file_error",
            AppError::ParseError(_) => "parse_error",
            AppError::ConfigError(_) => "config_error",
        }
    }

    /// Returns true if the failure came from obtaining the markup rather than parsing it.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_)
                | AppError::NetworkError(_)
                | AppError::Timeout(_)
                | AppError::FileError(_)
        )
    }
}
