use thiserror::Error;

/// Errors produced while fetching, extracting or rendering champion data
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Chrome could not be started
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Attaching to an already running browser failed
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// The rendered document could not be read back from the tab
    #[error("Failed to read page content: {0}")]
    ContentFailed(String),

    /// A table or element the page layout guarantees was missing
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A numeric attribute or text could not be parsed
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },

    /// No page registered for the URL in an offline page source
    #[error("No page available for {0}")]
    PageNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Shorthand for a missing element described by its selector
    pub fn missing(what: impl std::fmt::Display) -> Self {
        ScrapeError::ElementNotFound(what.to_string())
    }

    /// Shorthand for a value that failed to parse
    pub fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        ScrapeError::InvalidValue { field: field.into(), value: value.into() }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
