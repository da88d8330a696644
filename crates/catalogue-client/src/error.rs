//! Error types for catalogue queries.

use thiserror::Error;

/// Errors that can occur while composing, executing or caching a query.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogueError {
    /// The request could not be sent or its body could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("GraphQL endpoint returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The server reported one or more GraphQL errors.
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The response carried neither `data` nor `errors`.
    #[error("GraphQL response contained no data")]
    MissingData,

    /// The response did not match the declared result shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A detail fetch found no variable with this name.
    #[error("variable not found: {0}")]
    VariableNotFound(String),

    /// The selection state cannot be turned into a filter.
    #[error("malformed filter: {0}")]
    MalformedFilter(String),

    /// Settings are missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading settings.
    #[error("I/O error: {0}")]
    Io(String),
}

impl CatalogueError {
    /// Returns a message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport(_) => {
                "Could not reach the catalogue. Please check your internet connection."
            }
            Self::Http { status, .. } if *status >= 500 => {
                "The catalogue server is unavailable. Please try again later."
            }
            Self::Http { .. } | Self::GraphQl(_) => "The catalogue rejected the request.",
            Self::VariableNotFound(_) => "This variable does not exist in the current release.",
            Self::MalformedFilter(_) => "The current selection is not valid.",
            Self::Config(_) => "The catalogue connection is not configured correctly.",
            Self::MissingData | Self::Decode(_) | Self::Io(_) => "An unexpected error occurred.",
        }
    }

    /// Returns whether a retry of the same request might succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Http { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for CatalogueError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<std::io::Error> for CatalogueError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for catalogue operations.
pub type Result<T> = std::result::Result<T, CatalogueError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> CatalogueError {
        CatalogueError::Http {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_user_messages() {
        let err = CatalogueError::Transport("connection refused".to_string());
        assert!(err.user_message().contains("internet connection"));

        let err = http(502);
        assert!(err.user_message().contains("unavailable"));

        let err = CatalogueError::VariableNotFound("bmi".to_string());
        assert!(err.user_message().contains("does not exist"));
    }

    #[test]
    fn test_retryable() {
        let timeout = CatalogueError::Transport("timeout".to_string());
        assert!(timeout.is_retryable());
        assert!(http(503).is_retryable());
        assert!(http(429).is_retryable());
        assert!(!http(400).is_retryable());

        let missing = CatalogueError::VariableNotFound("bmi".to_string());
        assert!(!missing.is_retryable());
        let rejected = CatalogueError::GraphQl(vec!["bad field".to_string()]);
        assert!(!rejected.is_retryable());
    }

    #[test]
    fn test_graphql_display_joins_messages() {
        let err = CatalogueError::GraphQl(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(err.to_string(), "GraphQL errors: first; second");
    }
}
