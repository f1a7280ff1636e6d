// file: src/error.rs
// version: 1.0.0
// guid: 3f8c2a17-9b4e-4d6a-8e21-5c0d97b1f4a2

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, PermsError>;

/// Error types for the field permission CLI
///
/// The first six variants are the user-facing failure taxonomy of the
/// assignment pipeline; their messages are printed verbatim, so the
/// variants display without a prefix.
#[derive(Error, Debug)]
pub enum PermsError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PolicyViolation(String),

    #[error("{0}")]
    AlreadyGranted(String),

    #[error("{0}")]
    Persistence(String),

    #[error("{0}")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl PermsError {
    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new policy violation error
    pub fn policy_violation(msg: impl Into<String>) -> Self {
        Self::PolicyViolation(msg.into())
    }

    /// Create a new already granted error
    pub fn already_granted(msg: impl Into<String>) -> Self {
        Self::AlreadyGranted(msg.into())
    }

    /// Create a new persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a new unexpected result error
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new API error
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_variants_display_verbatim() {
        // Arrange
        let err = PermsError::not_found("Username not found.");

        // Act
        let rendered = err.to_string();

        // Assert
        assert_eq!(rendered, "Username not found.");
    }

    #[test]
    fn test_ambient_variants_carry_prefix() {
        // Arrange
        let err = PermsError::config("Missing environment variables: SF_USERNAME");

        // Act
        let rendered = err.to_string();

        // Assert
        assert_eq!(
            rendered,
            "Configuration error: Missing environment variables: SF_USERNAME"
        );
    }
}
