// file: src/config/mod.rs
// version: 1.0.0
// guid: 5b9e3d71-c824-4f60-a1b7-3e08d6c2f945

//! Session configuration for the org connection
//!
//! The tool never acquires credentials itself; an already-authenticated
//! session (instance URL + access token + username) is supplied through
//! environment variables or a JSON auth file.

pub mod loader;

pub use loader::SessionLoader;

use crate::{PermsError, Result};
use serde::Deserialize;
use url::Url;

/// Default API version used when the session source does not name one
pub const DEFAULT_API_VERSION: &str = "61.0";

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

/// An authenticated org session
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Base URL of the org instance, e.g. `https://example.my.salesforce.com`
    pub instance_url: String,

    /// Bearer token for the REST and Tooling APIs
    pub access_token: String,

    /// Username the session was authenticated as
    pub username: String,

    /// REST API version, e.g. `61.0`
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl SessionConfig {
    /// Validate the session configuration
    pub fn validate(&self) -> Result<()> {
        if self.instance_url.trim().is_empty() {
            return Err(PermsError::config("Instance URL cannot be empty"));
        }
        if self.access_token.trim().is_empty() {
            return Err(PermsError::config("Access token cannot be empty"));
        }
        if self.username.trim().is_empty() {
            return Err(PermsError::config("Username cannot be empty"));
        }
        if self.api_version.trim().is_empty() {
            return Err(PermsError::config("API version cannot be empty"));
        }

        let url = Url::parse(&self.instance_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PermsError::config(format!(
                "Instance URL must be http(s), got scheme '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> SessionConfig {
        SessionConfig {
            instance_url: "https://example.my.salesforce.com".to_string(),
            access_token: "00Dxx0000000000!token".to_string(),
            username: "admin@example.com".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    #[test]
    fn test_valid_session_passes_validation() {
        // Arrange
        let session = sample_session();

        // Act & Assert
        assert!(session.validate().is_ok());
    }

    #[test]
    fn test_empty_token_fails_validation() {
        // Arrange
        let mut session = sample_session();
        session.access_token = "  ".to_string();

        // Act & Assert
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_non_http_scheme_fails_validation() {
        // Arrange
        let mut session = sample_session();
        session.instance_url = "ftp://example.my.salesforce.com".to_string();

        // Act & Assert
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_auth_file_shape_deserializes_with_default_version() {
        // Arrange
        let raw = r#"{
            "instanceUrl": "https://example.my.salesforce.com",
            "accessToken": "sometoken",
            "username": "admin@example.com"
        }"#;

        // Act
        let session: SessionConfig = serde_json::from_str(raw).unwrap();

        // Assert
        assert_eq!(session.api_version, DEFAULT_API_VERSION);
        assert_eq!(session.username, "admin@example.com");
    }
}
