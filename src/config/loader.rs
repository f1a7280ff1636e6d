// file: src/config/loader.rs
// version: 1.0.0
// guid: 7d2f8a40-6e13-4b9c-85d0-f1a43b7e92c6

//! Session loading from environment variables or a JSON auth file

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::{PermsError, Result};

use super::{SessionConfig, DEFAULT_API_VERSION};

/// Environment variable naming the org instance URL
pub const ENV_INSTANCE_URL: &str = "SF_INSTANCE_URL";
/// Environment variable naming the access token
pub const ENV_ACCESS_TOKEN: &str = "SF_ACCESS_TOKEN";
/// Environment variable naming the authenticated username
pub const ENV_USERNAME: &str = "SF_USERNAME";
/// Environment variable overriding the API version
pub const ENV_API_VERSION: &str = "SF_API_VERSION";

/// Session loader with an injectable environment for tests
pub struct SessionLoader {
    env_vars: HashMap<String, String>,
}

impl SessionLoader {
    /// Create a new session loader from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Set an environment variable for lookup (test seam)
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    /// Build a session from environment variables
    ///
    /// All missing required variables are reported in one error rather
    /// than failing on the first.
    pub fn from_env(&self) -> Result<SessionConfig> {
        let required = [ENV_INSTANCE_URL, ENV_ACCESS_TOKEN, ENV_USERNAME];

        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|key| !self.env_vars.contains_key(*key))
            .collect();

        if !missing.is_empty() {
            return Err(PermsError::config(format!(
                "Missing environment variables: {}",
                missing.join(", ")
            )));
        }

        let fetch = |key: &str| self.env_vars.get(key).cloned().unwrap_or_default();

        let config = SessionConfig {
            instance_url: fetch(ENV_INSTANCE_URL),
            access_token: fetch(ENV_ACCESS_TOKEN),
            username: fetch(ENV_USERNAME),
            api_version: self
                .env_vars
                .get(ENV_API_VERSION)
                .cloned()
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load a session from a JSON auth file
    pub fn load_auth_file<P: AsRef<Path>>(&self, path: P) -> Result<SessionConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            PermsError::config(format!(
                "Failed to read auth file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: SessionConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SessionLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_with(vars: &[(&str, &str)]) -> SessionLoader {
        let mut loader = SessionLoader {
            env_vars: HashMap::new(),
        };
        for (key, value) in vars {
            loader.set_env_var(key.to_string(), value.to_string());
        }
        loader
    }

    #[test]
    fn test_from_env_reports_all_missing_variables() {
        // Arrange
        let loader = loader_with(&[(ENV_USERNAME, "admin@example.com")]);

        // Act
        let result = loader.from_env();

        // Assert
        let message = result.unwrap_err().to_string();
        assert!(message.contains(ENV_INSTANCE_URL));
        assert!(message.contains(ENV_ACCESS_TOKEN));
        assert!(!message.contains("SF_USERNAME,"));
    }

    #[test]
    fn test_from_env_builds_session_with_default_api_version() {
        // Arrange
        let loader = loader_with(&[
            (ENV_INSTANCE_URL, "https://example.my.salesforce.com"),
            (ENV_ACCESS_TOKEN, "sometoken"),
            (ENV_USERNAME, "admin@example.com"),
        ]);

        // Act
        let session = loader.from_env().unwrap();

        // Assert
        assert_eq!(session.api_version, DEFAULT_API_VERSION);
        assert_eq!(session.username, "admin@example.com");
    }

    #[test]
    fn test_from_env_honors_api_version_override() {
        // Arrange
        let loader = loader_with(&[
            (ENV_INSTANCE_URL, "https://example.my.salesforce.com"),
            (ENV_ACCESS_TOKEN, "sometoken"),
            (ENV_USERNAME, "admin@example.com"),
            (ENV_API_VERSION, "59.0"),
        ]);

        // Act
        let session = loader.from_env().unwrap();

        // Assert
        assert_eq!(session.api_version, "59.0");
    }

    #[test]
    fn test_load_auth_file_missing_path_fails() {
        // Arrange
        let loader = loader_with(&[]);

        // Act
        let result = loader.load_auth_file("/nonexistent/auth.json");

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_load_auth_file_round_trip() {
        // Arrange
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("auth.json");
        fs::write(
            &path,
            r#"{
                "instanceUrl": "https://example.my.salesforce.com",
                "accessToken": "sometoken",
                "username": "admin@example.com",
                "apiVersion": "60.0"
            }"#,
        )
        .unwrap();

        let loader = loader_with(&[]);

        // Act
        let session = loader.load_auth_file(&path).unwrap();

        // Assert
        assert_eq!(session.api_version, "60.0");
        assert_eq!(session.instance_url, "https://example.my.salesforce.com");
    }
}
