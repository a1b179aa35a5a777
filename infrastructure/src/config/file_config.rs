//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain and application types
//! where appropriate.

use feedback_application::EndpointConfig;
use feedback_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("server.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("{key} must start with '/': {value:?}")]
    RelativeEndpoint { key: &'static str, value: String },

    #[error("{key} cannot be empty")]
    EmptySelector { key: &'static str },
}

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Base URL of the feedback service
    pub base_url: String,
    /// Request timeout in seconds (no timeout when unset)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileServerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Raw page configuration from TOML
///
/// CSS selectors locating negative reviews in a rendered results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePageConfig {
    /// Marks one negative review element
    pub negative_review_selector: String,
    /// Text element nested in a negative review; the first match is used
    pub review_text_selector: String,
}

impl Default for FilePageConfig {
    fn default() -> Self {
        Self {
            negative_review_selector: ".border-danger".to_string(),
            review_text_selector: "p".to_string(),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Server settings
    pub server: FileServerConfig,
    /// Endpoint paths
    pub endpoints: EndpointConfig,
    /// Page selectors
    pub page: FilePageConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.server.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.server.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        for (key, value) in self.endpoints.paths() {
            if !value.starts_with('/') {
                return Err(ConfigValidationError::RelativeEndpoint {
                    key,
                    value: value.to_string(),
                });
            }
        }

        for (key, value) in [
            ("page.negative_review_selector", &self.page.negative_review_selector),
            ("page.review_text_selector", &self.page.review_text_selector),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigValidationError::EmptySelector { key });
            }
        }

        Ok(())
    }
}
