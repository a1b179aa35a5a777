//! Configuration file loading for feedback-client
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./feedback.toml` or `./.feedback.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/feedback-client/config.toml`
//! 4. Fallback: `~/.config/feedback-client/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FilePageConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
