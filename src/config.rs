//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CONTENT_LAYOUT, DEFAULT_CONTENT_ROOT, DEFAULT_RUST_LOG, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};
use crate::content::ContentLayout;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Emit logs as JSON lines instead of the human-readable format
    pub json_logs: bool,
}

/// Content tree configuration
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Absolute path to the content root
    pub root: PathBuf,
    /// Directory layout of the content tree
    pub layout: ContentLayout,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            content: ContentConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}

impl ContentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let root = match env::var("CONTENT_ROOT") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_content_root(),
        };

        Ok(Self {
            root: std::path::absolute(&root)
                .map_err(|_| ConfigError::InvalidValue("CONTENT_ROOT".to_string()))?,
            layout: env::var("CONTENT_LAYOUT")
                .unwrap_or_else(|_| DEFAULT_CONTENT_LAYOUT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CONTENT_LAYOUT".to_string()))?,
        })
    }
}

/// Content root next to the service's own sources
pub fn default_content_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONTENT_ROOT)
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
