//! Configuration management for the feedback agent
//!
//! Supports loading configuration from:
//! - YAML/TOML files under `config/`
//! - Environment variables (FEEDBACK_AGENT_ prefix)
//!
//! The conversation core receives everything through these explicit structs
//! at session-construction time; nothing reads ambient environment from
//! inside the state machine.

pub mod prompts;
pub mod settings;

pub use prompts::PromptTemplates;
pub use settings::{
    load_settings, ObservabilityConfig, SessionConfig, Settings, StorageConfig,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
