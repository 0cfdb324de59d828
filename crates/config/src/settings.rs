//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, PromptTemplates};

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Session behavior
    #[serde(default)]
    pub session: SessionConfig,

    /// Storage destination
    #[serde(default)]
    pub storage: StorageConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Spoken prompt templates
    #[serde(default)]
    pub prompts: PromptTemplates,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    ///
    /// Runs at startup, before any session begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.retry_budget > MAX_RETRY_BUDGET {
            return Err(ConfigError::InvalidValue {
                field: "session.retry_budget".to_string(),
                message: format!(
                    "retry budget {} exceeds maximum {} (a large budget can stall callers on one question)",
                    self.session.retry_budget, MAX_RETRY_BUDGET
                ),
            });
        }

        if self.storage.out_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.out_dir".to_string(),
                message: "output directory must not be empty".to_string(),
            });
        }

        self.prompts.validate()?;

        Ok(())
    }
}

/// Upper bound on per-question re-prompts
const MAX_RETRY_BUDGET: u32 = 5;

/// Session behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Re-prompts allowed per question before storing the sentinel
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,

    /// Conversation language tag recorded on every feedback record
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_retry_budget() -> u32 {
    1
}

fn default_language() -> String {
    "hinglish".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            retry_budget: default_retry_budget(),
            language: default_language(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory receiving the transcript and record artifacts
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_out_dir() -> String {
    "out".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (FEEDBACK_AGENT_ prefix, `__` separator)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("FEEDBACK_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.session.retry_budget, 1);
        assert_eq!(settings.session.language, "hinglish");
        assert_eq!(settings.storage.out_dir, "out");
        assert!(!settings.observability.log_json);
    }

    #[test]
    fn test_retry_budget_bound() {
        let mut settings = Settings::default();
        settings.session.retry_budget = 50;
        assert!(settings.validate().is_err());

        settings.session.retry_budget = 2;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_out_dir_rejected() {
        let mut settings = Settings::default();
        settings.storage.out_dir = "  ".to_string();
        assert!(settings.validate().is_err());
    }
}
