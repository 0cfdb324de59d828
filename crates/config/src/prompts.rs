//! Spoken prompt templates
//!
//! Every line the agent speaks outside the question script lives here, so
//! localizing or re-voicing the agent is a config change. Defaults carry the
//! production Hinglish texts.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Prompt templates for the fixed parts of the call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplates {
    /// Opening line asking the customer to opt in
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Farewell when the customer declines at the greeting
    #[serde(default = "default_decline_farewell")]
    pub decline_farewell: String,

    /// Farewell after the last question
    #[serde(default = "default_completion_farewell")]
    pub completion_farewell: String,

    /// Prefix prepended to a question when re-asking it
    #[serde(default = "default_clarification_prefix")]
    pub clarification_prefix: String,
}

fn default_greeting() -> String {
    "Namaste! Main TVS service center se Riya bol rahi hoon. Aaj main aapka feedback lena chahti hoon. Kya aap 2 minute de sakte hain?".to_string()
}

fn default_decline_farewell() -> String {
    "Koi baat nahi, phir kabhi. Dhanyavaad!".to_string()
}

fn default_completion_farewell() -> String {
    "Bahut bahut dhanyavaad aapka feedback dene ke liye! Aap ka din shubh rahe!".to_string()
}

fn default_clarification_prefix() -> String {
    "Maaf kijiye, main samjhi nahi. ".to_string()
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            decline_farewell: default_decline_farewell(),
            completion_farewell: default_completion_farewell(),
            clarification_prefix: default_clarification_prefix(),
        }
    }
}

impl PromptTemplates {
    /// Reject templates the agent cannot speak
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("prompts.greeting", &self.greeting),
            ("prompts.decline_farewell", &self.decline_farewell),
            ("prompts.completion_farewell", &self.completion_farewell),
        ];

        for (field, text) in required {
            if text.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "prompt text must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
