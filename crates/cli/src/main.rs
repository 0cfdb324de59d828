//! Feedback Agent Entry Point
//!
//! Runs one feedback session over the console channel: agent lines to
//! stdout, customer utterances from stdin. The speech stack (STT/TTS and
//! audio transport) plugs in behind the same channel trait in production.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use feedback_agent_agent::{ConversationDriver, DriverConfig, QuestionScript};
use feedback_agent_channel::ConsoleChannel;
use feedback_agent_config::{load_settings, Settings};
use feedback_agent_persistence::FileFeedbackStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first (tracing init needs observability settings)
    let settings = match load_settings(std::env::var("FEEDBACK_AGENT_ENV").ok().as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}. Using defaults.");
            Settings::default()
        }
    };

    init_tracing(&settings);

    tracing::info!("Starting Feedback Agent v{}", env!("CARGO_PKG_VERSION"));

    // Script integrity is a startup check, before any session begins
    let script = QuestionScript::hinglish_default();
    script.validate()?;
    tracing::info!(questions = script.len(), "Question script validated");

    let store = Arc::new(FileFeedbackStore::new(&settings.storage.out_dir));
    let config = DriverConfig {
        session: settings.session.clone(),
        prompts: settings.prompts.clone(),
    };

    let driver = ConversationDriver::new(script, config, store)?;
    let call_id = driver.call_id().to_string();
    tracing::info!(call_id = %call_id, "Session starting");

    let mut channel = ConsoleChannel::new();
    let outcome = driver.run(&mut channel).await;

    tracing::info!(reason = ?outcome.end_reason, "Conversation ended");
    for (question_id, answer) in &outcome.record.answers {
        tracing::info!(question = %question_id, answer = ?answer, "Final answer");
    }

    match &outcome.artifacts {
        Ok(artifacts) => {
            tracing::info!(
                transcript = %artifacts.transcript_path.display(),
                record = %artifacts.record_path.display(),
                "Artifacts saved"
            );
        }
        Err(e) => {
            // The conversation already completed; report the failure but
            // keep the record available in the logs above
            tracing::error!(call_id = %call_id, error = %e, "Failed to save artifacts");
        }
    }

    Ok(())
}

/// Initialize tracing from settings
fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("feedback_agent={}", settings.observability.log_level).into());

    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
