//! Medbridge Translation Gateway
//!
//! Wraps the external generative-language service used for per-message
//! translation and conversation summarization, with support for:
//! - Gemini REST API integration for production use
//! - Mock translation service for testing and development
//! - Degrade-not-fail handling: an external failure never propagates out
//!   of this crate; callers receive marked fallback text instead

use thiserror::Error;

pub mod gemini;
pub mod languages;
pub mod mock;
pub mod prompts;

pub use languages::{is_supported, language_name, SUPPORTED_LANGUAGES};

/// Marker prepended to the original text when a translation call fails
pub const TRANSLATION_FAILED_MARKER: &str = "[Translation failed]";

/// Sentinel returned when asked to summarize an empty transcript
pub const EMPTY_TRANSCRIPT_SUMMARY: &str = "No messages to summarize.";

/// Sentinel returned when the summarization call fails
pub const SUMMARY_UNAVAILABLE: &str = "Unable to generate summary. Please try again.";

/// Errors from the external generative-language call.
///
/// These never cross the crate boundary: implementations convert them to
/// `TranslationOutcome::Degraded` or a summary sentinel.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Translation service configuration error: {0}")]
    Configuration(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response: {0}")]
    Response(String),
}

/// Result of a translation attempt.
///
/// `Degraded` carries the untranslated original text; collapsing to plain
/// text attaches the visible failure marker so delivery never blocks on a
/// translation outage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    Degraded(String),
}

impl TranslationOutcome {
    /// Collapse the outcome into the text stored on the message
    pub fn into_text(self) -> String {
        match self {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::Degraded(original) => {
                format!("{} {}", TRANSLATION_FAILED_MARKER, original)
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, TranslationOutcome::Degraded(_))
    }
}

/// One transcript line handed to `summarize`
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    /// Speaker label (e.g. "clinician", "patient")
    pub role: String,
    pub original_text: String,
    pub translated_text: String,
}

/// Translation service trait for different implementations.
///
/// Neither method returns an error: same-language input short-circuits
/// without an external call, and external failures degrade to marked
/// fallback text (`TranslationOutcome::Degraded`, summary sentinels).
#[async_trait::async_trait]
pub trait TranslationService: Send + Sync {
    /// Translate `text` between two supported language codes
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationOutcome;

    /// Summarize an ordered conversation transcript
    async fn summarize(&self, transcript: &[TranscriptEntry]) -> String;
}

/// Translation service configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Service provider (gemini, mock)
    pub provider: String,
    /// Gemini API key, passed as a query parameter on each request
    pub api_key: String,
    /// Override for the service base URL (used in tests)
    pub base_url: Option<String>,
}

impl LlmConfig {
    /// Create translation config from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            provider: std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("GEMINI_BASE_URL").ok(),
        }
    }
}

/// Translation service factory
pub struct TranslationServiceFactory;

impl TranslationServiceFactory {
    /// Create a translation service based on configuration
    pub fn create(config: LlmConfig) -> Result<Box<dyn TranslationService>, LlmError> {
        match config.provider.as_str() {
            "gemini" => {
                tracing::info!("Creating Gemini translation service");
                Ok(Box::new(gemini::GeminiService::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock translation service");
                Ok(Box::new(mock::MockTranslationService::new()))
            }
            provider => Err(LlmError::Configuration(format!(
                "Unknown translation provider: {}. Supported providers: gemini, mock",
                provider
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_outcome_collapses_to_plain_text() {
        let outcome = TranslationOutcome::Translated("¿Cómo se siente?".to_string());
        assert_eq!(outcome.into_text(), "¿Cómo se siente?");
    }

    #[test]
    fn test_degraded_outcome_carries_failure_marker() {
        let outcome = TranslationOutcome::Degraded("How are you feeling?".to_string());
        assert!(outcome.is_degraded());
        assert_eq!(
            outcome.into_text(),
            "[Translation failed] How are you feeling?"
        );
    }

    #[test]
    fn test_translated_outcome_is_not_degraded() {
        let outcome = TranslationOutcome::Translated("text".to_string());
        assert!(!outcome.is_degraded());
    }

    #[test]
    fn test_factory_rejects_unknown_provider() {
        let config = LlmConfig {
            provider: "watson".to_string(),
            api_key: String::new(),
            base_url: None,
        };
        let result = TranslationServiceFactory::create(config);
        assert!(result.is_err());
        assert!(result
            .err()
            .unwrap()
            .to_string()
            .contains("Unknown translation provider"));
    }

    #[test]
    fn test_factory_creates_mock_provider() {
        let config = LlmConfig {
            provider: "mock".to_string(),
            api_key: String::new(),
            base_url: None,
        };
        assert!(TranslationServiceFactory::create(config).is_ok());
    }
}
