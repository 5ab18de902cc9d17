//! Mock Translation Service Implementation
//!
//! Minimal mock used by `TranslationServiceFactory` when provider is
//! `"mock"`. Returns deterministic pseudo-translations; the external-call
//! counter lets tests assert that fast paths skip the service entirely.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    TranscriptEntry, TranslationOutcome, TranslationService, EMPTY_TRANSCRIPT_SUMMARY,
    SUMMARY_UNAVAILABLE,
};

/// Mock translation service for testing
#[derive(Debug, Default)]
pub struct MockTranslationService {
    fail: bool,
    external_calls: AtomicUsize,
}

impl MockTranslationService {
    /// Create a new mock translation service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose external calls all fail, exercising the
    /// degrade path
    pub fn failing() -> Self {
        Self {
            fail: true,
            external_calls: AtomicUsize::new(0),
        }
    }

    /// Number of simulated external service calls made so far
    pub fn external_calls(&self) -> usize {
        self.external_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TranslationService for MockTranslationService {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationOutcome {
        if source_lang == target_lang {
            return TranslationOutcome::Translated(text.to_string());
        }

        self.external_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return TranslationOutcome::Degraded(text.to_string());
        }

        TranslationOutcome::Translated(format!("[{}] {}", target_lang, text))
    }

    async fn summarize(&self, transcript: &[TranscriptEntry]) -> String {
        if transcript.is_empty() {
            return EMPTY_TRANSCRIPT_SUMMARY.to_string();
        }

        self.external_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return SUMMARY_UNAVAILABLE.to_string();
        }

        format!("Summary of {} messages", transcript.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_translates_with_target_tag() {
        let service = MockTranslationService::new();

        let outcome = service.translate("How are you?", "en", "es").await;

        assert_eq!(
            outcome,
            TranslationOutcome::Translated("[es] How are you?".to_string())
        );
        assert_eq!(service.external_calls(), 1);
    }

    #[tokio::test]
    async fn test_same_language_issues_no_external_call() {
        let service = MockTranslationService::new();

        let outcome = service.translate("unchanged", "fr", "fr").await;

        assert_eq!(
            outcome,
            TranslationOutcome::Translated("unchanged".to_string())
        );
        assert_eq!(service.external_calls(), 0);
    }

    #[tokio::test]
    async fn test_failing_mock_degrades() {
        let service = MockTranslationService::failing();

        let outcome = service.translate("How are you?", "en", "es").await;

        assert!(outcome.is_degraded());
        assert_eq!(
            outcome.into_text(),
            "[Translation failed] How are you?"
        );
    }

    #[tokio::test]
    async fn test_summarize_counts_entries() {
        let service = MockTranslationService::new();
        let transcript = vec![
            TranscriptEntry {
                role: "clinician".to_string(),
                original_text: "a".to_string(),
                translated_text: "b".to_string(),
            },
            TranscriptEntry {
                role: "patient".to_string(),
                original_text: "c".to_string(),
                translated_text: "d".to_string(),
            },
        ];

        let summary = service.summarize(&transcript).await;
        assert_eq!(summary, "Summary of 2 messages");
        assert_eq!(service.external_calls(), 1);
    }

    #[tokio::test]
    async fn test_summarize_empty_transcript_skips_service() {
        let service = MockTranslationService::new();

        let summary = service.summarize(&[]).await;

        assert_eq!(summary, EMPTY_TRANSCRIPT_SUMMARY);
        assert_eq!(service.external_calls(), 0);
    }

    #[tokio::test]
    async fn test_failing_mock_summary_sentinel() {
        let service = MockTranslationService::failing();
        let transcript = vec![TranscriptEntry {
            role: "patient".to_string(),
            original_text: "text".to_string(),
            translated_text: "text".to_string(),
        }];

        let summary = service.summarize(&transcript).await;
        assert_eq!(summary, SUMMARY_UNAVAILABLE);
    }
}
