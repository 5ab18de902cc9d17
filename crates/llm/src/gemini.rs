//! Gemini Generative Language API Implementation
//!
//! Calls the Gemini generateContent REST endpoint
//! (https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent)
//! using reqwest HTTP client. The API key travels as a query parameter.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    prompts, LlmConfig, LlmError, TranscriptEntry, TranslationOutcome, TranslationService,
    EMPTY_TRANSCRIPT_SUMMARY, SUMMARY_UNAVAILABLE,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.3;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// generateContent request body
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// generateContent response body
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Extract the first candidate's first text part
fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| LlmError::Response("Response contained no text candidate".to_string()))
}

/// Gemini translation service implementation
pub struct GeminiService {
    client: Client,
    config: LlmConfig,
    base_url: String,
}

impl GeminiService {
    /// Create a new Gemini service
    pub fn new(config: LlmConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            client: Client::new(),
            config,
            base_url,
        }
    }

    /// Send one prompt through generateContent and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.config.api_key
        );

        tracing::debug!(model = MODEL, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            return Err(LlmError::Response(format!(
                "Gemini API returned {}: {}",
                status, error_body
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Response(format!("Failed to parse response: {}", e)))?;

        extract_text(api_response)
    }
}

#[async_trait::async_trait]
impl TranslationService for GeminiService {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationOutcome {
        // Same-language fast path: no external call, no quota spent
        if source_lang == target_lang {
            return TranslationOutcome::Translated(text.to_string());
        }

        let prompt = prompts::translation_prompt(text, source_lang, target_lang);

        match self.generate(&prompt).await {
            Ok(translated) => TranslationOutcome::Translated(translated.trim().to_string()),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    source_lang = %source_lang,
                    target_lang = %target_lang,
                    "Translation failed, delivering original text with marker"
                );
                TranslationOutcome::Degraded(text.to_string())
            }
        }
    }

    async fn summarize(&self, transcript: &[TranscriptEntry]) -> String {
        if transcript.is_empty() {
            return EMPTY_TRANSCRIPT_SUMMARY.to_string();
        }

        let prompt = prompts::summary_prompt(transcript);

        match self.generate(&prompt).await {
            Ok(summary) => summary.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Summary generation failed");
                SUMMARY_UNAVAILABLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> GeminiService {
        GeminiService::new(LlmConfig {
            provider: "gemini".to_string(),
            api_key: "test-key".to_string(),
            base_url: None,
        })
    }

    #[test]
    fn test_request_body_wire_format() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "translate this".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "translate this");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
        assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_extract_text_first_candidate_first_part() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "primera"}, {"text": "segunda"}]}},
                    {"content": {"parts": [{"text": "otra"}]}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(extract_text(response).unwrap(), "primera");
    }

    #[test]
    fn test_extract_text_empty_candidates_is_error() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(extract_text(response).is_err());
    }

    #[test]
    fn test_extract_text_missing_candidates_field_is_error() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(response).is_err());
    }

    #[test]
    fn test_extract_text_part_without_text_is_error() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{}]}}]}"#).unwrap();
        assert!(extract_text(response).is_err());
    }

    #[tokio::test]
    async fn test_same_language_short_circuits_without_network() {
        // base_url points nowhere; the fast path must return before any request
        let service = test_service();
        let outcome = service.translate("no change", "en", "en").await;
        assert_eq!(outcome, TranslationOutcome::Translated("no change".to_string()));
    }

    #[tokio::test]
    async fn test_empty_transcript_summary_sentinel() {
        let service = test_service();
        let summary = service.summarize(&[]).await;
        assert_eq!(summary, EMPTY_TRANSCRIPT_SUMMARY);
    }
}
