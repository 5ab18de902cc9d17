//! Medbridge application composition root
//!
//! Composes all domain routers into a single application.

use axum::{routing::get, Json, Router};
use medbridge_common::Config;
use medbridge_conversations::{ConversationsRepositories, ConversationsState};
use medbridge_llm::{LlmConfig, TranslationServiceFactory, SUPPORTED_LANGUAGES};
use medbridge_participants::{ParticipantsRepositories, ParticipantsState};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    medbridge_common::set_debug_mode(config.debug);

    // Create repositories
    let participants_repos = ParticipantsRepositories::new(pool.clone());
    let conversations_repos = ConversationsRepositories::new(pool);

    // Create the translation service from configuration
    let llm_config = LlmConfig {
        provider: config.llm_provider.clone(),
        api_key: config.gemini_api_key.clone(),
        base_url: None,
    };
    let translator = TranslationServiceFactory::create(llm_config)
        .map_err(|e| anyhow::anyhow!("Failed to create translation service: {}", e))?;
    let translator: Arc<dyn medbridge_llm::TranslationService> = Arc::from(translator);

    // Create domain states
    let participants_state = ParticipantsState {
        repos: participants_repos.clone(),
    };

    let conversations_state = ConversationsState {
        repos: conversations_repos,
        participants: participants_repos.participants.clone(),
        translator,
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Medbridge API v0.1.0" }))
        .route("/v1/languages", get(list_languages))
        .merge(medbridge_participants::routes().with_state(participants_state))
        .merge(medbridge_conversations::routes().with_state(conversations_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// One supported-language option
#[derive(Debug, Serialize)]
struct LanguageOption {
    code: &'static str,
    name: &'static str,
}

/// Response for the supported-languages endpoint
#[derive(Debug, Serialize)]
struct LanguagesResponse {
    languages: Vec<LanguageOption>,
}

/// List the languages available for translation
async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: SUPPORTED_LANGUAGES
            .iter()
            .map(|&(code, name)| LanguageOption { code, name })
            .collect(),
    })
}
