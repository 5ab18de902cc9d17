//! Conversation management API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use medbridge_common::{Error, Result, ValidatedJson};
use medbridge_llm::TranscriptEntry;
use medbridge_participants::ParticipantRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ConversationsState;
use crate::domain::entities::Conversation;

/// Request for creating a conversation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateConversationRequest {
    /// Clinician participant ID
    pub clinician_id: Uuid,

    /// Patient participant ID
    pub patient_id: Uuid,

    /// Language code for the clinician side (e.g. "en")
    #[validate(length(min = 2, max = 5))]
    pub clinician_language: String,

    /// Language code for the patient side (e.g. "es")
    #[validate(length(min = 2, max = 5))]
    pub patient_language: String,
}

/// Conversation response DTO
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub id: Uuid,
    pub clinician_id: Uuid,
    pub patient_id: Uuid,
    pub clinician_language: String,
    pub patient_language: String,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationResponse {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id,
            clinician_id: c.clinician_id,
            patient_id: c.patient_id,
            clinician_language: c.clinician_language,
            patient_language: c.patient_language,
            summary: c.summary,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Response for summary generation
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub conversation_id: Uuid,
    pub summary: String,
    pub generated_at: DateTime<Utc>,
}

/// Create a new conversation between a clinician and a patient
pub async fn create_conversation(
    State(state): State<ConversationsState>,
    ValidatedJson(req): ValidatedJson<CreateConversationRequest>,
) -> Result<(StatusCode, Json<ConversationResponse>)> {
    // Both references must resolve to participants with the matching role
    let clinician = state.participants.find(req.clinician_id).await?;
    if !matches!(&clinician, Some(p) if p.role == ParticipantRole::Clinician) {
        return Err(Error::Validation(format!(
            "Invalid clinician ID: {}",
            req.clinician_id
        )));
    }

    let patient = state.participants.find(req.patient_id).await?;
    if !matches!(&patient, Some(p) if p.role == ParticipantRole::Patient) {
        return Err(Error::Validation(format!(
            "Invalid patient ID: {}",
            req.patient_id
        )));
    }

    let conversation = Conversation::new(
        req.clinician_id,
        req.patient_id,
        req.clinician_language,
        req.patient_language,
    )?;

    let created = state.repos.conversations.create(&conversation).await?;

    tracing::info!(conversation_id = %created.id, "Conversation created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Get conversation details by ID
pub async fn get_conversation(
    State(state): State<ConversationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConversationResponse>> {
    let conv = state
        .repos
        .conversations
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))?;

    Ok(Json(conv.into()))
}

/// Generate an AI summary of the conversation and store it.
///
/// Re-running overwrites the previous summary; the external service is
/// consulted every time, never cached.
pub async fn generate_summary(
    State(state): State<ConversationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SummaryResponse>> {
    state
        .repos
        .conversations
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))?;

    let messages = state.repos.messages.list_by_conversation(id).await?;

    if messages.is_empty() {
        return Err(Error::Validation("No messages to summarize".to_string()));
    }

    let transcript: Vec<TranscriptEntry> = messages
        .into_iter()
        .map(|m| TranscriptEntry {
            role: m.role.to_string(),
            original_text: m.original_text,
            translated_text: m.translated_text,
        })
        .collect();

    let summary = state.translator.summarize(&transcript).await;

    let updated = state
        .repos
        .conversations
        .update_summary(id, &summary)
        .await?
        .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))?;

    tracing::info!(conversation_id = %id, "Conversation summary generated");

    Ok(Json(SummaryResponse {
        conversation_id: updated.id,
        summary,
        generated_at: updated.updated_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_language_length_validation() {
        let valid = CreateConversationRequest {
            clinician_id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            clinician_language: "en".to_string(),
            patient_language: "es".to_string(),
        };
        assert!(valid.validate().is_ok());

        let too_short = CreateConversationRequest {
            clinician_id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            clinician_language: "e".to_string(),
            patient_language: "es".to_string(),
        };
        assert!(too_short.validate().is_err());
    }

    #[test]
    fn test_conversation_response_serialization() {
        let conv = Conversation::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "en".to_string(),
            "es".to_string(),
        )
        .unwrap();

        let response = ConversationResponse::from(conv);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["clinician_language"], "en");
        assert_eq!(json["patient_language"], "es");
        assert!(json["summary"].is_null());
    }
}
