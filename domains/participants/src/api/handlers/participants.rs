//! Participant management API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use medbridge_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ParticipantsState;
use crate::domain::allocator::allocate_code;
use crate::domain::entities::{Participant, ParticipantRole};

/// Request for creating a participant
#[derive(Debug, Deserialize, Validate)]
pub struct CreateParticipantRequest {
    /// Participant's full name
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Role: clinician or patient
    pub role: ParticipantRole,

    /// Default language code (e.g. "en", "es")
    #[validate(length(min = 2, max = 5))]
    pub language: String,
}

/// Query params for listing participants
#[derive(Debug, Deserialize)]
pub struct ListParticipantsQuery {
    pub role: Option<ParticipantRole>,
}

/// Participant response DTO
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub id: Uuid,
    pub name: String,
    pub role: ParticipantRole,
    pub code: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

impl From<Participant> for ParticipantResponse {
    fn from(p: Participant) -> Self {
        Self {
            id: p.id,
            name: p.name,
            role: p.role,
            code: p.code,
            language: p.language,
            created_at: p.created_at,
        }
    }
}

/// Response for participant listings
#[derive(Debug, Serialize)]
pub struct ParticipantsListResponse {
    pub participants: Vec<ParticipantResponse>,
}

/// Create a new participant with a generated unique code
pub async fn create_participant(
    State(state): State<ParticipantsState>,
    ValidatedJson(req): ValidatedJson<CreateParticipantRequest>,
) -> Result<(StatusCode, Json<ParticipantResponse>)> {
    let code = allocate_code(&state.repos.participants, req.role).await?;

    let participant = Participant::new(req.name, req.role, code, req.language)?;
    let created = state.repos.participants.create(&participant).await?;

    tracing::info!(
        participant_id = %created.id,
        code = %created.code,
        role = %created.role,
        "Participant created"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List participants, optionally filtered by role
pub async fn list_participants(
    State(state): State<ParticipantsState>,
    Query(query): Query<ListParticipantsQuery>,
) -> Result<Json<ParticipantsListResponse>> {
    let participants = state.repos.participants.list(query.role).await?;

    Ok(Json(ParticipantsListResponse {
        participants: participants.into_iter().map(Into::into).collect(),
    }))
}

/// Look up a participant by unique code (e.g. DOC001, PAT123)
pub async fn get_participant_by_code(
    State(state): State<ParticipantsState>,
    Path(code): Path<String>,
) -> Result<Json<ParticipantResponse>> {
    let participant = state
        .repos
        .participants
        .find_by_code(&code)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Participant not found with code: {}", code)))?;

    Ok(Json(participant.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let valid = CreateParticipantRequest {
            name: "Dr. A".to_string(),
            role: ParticipantRole::Clinician,
            language: "en".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateParticipantRequest {
            name: "".to_string(),
            role: ParticipantRole::Clinician,
            language: "en".to_string(),
        };
        assert!(empty_name.validate().is_err());

        let bad_language = CreateParticipantRequest {
            name: "Dr. A".to_string(),
            role: ParticipantRole::Clinician,
            language: "e".to_string(),
        };
        assert!(bad_language.validate().is_err());
    }

    #[test]
    fn test_role_query_param_deserialization() {
        let query: ListParticipantsQuery = serde_json::from_str(r#"{"role": "patient"}"#).unwrap();
        assert_eq!(query.role, Some(ParticipantRole::Patient));

        let query: ListParticipantsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.role, None);
    }

    #[test]
    fn test_participant_response_serialization() {
        let participant = Participant::new(
            "Dr. A".to_string(),
            ParticipantRole::Clinician,
            "DOC001".to_string(),
            "en".to_string(),
        )
        .unwrap();

        let response = ParticipantResponse::from(participant);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("Dr. A"));
        assert!(json.contains("DOC001"));
        assert!(json.contains("clinician"));
    }
}
