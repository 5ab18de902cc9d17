//! Domain entities for the Conversations domain

use chrono::{DateTime, Utc};
use medbridge_participants::ParticipantRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use medbridge_common::{Error, Result};

/// Conversation entity
///
/// Pairs one clinician with one patient and pins the language each side
/// reads. `summary` and `updated_at` are the only mutable fields; both are
/// rewritten on each summarization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Conversation {
    pub id: Uuid,
    pub clinician_id: Uuid,
    pub patient_id: Uuid,
    pub clinician_language: String,
    pub patient_language: String,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new conversation between a clinician and a patient
    pub fn new(
        clinician_id: Uuid,
        patient_id: Uuid,
        clinician_language: String,
        patient_language: String,
    ) -> Result<Self> {
        if !medbridge_llm::is_supported(&clinician_language) {
            return Err(Error::Validation(format!(
                "Unsupported clinician language: {}",
                clinician_language
            )));
        }
        if !medbridge_llm::is_supported(&patient_language) {
            return Err(Error::Validation(format!(
                "Unsupported patient language: {}",
                patient_language
            )));
        }

        let now = Utc::now();
        Ok(Conversation {
            id: Uuid::new_v4(),
            clinician_id,
            patient_id,
            clinician_language,
            patient_language,
            summary: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Resolve the translation direction for a message from `sender`.
    ///
    /// Returns `(source_language, target_language)`. A clinician writes in
    /// the clinician language for the patient; a patient writes in the
    /// patient language for the clinician. Callers never supply language
    /// codes directly.
    pub fn translation_direction(&self, sender: ParticipantRole) -> (&str, &str) {
        match sender {
            ParticipantRole::Clinician => (
                self.clinician_language.as_str(),
                self.patient_language.as_str(),
            ),
            ParticipantRole::Patient => (
                self.patient_language.as_str(),
                self.clinician_language.as_str(),
            ),
        }
    }
}

/// Message entity
///
/// One translated utterance. Immutable once created; ordered within a
/// conversation by creation time, ties broken by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: ParticipantRole,
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with server-resolved languages and translation
    pub fn new(
        conversation_id: Uuid,
        role: ParticipantRole,
        original_text: String,
        translated_text: String,
        source_language: String,
        target_language: String,
    ) -> Result<Self> {
        if original_text.trim().is_empty() {
            return Err(Error::Validation(
                "Message text cannot be empty or whitespace-only".to_string(),
            ));
        }

        Ok(Message {
            id: Uuid::new_v4(),
            conversation_id,
            role,
            original_text,
            translated_text,
            source_language,
            target_language,
            created_at: Utc::now(),
        })
    }
}
