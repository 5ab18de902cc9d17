//! Domain entities for the Participants domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use medbridge_common::{Error, Result};

/// Participant role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "participant_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Clinician,
    Patient,
}

impl ParticipantRole {
    /// Prefix for generated unique codes (DOC001, PAT001, ...)
    pub fn code_prefix(&self) -> &'static str {
        match self {
            ParticipantRole::Clinician => "DOC",
            ParticipantRole::Patient => "PAT",
        }
    }
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantRole::Clinician => write!(f, "clinician"),
            ParticipantRole::Patient => write!(f, "patient"),
        }
    }
}

/// Maximum display name length (varchar(100))
const MAX_NAME_LENGTH: usize = 100;

/// Participant entity
///
/// Immutable after creation; the unique code is allocated once and never
/// reused for another participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Participant {
    pub id: Uuid,
    pub name: String,
    pub role: ParticipantRole,
    pub code: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    /// Create a new participant with an already-allocated unique code
    pub fn new(name: String, role: ParticipantRole, code: String, language: String) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::Validation("Name is required".to_string()));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(Error::Validation(format!(
                "Name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }

        if !medbridge_llm::is_supported(&language) {
            return Err(Error::Validation(format!(
                "Unsupported language: {}",
                language
            )));
        }

        Ok(Participant {
            id: Uuid::new_v4(),
            name,
            role,
            code,
            language,
            created_at: Utc::now(),
        })
    }
}
