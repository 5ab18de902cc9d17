//! Conversation repository

use crate::domain::entities::Conversation;
use medbridge_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ConversationRepository {
    pool: PgPool,
}

impl ConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find conversation by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Conversation>> {
        let conv = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id, clinician_id, patient_id,
                   clinician_language, patient_language,
                   summary, created_at, updated_at
            FROM conversations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(conv)
    }

    /// Create a new conversation
    pub async fn create(&self, conv: &Conversation) -> Result<Conversation> {
        let created = sqlx::query_as::<_, Conversation>(
            r#"
            INSERT INTO conversations (
                id, clinician_id, patient_id,
                clinician_language, patient_language,
                summary, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, clinician_id, patient_id,
                      clinician_language, patient_language,
                      summary, created_at, updated_at
            "#,
        )
        .bind(conv.id)
        .bind(conv.clinician_id)
        .bind(conv.patient_id)
        .bind(&conv.clinician_language)
        .bind(&conv.patient_language)
        .bind(&conv.summary)
        .bind(conv.created_at)
        .bind(conv.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Overwrite the stored summary, bumping `updated_at` (last-write-wins)
    pub async fn update_summary(&self, id: Uuid, summary: &str) -> Result<Option<Conversation>> {
        let updated = sqlx::query_as::<_, Conversation>(
            r#"
            UPDATE conversations SET
                summary = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, clinician_id, patient_id,
                      clinician_language, patient_language,
                      summary, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(summary)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }
}
