//! Participant repository

use crate::domain::entities::{Participant, ParticipantRole};
use medbridge_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ParticipantRepository {
    pool: PgPool,
}

impl ParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find participant by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, name, role, code, language, created_at
            FROM participants
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Find participant by unique code (e.g. DOC001, PAT123)
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, name, role, code, language, created_at
            FROM participants
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(participant)
    }

    /// List participants, optionally filtered by role, newest first
    pub async fn list(&self, role: Option<ParticipantRole>) -> Result<Vec<Participant>> {
        let participants = match role {
            Some(r) => {
                sqlx::query_as::<_, Participant>(
                    r#"
                    SELECT id, name, role, code, language, created_at
                    FROM participants
                    WHERE role = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(r)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Participant>(
                    r#"
                    SELECT id, name, role, code, language, created_at
                    FROM participants
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(participants)
    }

    /// Count stored participants of a role (drives code allocation)
    pub async fn count_by_role(&self, role: ParticipantRole) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM participants WHERE role = $1",
        )
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Create a new participant
    pub async fn create(&self, participant: &Participant) -> Result<Participant> {
        let created = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (id, name, role, code, language, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, role, code, language, created_at
            "#,
        )
        .bind(participant.id)
        .bind(&participant.name)
        .bind(participant.role)
        .bind(&participant.code)
        .bind(&participant.language)
        .bind(participant.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
