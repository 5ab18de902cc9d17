//! Message repository

use chrono::{DateTime, Utc};

use crate::domain::entities::Message;
use medbridge_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Hard cap on keyword-search results
const SEARCH_RESULT_LIMIT: i64 = 50;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find message by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Message>> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, conversation_id, role, original_text, translated_text,
                   source_language, target_language, created_at
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    /// List all messages for a conversation in canonical read order
    /// (created_at ASC, id as deterministic tie-break)
    pub async fn list_by_conversation(&self, conversation_id: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, conversation_id, role, original_text, translated_text,
                   source_language, target_language, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// List messages created strictly after the cursor instant.
    ///
    /// The predicate runs in the store's query layer so ordering and index
    /// usage are preserved.
    pub async fn list_after(
        &self,
        conversation_id: Uuid,
        after: DateTime<Utc>,
    ) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, conversation_id, role, original_text, translated_text,
                   source_language, target_language, created_at
            FROM messages
            WHERE conversation_id = $1 AND created_at > $2
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(conversation_id)
        .bind(after)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Keyword search over original and translated text.
    ///
    /// Case-insensitive substring match, optionally scoped to one
    /// conversation, newest first, capped at 50 results.
    pub async fn search(&self, query: &str, conversation_id: Option<Uuid>) -> Result<Vec<Message>> {
        let pattern = format!("%{}%", query);

        let messages = match conversation_id {
            Some(conv_id) => {
                sqlx::query_as::<_, Message>(
                    r#"
                    SELECT id, conversation_id, role, original_text, translated_text,
                           source_language, target_language, created_at
                    FROM messages
                    WHERE conversation_id = $2
                      AND (original_text ILIKE $1 OR translated_text ILIKE $1)
                    ORDER BY created_at DESC
                    LIMIT $3
                    "#,
                )
                .bind(&pattern)
                .bind(conv_id)
                .bind(SEARCH_RESULT_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Message>(
                    r#"
                    SELECT id, conversation_id, role, original_text, translated_text,
                           source_language, target_language, created_at
                    FROM messages
                    WHERE original_text ILIKE $1 OR translated_text ILIKE $1
                    ORDER BY created_at DESC
                    LIMIT $2
                    "#,
                )
                .bind(&pattern)
                .bind(SEARCH_RESULT_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(messages)
    }

    /// Create a new message
    pub async fn create(&self, msg: &Message) -> Result<Message> {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (
                id, conversation_id, role, original_text, translated_text,
                source_language, target_language, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, conversation_id, role, original_text, translated_text,
                      source_language, target_language, created_at
            "#,
        )
        .bind(msg.id)
        .bind(msg.conversation_id)
        .bind(msg.role)
        .bind(&msg.original_text)
        .bind(&msg.translated_text)
        .bind(&msg.source_language)
        .bind(&msg.target_language)
        .bind(msg.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
