//! Keyword search over stored messages

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use medbridge_common::{Error, Result};
use medbridge_participants::ParticipantRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::middleware::ConversationsState;
use crate::domain::entities::Message;

/// Query params for message search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search keyword
    pub q: String,

    /// Limit search to a specific conversation
    pub conversation_id: Option<Uuid>,
}

/// One search hit
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub message_id: Uuid,
    pub conversation_id: Uuid,
    pub role: ParticipantRole,
    pub original_text: String,
    pub translated_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for SearchResult {
    fn from(m: Message) -> Self {
        Self {
            message_id: m.id,
            conversation_id: m.conversation_id,
            role: m.role,
            original_text: m.original_text,
            translated_text: m.translated_text,
            created_at: m.created_at,
        }
    }
}

/// Response for the search endpoint
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    /// Count of returned (not total matching) items
    pub total_count: usize,
}

/// Search messages by keyword.
///
/// Case-insensitive substring match over both the original and translated
/// text, newest first, capped at 50 results.
pub async fn search_messages(
    State(state): State<ConversationsState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    if query.q.is_empty() {
        return Err(Error::Validation(
            "Search query must not be empty".to_string(),
        ));
    }

    let messages = state
        .repos
        .messages
        .search(&query.q, query.conversation_id)
        .await?;

    let results: Vec<SearchResult> = messages.into_iter().map(Into::into).collect();
    let total_count = results.len();

    Ok(Json(SearchResponse {
        query: query.q,
        results,
        total_count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_serialization() {
        let message = Message::new(
            Uuid::new_v4(),
            ParticipantRole::Patient,
            "I have a fever".to_string(),
            "Tengo fiebre".to_string(),
            "en".to_string(),
            "es".to_string(),
        )
        .unwrap();

        let result = SearchResult::from(message);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["original_text"], "I have a fever");
        assert_eq!(json["translated_text"], "Tengo fiebre");
        assert_eq!(json["role"], "patient");
    }

    #[test]
    fn test_search_query_optional_scope() {
        let query: SearchQuery = serde_json::from_str(r#"{"q": "fever"}"#).unwrap();
        assert_eq!(query.q, "fever");
        assert!(query.conversation_id.is_none());
    }
}
