//! Message API handlers: the translation pipeline and polling retrieval

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use medbridge_common::{Error, Result, ValidatedJson};
use medbridge_participants::ParticipantRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ConversationsState;
use crate::domain::entities::Message;

/// Request for sending a message
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    /// Sender role: clinician or patient
    pub role: ParticipantRole,

    /// Message text in the sender's language
    #[validate(length(min = 1))]
    pub text: String,
}

/// Query params for polling message retrieval
#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    /// Return only messages created after this message ID
    pub after: Option<Uuid>,
}

/// Message response DTO
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: ParticipantRole,
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            conversation_id: m.conversation_id,
            role: m.role,
            original_text: m.original_text,
            translated_text: m.translated_text,
            source_language: m.source_language,
            target_language: m.target_language,
            created_at: m.created_at,
        }
    }
}

/// Response for message listings with polling support
#[derive(Debug, Serialize)]
pub struct MessagesListResponse {
    pub messages: Vec<MessageResponse>,
    /// Cursor for the next poll; absent when the list is empty
    pub last_message_id: Option<Uuid>,
}

/// Send a message in a conversation.
///
/// The text is translated from the sender's language to the recipient's
/// language before being stored; both codes come from the conversation,
/// never from the caller. A translation outage degrades to marked original
/// text rather than failing the send.
pub async fn send_message(
    State(state): State<ConversationsState>,
    Path(conversation_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let conv = state
        .repos
        .conversations
        .find(conversation_id)
        .await?
        .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))?;

    let (source_language, target_language) = conv.translation_direction(req.role);
    let source_language = source_language.to_string();
    let target_language = target_language.to_string();

    let outcome = state
        .translator
        .translate(&req.text, &source_language, &target_language)
        .await;

    let message = Message::new(
        conversation_id,
        req.role,
        req.text,
        outcome.into_text(),
        source_language,
        target_language,
    )?;

    let created = state.repos.messages.create(&message).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List messages for a conversation, supporting incremental polling.
///
/// With `after` set to the last seen message ID, only newer messages are
/// returned; an `after` that no longer resolves silently falls back to the
/// full history.
pub async fn list_messages(
    State(state): State<ConversationsState>,
    Path(conversation_id): Path<Uuid>,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<MessagesListResponse>> {
    state
        .repos
        .conversations
        .find(conversation_id)
        .await?
        .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))?;

    let cursor = match query.after {
        Some(after_id) => state.repos.messages.find(after_id).await?,
        None => None,
    };

    let messages = match cursor {
        Some(reference) => {
            state
                .repos
                .messages
                .list_after(conversation_id, reference.created_at)
                .await?
        }
        None => {
            state
                .repos
                .messages
                .list_by_conversation(conversation_id)
                .await?
        }
    };

    let last_message_id = messages.last().map(|m| m.id);

    Ok(Json(MessagesListResponse {
        messages: messages.into_iter().map(Into::into).collect(),
        last_message_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_requires_text() {
        let valid = SendMessageRequest {
            role: ParticipantRole::Clinician,
            text: "How are you feeling?".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = SendMessageRequest {
            role: ParticipantRole::Clinician,
            text: "".to_string(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_send_request_rejects_unknown_role() {
        let result: std::result::Result<SendMessageRequest, _> =
            serde_json::from_str(r#"{"role": "nurse", "text": "hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_response_cursor_absent_when_empty() {
        let response = MessagesListResponse {
            messages: vec![],
            last_message_id: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["last_message_id"].is_null());
        assert_eq!(json["messages"].as_array().unwrap().len(), 0);
    }
}
