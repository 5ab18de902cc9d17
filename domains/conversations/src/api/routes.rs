//! Route definitions for the Conversations domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{audio, conversations, messages, search};
use super::middleware::ConversationsState;

/// Create conversation routes
fn conversation_routes() -> Router<ConversationsState> {
    Router::new()
        .route(
            "/v1/conversations",
            post(conversations::create_conversation),
        )
        .route(
            "/v1/conversations/{id}",
            get(conversations::get_conversation),
        )
        .route(
            "/v1/conversations/{id}/summary",
            post(conversations::generate_summary),
        )
}

/// Create message routes
fn message_routes() -> Router<ConversationsState> {
    Router::new().route(
        "/v1/conversations/{conversation_id}/messages",
        get(messages::list_messages).post(messages::send_message),
    )
}

/// Create all Conversations domain API routes
pub fn routes() -> Router<ConversationsState> {
    Router::new()
        .merge(conversation_routes())
        .merge(message_routes())
        .route("/v1/search", get(search::search_messages))
        .route("/v1/audio", post(audio::upload_audio))
}
