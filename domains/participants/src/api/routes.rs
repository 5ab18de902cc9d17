//! Route definitions for the Participants domain API

use axum::{routing::get, Router};

use super::handlers::participants;
use super::middleware::ParticipantsState;

/// Create all Participants domain API routes
pub fn routes() -> Router<ParticipantsState> {
    Router::new()
        .route(
            "/v1/participants",
            get(participants::list_participants).post(participants::create_participant),
        )
        .route(
            "/v1/participants/{code}",
            get(participants::get_participant_by_code),
        )
}
