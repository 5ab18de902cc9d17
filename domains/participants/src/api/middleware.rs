//! Participants domain state

use crate::ParticipantsRepositories;

/// Application state for the Participants domain
#[derive(Clone)]
pub struct ParticipantsState {
    pub repos: ParticipantsRepositories,
}
