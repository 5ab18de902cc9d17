//! Conversations domain state

use std::sync::Arc;

use medbridge_llm::TranslationService;
use medbridge_participants::ParticipantRepository;

use crate::ConversationsRepositories;

/// Application state for the Conversations domain
#[derive(Clone)]
pub struct ConversationsState {
    pub repos: ConversationsRepositories,
    /// Participant lookups for conversation-setup validation
    pub participants: ParticipantRepository,
    pub translator: Arc<dyn TranslationService>,
}
