//! Conversations domain: translated message threads, polling retrieval, search, summaries

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Conversation, Message};

// Re-export repository types
pub use repository::{ConversationRepository, ConversationsRepositories, MessageRepository};

// Re-export API types
pub use api::routes;
pub use api::ConversationsState;
