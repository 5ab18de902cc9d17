//! Participants domain: clinician/patient identities and unique-code allocation

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::allocator::allocate_code;
pub use domain::entities::{Participant, ParticipantRole};

// Re-export repository types
pub use repository::{ParticipantRepository, ParticipantsRepositories};

// Re-export API types
pub use api::routes;
pub use api::ParticipantsState;
