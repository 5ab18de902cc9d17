//! API layer for the Participants domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ParticipantsState;
pub use routes::routes;
