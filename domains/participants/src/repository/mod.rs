//! Repository implementations for the Participants domain

pub mod participants;

use sqlx::PgPool;

pub use participants::ParticipantRepository;

/// Combined repository access for the Participants domain
#[derive(Clone)]
pub struct ParticipantsRepositories {
    pool: PgPool,
    pub participants: ParticipantRepository,
}

impl ParticipantsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            participants: ParticipantRepository::new(pool.clone()),
            pool,
        }
    }

    /// Get a reference to the underlying pool (for cross-domain wiring)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
