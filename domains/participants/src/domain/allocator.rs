//! Unique-code allocation for participants
//!
//! Codes are human-readable role-prefixed sequence numbers (DOC001,
//! PAT042). Allocation is an optimistic check-then-insert loop: count the
//! stored participants of the role, propose the next sequence number, and
//! bump past any collision left by gaps or concurrent writers. The unique
//! index on `participants.code` is the final arbiter under a true race.

use crate::domain::entities::ParticipantRole;
use crate::repository::ParticipantRepository;
use medbridge_common::Result;

/// Format a role-prefixed code with a zero-padded sequence number
fn format_code(role: ParticipantRole, sequence: i64) -> String {
    format!("{}{:03}", role.code_prefix(), sequence)
}

/// Allocate an unused unique code for a participant of the given role
pub async fn allocate_code(repo: &ParticipantRepository, role: ParticipantRole) -> Result<String> {
    let count = repo.count_by_role(role).await?;
    let mut sequence = count + 1;
    let mut code = format_code(role, sequence);

    while repo.find_by_code(&code).await?.is_some() {
        sequence += 1;
        code = format_code(role, sequence);
    }

    Ok(code)
}
