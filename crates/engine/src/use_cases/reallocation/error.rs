//! Reallocation errors.

use amity_domain::{DomainError, PersonId, RoomCategory, RoomId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while moving a person between rooms.
///
/// Every variant leaves both rooms exactly as they were.
#[derive(Debug, thiserror::Error)]
pub enum ReallocationError {
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
    #[error("Person {person_id} has no {} to move from", .category.display_name())]
    NotAllocated {
        person_id: PersonId,
        category: RoomCategory,
    },
    #[error("Cannot reallocate to a different room type: {} to {}", .from.display_name(), .to.display_name())]
    CategoryMismatch {
        from: RoomCategory,
        to: RoomCategory,
    },
    #[error("Person is already in {0}")]
    SameRoom(String),
    #[error("{room_name} is full ({capacity} slots)")]
    RoomFull { room_name: String, capacity: u32 },
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
