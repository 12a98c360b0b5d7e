//! Query errors.

use amity_domain::{DomainError, PersonId, RoomCategory, RoomId};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
    #[error("Person {person_id} has no {}", .category.display_name())]
    NotAllocated {
        person_id: PersonId,
        category: RoomCategory,
    },
    #[error("No {0} to list")]
    Empty(&'static str),
    #[error("Invalid filter: {0}")]
    InvalidFilter(#[source] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
