//! Allocation errors.

use amity_domain::{DomainError, PersonId, RoomCategory, STAFF_LIVING_SPACE_NOTICE};

use crate::entities::RoomRegistryError;
use crate::infrastructure::ports::RepoError;

/// Errors that can occur while allocating a room to a person.
///
/// Capacity shortages (`NoRoomsAvailable`, `NoAvailableRoom`) are not fatal
/// to registration: the person simply stays unallocated for that category.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
    #[error("There are no rooms available.")]
    NoRoomsAvailable,
    #[error("No {} with a free slot", .0.display_name())]
    NoAvailableRoom(RoomCategory),
    #[error("{}", STAFF_LIVING_SPACE_NOTICE)]
    StaffNotEligible(PersonId),
    #[error("Person {person_id} already has a {} in {room_name}", .category.display_name())]
    AlreadyAllocated {
        person_id: PersonId,
        category: RoomCategory,
        room_name: String,
    },
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl AllocationError {
    /// True when the attempt failed only for lack of capacity.
    pub fn is_capacity_shortage(&self) -> bool {
        matches!(self, Self::NoRoomsAvailable | Self::NoAvailableRoom(_))
    }
}

impl From<RoomRegistryError> for AllocationError {
    fn from(err: RoomRegistryError) -> Self {
        match err {
            RoomRegistryError::NoRoomsAvailable => Self::NoRoomsAvailable,
            RoomRegistryError::Repo(e) => Self::Repo(e),
        }
    }
}
