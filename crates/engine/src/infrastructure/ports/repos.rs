//! Repository port traits for the room and person registries.

use async_trait::async_trait;
use amity_domain::{Person, PersonCategory, PersonId, Room, RoomCategory, RoomId};

use super::error::RepoError;

// =============================================================================
// Room Registry
// =============================================================================

/// Rooms in creation order. Rooms are never deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepo: Send + Sync {
    async fn get(&self, id: RoomId) -> Result<Option<Room>, RepoError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Room>, RepoError>;
    async fn list(&self) -> Result<Vec<Room>, RepoError>;
    async fn list_by_category(&self, category: RoomCategory) -> Result<Vec<Room>, RepoError>;

    /// The room of `category` holding `person_id`, if any.
    async fn find_occupied_by(
        &self,
        person_id: PersonId,
        category: RoomCategory,
    ) -> Result<Option<Room>, RepoError>;

    /// Insert or replace a room by id.
    async fn save(&self, room: &Room) -> Result<(), RepoError>;

    /// Insert or replace several rooms as one write; either all land or none.
    async fn save_all(&self, rooms: &[Room]) -> Result<(), RepoError>;
}

// =============================================================================
// Person Registry
// =============================================================================

/// People in registration order. People are never deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepo: Send + Sync {
    async fn get(&self, id: PersonId) -> Result<Option<Person>, RepoError>;
    async fn list(&self) -> Result<Vec<Person>, RepoError>;
    async fn list_by_category(&self, category: PersonCategory)
        -> Result<Vec<Person>, RepoError>;

    /// Insert or replace a person by id.
    async fn save(&self, person: &Person) -> Result<(), RepoError>;
}
