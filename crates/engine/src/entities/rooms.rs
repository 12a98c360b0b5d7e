//! Room registry operations.

use std::sync::Arc;

use amity_domain::{self as domain, PersonId, RoomCategory, RoomId};

use crate::infrastructure::ports::{RepoError, RoomRepo};

/// Errors from registry-level room queries.
#[derive(Debug, thiserror::Error)]
pub enum RoomRegistryError {
    #[error("There are no rooms available.")]
    NoRoomsAvailable,
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Room registry operations.
///
/// Wraps the room repository with the queries the allocation engine needs.
pub struct Rooms {
    repo: Arc<dyn RoomRepo>,
}

impl Rooms {
    pub fn new(repo: Arc<dyn RoomRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: RoomId) -> Result<Option<domain::Room>, RepoError> {
        self.repo.get(id).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<domain::Room>, RepoError> {
        self.repo.get_by_name(name).await
    }

    pub async fn list(&self) -> Result<Vec<domain::Room>, RepoError> {
        self.repo.list().await
    }

    pub async fn list_by_category(
        &self,
        category: RoomCategory,
    ) -> Result<Vec<domain::Room>, RepoError> {
        self.repo.list_by_category(category).await
    }

    pub async fn occupied_by(
        &self,
        person_id: PersonId,
        category: RoomCategory,
    ) -> Result<Option<domain::Room>, RepoError> {
        self.repo.find_occupied_by(person_id, category).await
    }

    pub async fn save(&self, room: &domain::Room) -> Result<(), RepoError> {
        self.repo.save(room).await
    }

    pub async fn save_all(&self, rooms: &[domain::Room]) -> Result<(), RepoError> {
        self.repo.save_all(rooms).await
    }

    /// Rooms of `category` with at least one empty slot, in creation order.
    ///
    /// Fails with `NoRoomsAvailable` only when the registry holds no rooms
    /// at all; an empty vector means rooms exist but none of them qualify.
    pub async fn with_available_slots(
        &self,
        category: RoomCategory,
    ) -> Result<Vec<domain::Room>, RoomRegistryError> {
        let all = self.repo.list().await?;
        if all.is_empty() {
            return Err(RoomRegistryError::NoRoomsAvailable);
        }
        Ok(all
            .into_iter()
            .filter(|room| room.category() == category && room.has_available_slot())
            .collect())
    }
}
