//! Create room use case.

use std::sync::Arc;

use amity_domain::{DomainError, Room, RoomCapacities, RoomCategory, RoomName};

use crate::entities::Rooms;
use crate::infrastructure::ports::{ClockPort, RepoError};
use crate::infrastructure::registry_lock::RegistryLock;

#[derive(Debug, thiserror::Error)]
pub enum CreateRoomError {
    #[error("Validation error: {0}")]
    Validation(#[source] DomainError),
    #[error("A room with the same name exists: {0}")]
    DuplicateName(String),
    #[error("Invalid room category: {0}")]
    InvalidCategory(#[source] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Create room use case.
///
/// Orchestrates: name validation, category parsing, duplicate check,
/// capacity assignment, registry insert.
pub struct CreateRoom {
    rooms: Arc<Rooms>,
    clock: Arc<dyn ClockPort>,
    capacities: RoomCapacities,
    lock: RegistryLock,
}

impl CreateRoom {
    pub fn new(
        rooms: Arc<Rooms>,
        clock: Arc<dyn ClockPort>,
        capacities: RoomCapacities,
        lock: RegistryLock,
    ) -> Self {
        Self {
            rooms,
            clock,
            capacities,
            lock,
        }
    }

    /// Create a room named `name` of the category spelled by `category`
    /// (`office` or `living_space`).
    ///
    /// Input is validated before anything is written; a failed call leaves
    /// the registry untouched.
    pub async fn execute(&self, name: &str, category: &str) -> Result<Room, CreateRoomError> {
        let name = RoomName::new(name).map_err(CreateRoomError::Validation)?;
        let category: RoomCategory = category
            .parse()
            .map_err(CreateRoomError::InvalidCategory)?;

        let _guard = self.lock.acquire().await;

        if self.rooms.find_by_name(name.as_str()).await?.is_some() {
            return Err(CreateRoomError::DuplicateName(name.to_string()));
        }

        let capacity = self.capacities.for_category(category);
        let room = Room::new(name, category, capacity, self.clock.now());
        self.rooms.save(&room).await?;

        tracing::info!(
            room_id = %room.id(),
            room_name = %room.name(),
            category = %category,
            capacity,
            "Room created"
        );

        Ok(room)
    }
}
