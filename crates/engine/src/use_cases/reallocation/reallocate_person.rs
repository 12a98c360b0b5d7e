//! Reallocate person use case.
//!
//! Moves a person from their current room of a category into another room of
//! the same category. Preconditions are checked in a fixed order and each
//! maps to its own error; the move itself is written as one batch.

use std::sync::Arc;

use amity_domain::{PersonId, RoomCategory, RoomId};
use serde::Serialize;

use crate::entities::{People, Rooms};
use crate::infrastructure::registry_lock::RegistryLock;

use super::error::ReallocationError;

/// A completed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reallocation {
    pub person_id: PersonId,
    pub category: RoomCategory,
    pub from_room_id: RoomId,
    pub from_room_name: String,
    pub to_room_id: RoomId,
    pub to_room_name: String,
    pub slot: usize,
}

/// Reallocate person use case.
pub struct ReallocatePerson {
    rooms: Arc<Rooms>,
    people: Arc<People>,
    lock: RegistryLock,
}

impl ReallocatePerson {
    pub fn new(rooms: Arc<Rooms>, people: Arc<People>, lock: RegistryLock) -> Self {
        Self {
            rooms,
            people,
            lock,
        }
    }

    /// Move `person_id` out of their current `category` room into
    /// `target_room_id`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// 1. `RoomNotFound` - target room doesn't exist
    /// 2. `PersonNotFound` - person doesn't exist
    /// 3. `NotAllocated` - person holds no room of `category`
    /// 4. `CategoryMismatch` - target room is of another category
    /// 5. `SameRoom` - target is the room the person is already in
    /// 6. `RoomFull` - target has no empty slot
    pub async fn execute(
        &self,
        person_id: PersonId,
        target_room_id: RoomId,
        category: RoomCategory,
    ) -> Result<Reallocation, ReallocationError> {
        let _guard = self.lock.acquire().await;

        let mut target = self
            .rooms
            .get(target_room_id)
            .await?
            .ok_or(ReallocationError::RoomNotFound(target_room_id))?;

        let person = self
            .people
            .get(person_id)
            .await?
            .ok_or(ReallocationError::PersonNotFound(person_id))?;

        let mut source = self
            .rooms
            .occupied_by(person_id, category)
            .await?
            .ok_or(ReallocationError::NotAllocated {
                person_id,
                category,
            })?;

        if source.category() != target.category() {
            return Err(ReallocationError::CategoryMismatch {
                from: source.category(),
                to: target.category(),
            });
        }

        if source.id() == target.id() {
            return Err(ReallocationError::SameRoom(target.name().to_string()));
        }

        if !target.has_available_slot() {
            return Err(ReallocationError::RoomFull {
                room_name: target.name().to_string(),
                capacity: target.capacity(),
            });
        }

        // Both mutations happen on local copies; nothing is visible until the
        // batch write below.
        source.vacate(person_id)?;
        let slot = target.admit(person_id)?;
        self.rooms.save_all(&[source.clone(), target.clone()]).await?;

        tracing::info!(
            person_id = %person_id,
            from_room_id = %source.id(),
            to_room_id = %target.id(),
            category = %category,
            "{} reallocated from {} to {}",
            person.full_name(),
            source.name(),
            target.name()
        );

        Ok(Reallocation {
            person_id,
            category,
            from_room_id: source.id(),
            from_room_name: source.name().to_string(),
            to_room_id: target.id(),
            to_room_name: target.name().to_string(),
            slot,
        })
    }
}
