//! Allocate room use case.
//!
//! Picks uniformly at random among rooms of the requested category that
//! still have a free slot. The candidate set is recomputed on every call, so
//! an office allocation made a moment earlier is visible to the next one.

use std::sync::Arc;

use amity_domain::{PersonId, Room, RoomCategory};

use crate::entities::{People, Rooms};
use crate::infrastructure::ports::RandomPort;
use crate::infrastructure::registry_lock::{RegistryGuard, RegistryLock};

use super::error::AllocationError;
use super::types::Allocation;

/// Allocate room use case.
///
/// Orchestrates: person lookup, eligibility, candidate selection, slot
/// assignment, accommodation flag.
pub struct AllocateRoom {
    rooms: Arc<Rooms>,
    people: Arc<People>,
    random: Arc<dyn RandomPort>,
    lock: RegistryLock,
}

impl AllocateRoom {
    pub fn new(
        rooms: Arc<Rooms>,
        people: Arc<People>,
        random: Arc<dyn RandomPort>,
        lock: RegistryLock,
    ) -> Self {
        Self {
            rooms,
            people,
            random,
            lock,
        }
    }

    /// Allocate a room of `category` to an already registered person.
    pub async fn execute(
        &self,
        person_id: PersonId,
        category: RoomCategory,
    ) -> Result<Allocation, AllocationError> {
        let guard = self.lock.acquire().await;
        self.execute_locked(&guard, person_id, category).await
    }

    /// Same as [`execute`](Self::execute) for callers already holding the
    /// registry lock.
    pub(crate) async fn execute_locked(
        &self,
        guard: &RegistryGuard<'_>,
        person_id: PersonId,
        category: RoomCategory,
    ) -> Result<Allocation, AllocationError> {
        debug_assert!(
            guard.is_held_on(&self.lock),
            "allocation run under a guard from another registry lock"
        );
        let mut person = self
            .people
            .get(person_id)
            .await?
            .ok_or(AllocationError::PersonNotFound(person_id))?;

        if !person.category().is_eligible_for(category) {
            return Err(AllocationError::StaffNotEligible(person_id));
        }

        if let Some(current) = self.rooms.occupied_by(person_id, category).await? {
            return Err(AllocationError::AlreadyAllocated {
                person_id,
                category,
                room_name: current.name().to_string(),
            });
        }

        let candidates = self.rooms.with_available_slots(category).await?;
        tracing::debug!(
            person_id = %person_id,
            category = %category,
            candidates = candidates.len(),
            "Selecting room"
        );

        let original = self
            .select(&candidates)
            .cloned()
            .ok_or(AllocationError::NoAvailableRoom(category))?;

        let mut room = original.clone();
        let slot = room.admit(person_id)?;
        let flag_changed = category == RoomCategory::LivingSpace && !person.is_accommodated();
        if flag_changed {
            person.mark_accommodated()?;
        }

        self.rooms.save(&room).await?;
        if flag_changed {
            if let Err(err) = self.people.save(&person).await {
                // Undo the room write so the occupant and the flag never disagree.
                if let Err(rollback) = self.rooms.save(&original).await {
                    tracing::error!(
                        person_id = %person_id,
                        room_id = %original.id(),
                        error = %rollback,
                        "Failed to roll back room after person write failed"
                    );
                }
                return Err(err.into());
            }
        }

        tracing::info!(
            person_id = %person_id,
            room_id = %room.id(),
            room_name = %room.name(),
            category = %category,
            slot,
            "{} has been allocated to {} {}",
            person.full_name(),
            category.display_name(),
            room.name()
        );

        Ok(Allocation {
            person_id,
            room_id: room.id(),
            room_name: room.name().to_string(),
            category,
            slot,
        })
    }

    fn select<'a>(&self, candidates: &'a [Room]) -> Option<&'a Room> {
        let last = candidates.len().checked_sub(1)?;
        candidates.get(self.random.gen_range(0, last))
    }
}
