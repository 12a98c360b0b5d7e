//! Room aggregate - an office or living space with a fixed number of slots
//!
//! Occupancy is stored as a fixed-length list of optional slots. Admitting a
//! person fills the lowest empty slot; vacating leaves the slot empty in place.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::RoomName;
use amity_domain::{PersonId, RoomId};

/// The kind of room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    /// Daytime workspace
    Office,
    /// Overnight accommodation, fellows only
    LivingSpace,
}

impl RoomCategory {
    pub const ALL: [RoomCategory; 2] = [RoomCategory::Office, RoomCategory::LivingSpace];

    /// Get a display-friendly name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::LivingSpace => "Living Space",
        }
    }

    /// Get the canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::LivingSpace => "living_space",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "office" => Ok(Self::Office),
            "living_space" | "livingspace" | "living space" => Ok(Self::LivingSpace),
            _ => Err(DomainError::parse(format!(
                "A room can only be living space or office, got '{}'",
                s
            ))),
        }
    }
}

/// A room with capacity-bounded occupancy
///
/// # Invariants
///
/// - `slots.len()` equals the capacity fixed at creation and never changes
/// - a person id appears in at most one slot
/// - the occupied-slot count never exceeds the capacity
///
/// Slots only change through [`admit`](Self::admit) and
/// [`vacate`](Self::vacate), so a room cannot be rebuilt from raw data:
///
/// ```compile_fail
/// let _: amity_domain::Room = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    id: RoomId,
    name: RoomName,
    category: RoomCategory,
    slots: Vec<Option<PersonId>>,
    created_at: DateTime<Utc>,
}

impl Room {
    /// Create an empty room with `capacity` slots.
    ///
    /// # Example
    ///
    /// ```
    /// use amity_domain::{Room, RoomCategory, RoomName};
    ///
    /// let name = RoomName::new("Valhalla").unwrap();
    /// let room = Room::new(name, RoomCategory::Office, 6, chrono::Utc::now());
    ///
    /// assert_eq!(room.capacity(), 6);
    /// assert_eq!(room.occupied_count(), 0);
    /// ```
    pub fn new(name: RoomName, category: RoomCategory, capacity: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: RoomId::new(),
            name,
            category,
            slots: vec![None; capacity as usize],
            created_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> RoomId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &RoomName {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> RoomCategory {
        self.category
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Slots in order; `None` marks an empty slot.
    pub fn slots(&self) -> &[Option<PersonId>] {
        &self.slots
    }

    /// Ids of the people currently in the room, in slot order.
    pub fn occupants(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn occupied_count(&self) -> u32 {
        self.slots.iter().filter(|slot| slot.is_some()).count() as u32
    }

    pub fn has_available_slot(&self) -> bool {
        self.slots.iter().any(Option::is_none)
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    pub fn contains(&self, person_id: PersonId) -> bool {
        self.slots.contains(&Some(person_id))
    }

    // =========================================================================
    // Occupancy
    // =========================================================================

    /// Place a person in the lowest empty slot and return the slot index.
    ///
    /// # Errors
    ///
    /// - `DomainError::Constraint` if the person already occupies a slot
    /// - `DomainError::ContainerFull` if no slot is empty
    pub fn admit(&mut self, person_id: PersonId) -> Result<usize, DomainError> {
        if self.contains(person_id) {
            return Err(DomainError::constraint(format!(
                "{} is already in room {}",
                person_id, self.name
            )));
        }
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or_else(|| DomainError::container_full(self.occupied_count(), self.capacity()))?;
        self.slots[index] = Some(person_id);
        Ok(index)
    }

    /// Empty the slot held by a person and return its index.
    ///
    /// Other occupants keep their slots.
    pub fn vacate(&mut self, person_id: PersonId) -> Result<usize, DomainError> {
        let index = self
            .slots
            .iter()
            .position(|slot| *slot == Some(person_id))
            .ok_or_else(|| DomainError::not_found("Occupant", person_id.to_string()))?;
        self.slots[index] = None;
        Ok(index)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}/{}",
            self.name,
            self.category.display_name(),
            self.occupied_count(),
            self.capacity()
        )
    }
}
