//! Fixed slot counts for the two room categories.

use serde::{Deserialize, Serialize};

use crate::entities::RoomCategory;
use crate::error::DomainError;

/// Default number of occupant slots in an office.
pub const DEFAULT_OFFICE_CAPACITY: u32 = 6;

/// Default number of occupant slots in a living space.
pub const DEFAULT_LIVING_SPACE_CAPACITY: u32 = 4;

/// Slot counts per room category.
///
/// Every room of a category gets the same capacity; there is no per-room
/// override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCapacities {
    office: u32,
    living_space: u32,
}

impl RoomCapacities {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either capacity is zero.
    pub fn new(office: u32, living_space: u32) -> Result<Self, DomainError> {
        if office == 0 || living_space == 0 {
            return Err(DomainError::validation(format!(
                "Room capacities must be positive (office={}, living_space={})",
                office, living_space
            )));
        }
        Ok(Self {
            office,
            living_space,
        })
    }

    pub fn office(&self) -> u32 {
        self.office
    }

    pub fn living_space(&self) -> u32 {
        self.living_space
    }

    pub fn for_category(&self, category: RoomCategory) -> u32 {
        match category {
            RoomCategory::Office => self.office,
            RoomCategory::LivingSpace => self.living_space,
        }
    }
}

impl Default for RoomCapacities {
    fn default() -> Self {
        Self {
            office: DEFAULT_OFFICE_CAPACITY,
            living_space: DEFAULT_LIVING_SPACE_CAPACITY,
        }
    }
}
