//! Allocation result types.

use amity_domain::{PersonId, RoomCategory, RoomId};
use serde::Serialize;

/// A completed allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub person_id: PersonId,
    pub room_id: RoomId,
    pub room_name: String,
    pub category: RoomCategory,
    /// Index of the slot the person now holds.
    pub slot: usize,
}
