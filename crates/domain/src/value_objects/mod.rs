//! Value objects - validated, immutable building blocks for the entities.

mod capacity;
mod names;

pub use capacity::{RoomCapacities, DEFAULT_LIVING_SPACE_CAPACITY, DEFAULT_OFFICE_CAPACITY};
pub use names::{PersonName, RoomName};
