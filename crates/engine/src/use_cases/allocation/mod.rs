//! Allocation use cases.
//!
//! Places a registered person into a randomly chosen room with a free slot.

mod allocate_room;
mod error;
mod types;

pub use allocate_room::AllocateRoom;
pub use error::AllocationError;
pub use types::Allocation;
