//! Use cases - user stories orchestrated across the registries.
//!
//! - `rooms` - room creation
//! - `people` - registration, which triggers allocation
//! - `allocation` - random placement into a room with a free slot
//! - `reallocation` - moving a person between rooms of one category
//! - `queries` - read-only listings and lookups

pub mod allocation;
pub mod people;
pub mod queries;
pub mod reallocation;
pub mod rooms;

pub use allocation::{AllocateRoom, Allocation, AllocationError};
pub use people::{
    AllocationOutcome, PeopleUseCases, RegisterPerson, RegisterPersonError, RegisterPersonInput,
    Registration,
};
pub use queries::{Filter, PersonDetail, QueryError, RegistryQueries, RoomDetail};
pub use reallocation::{ReallocatePerson, Reallocation, ReallocationError};
pub use rooms::{CreateRoom, CreateRoomError, RoomUseCases};
