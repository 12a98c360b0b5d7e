//! Amity domain types.
//!
//! Rooms, people, and the occupancy rules between them. Everything here is
//! synchronous and free of I/O; the engine crate owns storage, selection, and
//! orchestration.

extern crate self as amity_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Accommodation, Person, PersonCategory, Room, RoomCategory, STAFF_LIVING_SPACE_NOTICE,
};
pub use error::DomainError;
pub use ids::{PersonId, RoomId};
pub use value_objects::{PersonName, RoomCapacities, RoomName};
