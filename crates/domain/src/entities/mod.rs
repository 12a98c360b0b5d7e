//! Entities - the two aggregates whose state the engine mutates.

pub mod person;
pub mod room;

pub use person::{Accommodation, Person, PersonCategory, STAFF_LIVING_SPACE_NOTICE};
pub use room::{Room, RoomCategory};
