//! Entity modules - registry capability encapsulation.
//!
//! Each module wraps repository operations for one aggregate type.
//! They depend on repository ports and provide the building blocks for use cases.

pub mod people;
pub mod rooms;

pub use people::People;
pub use rooms::{RoomRegistryError, Rooms};
