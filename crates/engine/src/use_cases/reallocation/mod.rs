//! Reallocation use cases.

mod error;
mod reallocate_person;

pub use error::ReallocationError;
pub use reallocate_person::{ReallocatePerson, Reallocation};
