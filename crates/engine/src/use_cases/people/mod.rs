//! People use cases.

mod register_person;
mod types;

pub use register_person::{RegisterPerson, RegisterPersonError};
pub use types::{AllocationOutcome, RegisterPersonInput, Registration};

use std::sync::Arc;

/// Container for people use cases.
pub struct PeopleUseCases {
    pub register: Arc<RegisterPerson>,
}

impl PeopleUseCases {
    pub fn new(register: Arc<RegisterPerson>) -> Self {
        Self { register }
    }
}
