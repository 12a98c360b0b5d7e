//! Register person use case.
//!
//! Adds a person to the registry, then makes two independent allocation
//! attempts: an office always, a living space when asked for. Neither failure
//! undoes the registration.

use std::sync::Arc;

use amity_domain::{
    DomainError, Person, PersonCategory, PersonName, RoomCategory, STAFF_LIVING_SPACE_NOTICE,
};

use crate::entities::People;
use crate::infrastructure::ports::{ClockPort, RepoError};
use crate::infrastructure::registry_lock::{RegistryGuard, RegistryLock};
use crate::use_cases::allocation::{AllocateRoom, AllocationError};

use super::types::{AllocationOutcome, RegisterPersonInput, Registration};

#[derive(Debug, thiserror::Error)]
pub enum RegisterPersonError {
    #[error("Validation error: {0}")]
    Validation(#[source] DomainError),
    #[error("Invalid person category: {0}")]
    InvalidCategory(#[source] DomainError),
    #[error("Allocation failed: {0}")]
    Allocation(#[source] AllocationError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Register person use case.
///
/// Orchestrates: name validation, registry insert, office allocation,
/// living-space allocation or staff notice.
pub struct RegisterPerson {
    people: Arc<People>,
    allocate: Arc<AllocateRoom>,
    clock: Arc<dyn ClockPort>,
    lock: RegistryLock,
}

impl RegisterPerson {
    pub fn new(
        people: Arc<People>,
        allocate: Arc<AllocateRoom>,
        clock: Arc<dyn ClockPort>,
        lock: RegistryLock,
    ) -> Self {
        Self {
            people,
            allocate,
            clock,
            lock,
        }
    }

    /// Add a person to the registry without attempting any allocation.
    pub async fn add_person(
        &self,
        first_name: &str,
        last_name: &str,
        category: &str,
    ) -> Result<Person, RegisterPersonError> {
        let person = self.build(first_name, last_name, category)?;
        let _guard = self.lock.acquire().await;
        self.insert(&person).await?;
        Ok(person)
    }

    /// Add a person, then attempt an office and, if requested, a living space.
    pub async fn execute(
        &self,
        input: RegisterPersonInput,
    ) -> Result<Registration, RegisterPersonError> {
        let person = self.build(&input.first_name, &input.last_name, &input.category)?;
        let category = person.category();

        let guard = self.lock.acquire().await;
        self.insert(&person).await?;

        let office = self
            .attempt(&guard, &person, RoomCategory::Office)
            .await?;

        let living_space = if !input.accommodation.is_wanted() {
            AllocationOutcome::NotRequested
        } else if !category.is_eligible_for(RoomCategory::LivingSpace) {
            tracing::info!(
                person_id = %person.id(),
                name = %person.full_name(),
                "{}",
                STAFF_LIVING_SPACE_NOTICE
            );
            AllocationOutcome::NotEligible {
                notice: STAFF_LIVING_SPACE_NOTICE.to_string(),
            }
        } else {
            self.attempt(&guard, &person, RoomCategory::LivingSpace)
                .await?
        };

        // Pick up the accommodation flag written by the living-space attempt.
        let person = self
            .people
            .get(person.id())
            .await?
            .unwrap_or(person);

        Ok(Registration {
            person,
            office,
            living_space,
        })
    }

    /// Validate input and build an unsaved person. Nothing is written on error.
    fn build(
        &self,
        first_name: &str,
        last_name: &str,
        category: &str,
    ) -> Result<Person, RegisterPersonError> {
        let first_name = PersonName::new(first_name).map_err(RegisterPersonError::Validation)?;
        let last_name = PersonName::new(last_name).map_err(RegisterPersonError::Validation)?;
        let category: PersonCategory = category
            .parse()
            .map_err(RegisterPersonError::InvalidCategory)?;
        Ok(Person::new(first_name, last_name, category, self.clock.now()))
    }

    async fn insert(&self, person: &Person) -> Result<(), RegisterPersonError> {
        self.people.save(person).await?;
        tracing::info!(
            person_id = %person.id(),
            name = %person.full_name(),
            category = %person.category(),
            "Person registered"
        );
        Ok(())
    }

    /// One allocation attempt. Capacity shortages become an outcome; anything
    /// else is a real failure.
    async fn attempt(
        &self,
        guard: &RegistryGuard<'_>,
        person: &Person,
        category: RoomCategory,
    ) -> Result<AllocationOutcome, RegisterPersonError> {
        match self.allocate.execute_locked(guard, person.id(), category).await {
            Ok(allocation) => Ok(AllocationOutcome::Allocated(allocation)),
            Err(err) if err.is_capacity_shortage() => {
                tracing::warn!(
                    person_id = %person.id(),
                    category = %category,
                    error = %err,
                    "Person left without a {}",
                    category.display_name()
                );
                Ok(AllocationOutcome::unavailable(&err))
            }
            Err(AllocationError::Repo(err)) => Err(RegisterPersonError::Repo(err)),
            Err(err) => Err(RegisterPersonError::Allocation(err)),
        }
    }
}
