//! Query use cases.
//!
//! Read-only views over the registries. Results are in registry order, so
//! repeating a query without an intervening write returns the same thing.

mod error;
mod types;

pub use error::QueryError;
pub use types::{Filter, PersonDetail, RoomDetail};

use std::sync::Arc;

use amity_domain::{Person, PersonCategory, PersonId, Room, RoomCategory, RoomId};

use crate::entities::{People, Rooms};

/// Read-only registry queries.
pub struct RegistryQueries {
    rooms: Arc<Rooms>,
    people: Arc<People>,
}

impl RegistryQueries {
    pub fn new(rooms: Arc<Rooms>, people: Arc<People>) -> Self {
        Self { rooms, people }
    }

    /// Parse a filter such as `all`, `fellow`, or `living_space`.
    pub fn parse_filter<C>(raw: &str) -> Result<Filter<C>, QueryError>
    where
        C: std::str::FromStr<Err = amity_domain::DomainError>,
    {
        raw.parse().map_err(QueryError::InvalidFilter)
    }

    pub async fn list_people(
        &self,
        filter: Filter<PersonCategory>,
    ) -> Result<Vec<Person>, QueryError> {
        let people = match filter {
            Filter::All => self.people.list().await?,
            Filter::Only(category) => self.people.list_by_category(category).await?,
        };
        if people.is_empty() {
            return Err(QueryError::Empty("people"));
        }
        Ok(people)
    }

    pub async fn list_rooms(&self, filter: Filter<RoomCategory>) -> Result<Vec<Room>, QueryError> {
        let rooms = match filter {
            Filter::All => self.rooms.list().await?,
            Filter::Only(category) => self.rooms.list_by_category(category).await?,
        };
        if rooms.is_empty() {
            return Err(QueryError::Empty("rooms"));
        }
        Ok(rooms)
    }

    pub async fn room_detail(&self, room_id: RoomId) -> Result<RoomDetail, QueryError> {
        let room = self
            .rooms
            .get(room_id)
            .await?
            .ok_or(QueryError::RoomNotFound(room_id))?;

        let mut occupants = Vec::with_capacity(room.occupied_count() as usize);
        for person_id in room.occupants() {
            match self.people.get(person_id).await? {
                Some(person) => occupants.push(person),
                None => tracing::warn!(
                    room_id = %room_id,
                    person_id = %person_id,
                    "Occupant missing from person registry"
                ),
            }
        }

        Ok(RoomDetail { room, occupants })
    }

    pub async fn person_detail(&self, person_id: PersonId) -> Result<PersonDetail, QueryError> {
        let person = self.require_person(person_id).await?;
        self.detail_for(person).await
    }

    pub async fn office_for_person(&self, person_id: PersonId) -> Result<Room, QueryError> {
        self.room_for_person(person_id, RoomCategory::Office).await
    }

    pub async fn living_space_for_person(&self, person_id: PersonId) -> Result<Room, QueryError> {
        self.room_for_person(person_id, RoomCategory::LivingSpace)
            .await
    }

    /// Everyone holding at least one room, in registration order.
    pub async fn allocated_people(&self) -> Result<Vec<PersonDetail>, QueryError> {
        let mut allocated = Vec::new();
        for person in self.people.list().await? {
            let detail = self.detail_for(person).await?;
            if detail.is_allocated() {
                allocated.push(detail);
            }
        }
        if allocated.is_empty() {
            return Err(QueryError::Empty("allocated people"));
        }
        Ok(allocated)
    }

    async fn require_person(&self, person_id: PersonId) -> Result<Person, QueryError> {
        self.people
            .get(person_id)
            .await?
            .ok_or(QueryError::PersonNotFound(person_id))
    }

    async fn room_for_person(
        &self,
        person_id: PersonId,
        category: RoomCategory,
    ) -> Result<Room, QueryError> {
        self.require_person(person_id).await?;
        self.rooms
            .occupied_by(person_id, category)
            .await?
            .ok_or(QueryError::NotAllocated {
                person_id,
                category,
            })
    }

    async fn detail_for(&self, person: Person) -> Result<PersonDetail, QueryError> {
        let office = self
            .rooms
            .occupied_by(person.id(), RoomCategory::Office)
            .await?;
        let living_space = self
            .rooms
            .occupied_by(person.id(), RoomCategory::LivingSpace)
            .await?;
        Ok(PersonDetail {
            person,
            office,
            living_space,
        })
    }
}
