//! Common test helpers: in-memory registries and seeded rooms/people.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::TestRegistry;
//!
//! #[tokio::test]
//! async fn allocates() {
//!     let registry = TestRegistry::new();
//!     let office = registry.room("Valhalla", RoomCategory::Office, 6).await;
//!     let ada = registry.fellow("Ada").await;
//!     // ... test logic
//! }
//! ```

use std::sync::Arc;

use amity_domain::{
    Person, PersonCategory, PersonId, PersonName, Room, RoomCategory, RoomId, RoomName,
};
use chrono::{DateTime, TimeZone, Utc};

use crate::entities::{People, Rooms};
use crate::infrastructure::memory::{InMemoryPersonRepo, InMemoryRoomRepo};
use crate::infrastructure::ports::{PersonRepo, RoomRepo};

/// A fixed instant so timestamps compare equal across runs.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Real in-memory registries plus helpers to seed them directly.
pub struct TestRegistry {
    pub room_repo: Arc<InMemoryRoomRepo>,
    pub person_repo: Arc<InMemoryPersonRepo>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self {
            room_repo: Arc::new(InMemoryRoomRepo::new()),
            person_repo: Arc::new(InMemoryPersonRepo::new()),
        }
    }

    pub fn rooms(&self) -> Arc<Rooms> {
        Arc::new(Rooms::new(self.room_repo.clone()))
    }

    pub fn people(&self) -> Arc<People> {
        Arc::new(People::new(self.person_repo.clone()))
    }

    pub async fn room(&self, name: &str, category: RoomCategory, capacity: u32) -> Room {
        let room = Room::new(RoomName::new(name).unwrap(), category, capacity, fixed_now());
        self.room_repo.save(&room).await.unwrap();
        room
    }

    /// A room whose every slot is already taken by an anonymous occupant.
    pub async fn full_room(&self, name: &str, category: RoomCategory, capacity: u32) -> Room {
        let mut room = Room::new(RoomName::new(name).unwrap(), category, capacity, fixed_now());
        for _ in 0..capacity {
            room.admit(PersonId::new()).unwrap();
        }
        self.room_repo.save(&room).await.unwrap();
        room
    }

    pub async fn person(&self, first_name: &str, category: PersonCategory) -> Person {
        let person = Person::new(
            PersonName::new(first_name).unwrap(),
            PersonName::new("Tester").unwrap(),
            category,
            fixed_now(),
        );
        self.person_repo.save(&person).await.unwrap();
        person
    }

    pub async fn fellow(&self, first_name: &str) -> Person {
        self.person(first_name, PersonCategory::Fellow).await
    }

    pub async fn staff(&self, first_name: &str) -> Person {
        self.person(first_name, PersonCategory::Staff).await
    }

    /// Put an existing person into an existing room, bypassing selection.
    pub async fn place(&self, person_id: PersonId, room_id: RoomId) -> Room {
        let mut room = self.room_repo.get(room_id).await.unwrap().unwrap();
        room.admit(person_id).unwrap();
        self.room_repo.save(&room).await.unwrap();
        room
    }

    pub async fn reload_room(&self, room_id: RoomId) -> Room {
        self.room_repo.get(room_id).await.unwrap().unwrap()
    }

    pub async fn reload_person(&self, person_id: PersonId) -> Person {
        self.person_repo.get(person_id).await.unwrap().unwrap()
    }
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}
