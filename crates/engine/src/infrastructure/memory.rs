//! In-memory registries.
//!
//! Insertion-ordered vectors behind a `tokio::sync::RwLock`. Lifetime equals
//! the owning `App`; nothing is persisted.

use async_trait::async_trait;
use tokio::sync::RwLock;

use amity_domain::{Person, PersonCategory, PersonId, Room, RoomCategory, RoomId};

use crate::infrastructure::ports::{PersonRepo, RepoError, RoomRepo};

/// Room registry held in memory.
#[derive(Default)]
pub struct InMemoryRoomRepo {
    rooms: RwLock<Vec<Room>>,
}

impl InMemoryRoomRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

fn upsert_room(rooms: &mut Vec<Room>, room: &Room) {
    match rooms.iter_mut().find(|existing| existing.id() == room.id()) {
        Some(existing) => *existing = room.clone(),
        None => rooms.push(room.clone()),
    }
}

#[async_trait]
impl RoomRepo for InMemoryRoomRepo {
    async fn get(&self, id: RoomId) -> Result<Option<Room>, RepoError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.iter().find(|room| room.id() == id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Room>, RepoError> {
        let rooms = self.rooms.read().await;
        Ok(rooms
            .iter()
            .find(|room| room.name().as_str() == name.trim())
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Room>, RepoError> {
        Ok(self.rooms.read().await.clone())
    }

    async fn list_by_category(&self, category: RoomCategory) -> Result<Vec<Room>, RepoError> {
        let rooms = self.rooms.read().await;
        Ok(rooms
            .iter()
            .filter(|room| room.category() == category)
            .cloned()
            .collect())
    }

    async fn find_occupied_by(
        &self,
        person_id: PersonId,
        category: RoomCategory,
    ) -> Result<Option<Room>, RepoError> {
        let rooms = self.rooms.read().await;
        Ok(rooms
            .iter()
            .find(|room| room.category() == category && room.contains(person_id))
            .cloned())
    }

    async fn save(&self, room: &Room) -> Result<(), RepoError> {
        let mut rooms = self.rooms.write().await;
        upsert_room(&mut rooms, room);
        Ok(())
    }

    async fn save_all(&self, batch: &[Room]) -> Result<(), RepoError> {
        // One write guard for the whole batch, so readers see all or none.
        let mut rooms = self.rooms.write().await;
        for room in batch {
            upsert_room(&mut rooms, room);
        }
        Ok(())
    }
}

/// Person registry held in memory.
#[derive(Default)]
pub struct InMemoryPersonRepo {
    people: RwLock<Vec<Person>>,
}

impl InMemoryPersonRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepo for InMemoryPersonRepo {
    async fn get(&self, id: PersonId) -> Result<Option<Person>, RepoError> {
        let people = self.people.read().await;
        Ok(people.iter().find(|person| person.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Person>, RepoError> {
        Ok(self.people.read().await.clone())
    }

    async fn list_by_category(
        &self,
        category: PersonCategory,
    ) -> Result<Vec<Person>, RepoError> {
        let people = self.people.read().await;
        Ok(people
            .iter()
            .filter(|person| person.category() == category)
            .cloned()
            .collect())
    }

    async fn save(&self, person: &Person) -> Result<(), RepoError> {
        let mut people = self.people.write().await;
        match people.iter_mut().find(|existing| existing.id() == person.id()) {
            Some(existing) => *existing = person.clone(),
            None => people.push(person.clone()),
        }
        Ok(())
    }
}
