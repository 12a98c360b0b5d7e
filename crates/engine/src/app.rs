//! Application state and composition.

use std::sync::Arc;

use amity_domain::RoomCapacities;

use crate::entities::{People, Rooms};
use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    config::AmityConfig,
    memory::{InMemoryPersonRepo, InMemoryRoomRepo},
    ports::{ClockPort, PersonRepo, RandomPort, RoomRepo},
    registry_lock::RegistryLock,
};
use crate::use_cases;

/// Main application state.
///
/// Owns one room registry and one person registry. Every `App` is an
/// independent system; building a new one starts from empty registries.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub rooms: use_cases::RoomUseCases,
    pub people: use_cases::PeopleUseCases,
    pub allocation: Arc<use_cases::AllocateRoom>,
    pub reallocation: Arc<use_cases::ReallocatePerson>,
    pub queries: Arc<use_cases::RegistryQueries>,
}

impl App {
    /// Compose the application around the given ports.
    pub fn new(
        room_repo: Arc<dyn RoomRepo>,
        person_repo: Arc<dyn PersonRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        capacities: RoomCapacities,
    ) -> Self {
        let lock = RegistryLock::new();
        let rooms = Arc::new(Rooms::new(room_repo));
        let people = Arc::new(People::new(person_repo));

        let create_room = Arc::new(use_cases::CreateRoom::new(
            rooms.clone(),
            clock.clone(),
            capacities,
            lock.clone(),
        ));
        let allocation = Arc::new(use_cases::AllocateRoom::new(
            rooms.clone(),
            people.clone(),
            random,
            lock.clone(),
        ));
        let register = Arc::new(use_cases::RegisterPerson::new(
            people.clone(),
            allocation.clone(),
            clock,
            lock.clone(),
        ));
        let reallocation = Arc::new(use_cases::ReallocatePerson::new(
            rooms.clone(),
            people.clone(),
            lock,
        ));
        let queries = Arc::new(use_cases::RegistryQueries::new(rooms, people));

        Self {
            use_cases: UseCases {
                rooms: use_cases::RoomUseCases::new(create_room),
                people: use_cases::PeopleUseCases::new(register),
                allocation,
                reallocation,
                queries,
            },
        }
    }

    /// A fresh system backed by in-memory registries.
    pub fn in_memory(config: &AmityConfig) -> Self {
        let random: Arc<dyn RandomPort> = match config.random_seed {
            Some(seed) => Arc::new(SystemRandom::seeded(seed)),
            None => Arc::new(SystemRandom::new()),
        };
        Self::new(
            Arc::new(InMemoryRoomRepo::new()),
            Arc::new(InMemoryPersonRepo::new()),
            Arc::new(SystemClock::new()),
            random,
            config.capacities,
        )
    }
}
