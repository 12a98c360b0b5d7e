//! Helpers for building apps and requests in E2E tests.

use std::sync::Arc;

use amity_domain::{Accommodation, RoomCapacities};

use crate::infrastructure::clock::{FixedClock, FixedRandom, SystemRandom};
use crate::infrastructure::memory::{InMemoryPersonRepo, InMemoryRoomRepo};
use crate::infrastructure::ports::RandomPort;
use crate::test_fixtures::fixed_now;
use crate::use_cases::RegisterPersonInput;
use crate::App;

/// App that always picks the first eligible room.
pub fn deterministic_app() -> App {
    app_with_random(Arc::new(FixedRandom(0)))
}

/// App with a seeded uniform selector.
pub fn seeded_app(seed: u64) -> App {
    app_with_random(Arc::new(SystemRandom::seeded(seed)))
}

fn app_with_random(random: Arc<dyn RandomPort>) -> App {
    App::new(
        Arc::new(InMemoryRoomRepo::new()),
        Arc::new(InMemoryPersonRepo::new()),
        Arc::new(FixedClock(fixed_now())),
        random,
        RoomCapacities::default(),
    )
}

pub fn request(first: &str, last: &str, category: &str, wants: bool) -> RegisterPersonInput {
    RegisterPersonInput {
        first_name: first.to_string(),
        last_name: last.to_string(),
        category: category.to_string(),
        accommodation: Accommodation::from(wants),
    }
}
