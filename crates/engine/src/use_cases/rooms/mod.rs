//! Room use cases.

mod create_room;

pub use create_room::{CreateRoom, CreateRoomError};

use std::sync::Arc;

/// Container for room use cases.
pub struct RoomUseCases {
    pub create: Arc<CreateRoom>,
}

impl RoomUseCases {
    pub fn new(create: Arc<CreateRoom>) -> Self {
        Self { create }
    }
}
