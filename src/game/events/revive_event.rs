use bevy::prelude::{Entity, Event};

/// Request for the host to bring a dead character back to life.
#[derive(Event)]
pub struct ReviveEvent {
    pub entity: Entity,
}
