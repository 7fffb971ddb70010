use bevy::prelude::{Entity, Event};

/// Sent by the host once a character has been revived, before its respawn
/// loadout is applied.
#[derive(Event)]
pub struct RespawnEvent {
    pub entity: Entity,
}
