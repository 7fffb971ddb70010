use bevy::ecs::prelude::Component;
use serde::{Deserialize, Serialize};

pub type CharacterUniqueId = u32;

#[derive(Component, Clone, Debug, Deserialize, Serialize)]
pub struct CharacterInfo {
    pub name: String,
    pub unique_id: CharacterUniqueId,
}

impl CharacterInfo {
    pub fn new(name: impl Into<String>, unique_id: CharacterUniqueId) -> Self {
        Self {
            name: name.into(),
            unique_id,
        }
    }
}
