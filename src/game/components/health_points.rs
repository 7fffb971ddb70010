use bevy::ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Component, Clone, Debug, Deserialize, Serialize)]
pub struct HealthPoints {
    pub hp: i32,
    pub max_hp: i32,
}

impl HealthPoints {
    pub fn new(max_hp: i32) -> Self {
        Self { hp: max_hp, max_hp }
    }
}
