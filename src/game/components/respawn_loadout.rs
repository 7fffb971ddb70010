use armor_keeper_data::ItemStack;
use bevy::ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Items the host equips on a character every time it respawns.
#[derive(Component, Clone, Debug, Default, Deserialize, Serialize)]
pub struct RespawnLoadout {
    pub items: Vec<ItemStack>,
}

impl RespawnLoadout {
    pub fn new(items: Vec<ItemStack>) -> Self {
        Self { items }
    }
}
