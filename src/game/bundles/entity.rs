use bevy::prelude::Bundle;

use crate::game::components::{
    CharacterInfo, Equipment, HealthPoints, Inventory, Permissions, RespawnLoadout,
};

#[derive(Bundle)]
pub struct CharacterBundle {
    pub equipment: Equipment,
    pub health_points: HealthPoints,
    pub info: CharacterInfo,
    pub inventory: Inventory,
    pub permissions: Permissions,
    pub respawn_loadout: RespawnLoadout,
}

impl CharacterBundle {
    pub fn new(info: CharacterInfo, max_hp: i32) -> Self {
        Self {
            equipment: Equipment::default(),
            health_points: HealthPoints::new(max_hp),
            info,
            inventory: Inventory::default(),
            permissions: Permissions::default(),
            respawn_loadout: RespawnLoadout::default(),
        }
    }
}
