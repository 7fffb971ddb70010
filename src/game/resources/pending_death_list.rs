use armor_keeper_data::ItemStack;
use bevy::prelude::{Entity, Resource};

/// A death awaiting its listeners. Listeners may remove items from `drops`
/// or mark the death as cancelled; the host spawns whatever drops remain.
pub struct PendingDeath {
    pub entity: Entity,
    pub drops: Vec<ItemStack>,
    pub cancelled: bool,
}

impl PendingDeath {
    pub fn new(entity: Entity, drops: Vec<ItemStack>) -> Self {
        Self {
            entity,
            drops,
            cancelled: false,
        }
    }
}

#[derive(Resource, Default)]
pub struct PendingDeathList {
    pub deaths: Vec<PendingDeath>,
}

impl PendingDeathList {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PendingDeath> {
        self.deaths.iter_mut()
    }
}
