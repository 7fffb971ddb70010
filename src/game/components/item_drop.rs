use armor_keeper_data::ItemStack;
use bevy::ecs::prelude::{Component, Entity};

#[derive(Component, Clone, Debug)]
pub struct ItemDrop {
    pub item: ItemStack,
    pub dropped_by: Entity,
}

impl ItemDrop {
    pub fn new(item: ItemStack, dropped_by: Entity) -> Self {
        Self { item, dropped_by }
    }
}
