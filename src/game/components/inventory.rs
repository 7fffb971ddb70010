use armor_keeper_data::ItemStack;
use bevy::ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Loose items carried by a character. Every stack occupies its own slot and
/// the inventory never refuses an item.
#[derive(Component, Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Inventory {
    pub items: Vec<ItemStack>,
}

impl Inventory {
    pub fn new(items: Vec<ItemStack>) -> Self {
        Self { items }
    }

    /// Returns the index of the slot the item was placed in.
    pub fn add_item(&mut self, item: ItemStack) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn add_items(&mut self, items: impl IntoIterator<Item = ItemStack>) {
        self.items.extend(items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.items.iter().filter(|item| !item.is_empty())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
