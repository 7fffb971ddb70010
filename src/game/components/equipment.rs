use armor_keeper_data::{ArmorSlot, ItemStack};
use bevy::ecs::prelude::Component;
use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::game::components::Inventory;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipmentSlot {
    Armor(ArmorSlot),
    Offhand,
}

#[derive(Component, Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Equipment {
    pub armor: EnumMap<ArmorSlot, Option<ItemStack>>,
    pub offhand: Option<ItemStack>,
}

impl Equipment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get_armor(&self, slot: ArmorSlot) -> Option<&ItemStack> {
        self.armor[slot].as_ref()
    }

    pub fn get_offhand(&self) -> Option<&ItemStack> {
        self.offhand.as_ref()
    }

    /// Equips an item into the slot its item type belongs to, returning the
    /// slot and whatever was previously there. Items which cannot be worn are
    /// handed back unchanged.
    pub fn equip_item(
        &mut self,
        item: ItemStack,
    ) -> Result<(EquipmentSlot, Option<ItemStack>), ItemStack> {
        if item.is_empty() {
            return Err(item);
        }

        if let Ok(armor_slot) = ArmorSlot::try_from(item.item.item_type) {
            let previous = self.armor[armor_slot].replace(item);
            Ok((EquipmentSlot::Armor(armor_slot), previous))
        } else if item.item.item_type.is_offhand_item() {
            let previous = self.offhand.replace(item);
            Ok((EquipmentSlot::Offhand, previous))
        } else {
            Err(item)
        }
    }

    /// Equips an item, moving anything it displaces, or the item itself when
    /// it cannot be worn, into the inventory.
    pub fn equip_item_or_stow(&mut self, item: ItemStack, inventory: &mut Inventory) {
        match self.equip_item(item) {
            Ok((_, Some(previous))) => {
                inventory.add_item(previous);
            }
            Ok((_, None)) => {}
            Err(item) => {
                inventory.add_item(item);
            }
        }
    }

    /// Worn items in slot order: feet, legs, chest, head, then offhand.
    pub fn iter_items(&self) -> impl Iterator<Item = &ItemStack> {
        self.armor
            .values()
            .chain(std::iter::once(&self.offhand))
            .filter_map(|item| item.as_ref())
    }

    pub fn clear(&mut self) {
        self.armor = EnumMap::default();
        self.offhand = None;
    }
}
