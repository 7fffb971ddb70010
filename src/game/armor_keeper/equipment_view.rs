use armor_keeper_data::{ArmorSlot, ItemStack};

use crate::game::components::{Equipment, Inventory, Permissions};

/// Read access to the slots kept across death.
pub trait EquipmentView {
    fn armor(&self, slot: ArmorSlot) -> Option<&ItemStack>;
    fn offhand(&self) -> Option<&ItemStack>;
}

/// Write access used when handing kept gear back to a character.
pub trait EquipmentViewMut: EquipmentView {
    fn set_armor(&mut self, slot: ArmorSlot, item: ItemStack);
    fn set_offhand(&mut self, item: ItemStack);
    fn add_loose_item(&mut self, item: ItemStack);
}

pub trait PermissionCheck {
    fn has_permission(&self, node: &str) -> bool;
}

impl EquipmentView for Equipment {
    fn armor(&self, slot: ArmorSlot) -> Option<&ItemStack> {
        self.get_armor(slot)
    }

    fn offhand(&self) -> Option<&ItemStack> {
        self.get_offhand()
    }
}

impl PermissionCheck for Permissions {
    fn has_permission(&self, node: &str) -> bool {
        Permissions::has_permission(self, node)
    }
}

/// A character's worn equipment together with the inventory that receives
/// items which cannot go back into their slot.
pub struct CharacterGear<'a> {
    pub equipment: &'a mut Equipment,
    pub inventory: &'a mut Inventory,
}

impl<'a> CharacterGear<'a> {
    pub fn new(equipment: &'a mut Equipment, inventory: &'a mut Inventory) -> Self {
        Self {
            equipment,
            inventory,
        }
    }
}

impl EquipmentView for CharacterGear<'_> {
    fn armor(&self, slot: ArmorSlot) -> Option<&ItemStack> {
        self.equipment.get_armor(slot)
    }

    fn offhand(&self) -> Option<&ItemStack> {
        self.equipment.get_offhand()
    }
}

impl EquipmentViewMut for CharacterGear<'_> {
    fn set_armor(&mut self, slot: ArmorSlot, item: ItemStack) {
        self.equipment.armor[slot] = Some(item);
    }

    fn set_offhand(&mut self, item: ItemStack) {
        self.equipment.offhand = Some(item);
    }

    fn add_loose_item(&mut self, item: ItemStack) {
        self.inventory.add_item(item);
    }
}
