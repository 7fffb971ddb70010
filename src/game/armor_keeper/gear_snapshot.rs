use armor_keeper_data::{ArmorSlot, ItemStack};
use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::game::armor_keeper::{EquipmentView, EquipmentViewMut};

fn present(item: Option<&ItemStack>) -> Option<&ItemStack> {
    item.filter(|item| !item.is_empty())
}

/// Armor and offhand items captured when a character died.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct EquippedGearSnapshot {
    pub armor: EnumMap<ArmorSlot, Option<ItemStack>>,
    pub offhand: Option<ItemStack>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RestoreOutcome {
    pub equipped: usize,
    pub to_inventory: usize,
}

impl EquippedGearSnapshot {
    /// Copies every non-empty armor and offhand item out of the view.
    pub fn capture(equipment: &impl EquipmentView) -> Self {
        let mut snapshot = Self::default();
        for (slot, item) in snapshot.armor.iter_mut() {
            *item = present(equipment.armor(slot)).cloned();
        }
        snapshot.offhand = present(equipment.offhand()).cloned();
        snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.armor.values().all(|item| item.is_none()) && self.offhand.is_none()
    }

    /// Kept items in slot order: feet, legs, chest, head, then offhand.
    pub fn iter_items(&self) -> impl Iterator<Item = &ItemStack> {
        self.armor
            .values()
            .chain(std::iter::once(&self.offhand))
            .filter_map(|item| item.as_ref())
    }

    /// Removes one matching drop for every kept item, returning how many
    /// drops were removed.
    pub fn deduct_from_drops(&self, drops: &mut Vec<ItemStack>) -> usize {
        let mut removed = 0;
        for item in self.iter_items() {
            if remove_single_matching(drops, item) {
                removed += 1;
            }
        }
        removed
    }

    /// Returns every kept item to the character exactly once. Items go back
    /// into their slot when it is empty, otherwise into the inventory so that
    /// whatever is already worn is never overwritten.
    pub fn restore(self, gear: &mut impl EquipmentViewMut) -> RestoreOutcome {
        let mut outcome = RestoreOutcome::default();

        for (slot, item) in self.armor {
            let Some(item) = item else {
                continue;
            };

            if present(gear.armor(slot)).is_none() {
                gear.set_armor(slot, item);
                outcome.equipped += 1;
            } else {
                gear.add_loose_item(item);
                outcome.to_inventory += 1;
            }
        }

        if let Some(item) = self.offhand {
            if present(gear.offhand()).is_none() {
                gear.set_offhand(item);
                outcome.equipped += 1;
            } else {
                gear.add_loose_item(item);
                outcome.to_inventory += 1;
            }
        }

        outcome
    }
}

/// Removes the first drop similar to `target` with at least as many items.
fn remove_single_matching(drops: &mut Vec<ItemStack>, target: &ItemStack) -> bool {
    if let Some(index) = drops
        .iter()
        .position(|drop| drop.is_similar(target) && drop.quantity >= target.quantity)
    {
        drops.remove(index);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use armor_keeper_data::{ItemMeta, ItemReference, ItemType};

    use super::*;
    use crate::game::{
        armor_keeper::CharacterGear,
        components::{Equipment, Inventory},
    };

    fn item(item_type: ItemType, item_number: u16) -> ItemStack {
        ItemStack::new(ItemReference::new(item_type, item_number), 1)
    }

    fn iron_chestplate() -> ItemStack {
        item(ItemType::Chest, 3)
    }

    fn snapshot_of(items: &[ItemStack]) -> EquippedGearSnapshot {
        let mut equipment = Equipment::new();
        for worn in items.iter().cloned() {
            equipment.equip_item(worn).unwrap();
        }
        EquippedGearSnapshot::capture(&equipment)
    }

    #[test]
    fn capture_skips_empty_and_air_slots() {
        let mut equipment = Equipment::new();
        equipment.armor[ArmorSlot::Head] = Some(item(ItemType::Head, 0));
        let mut zero_boots = item(ItemType::Feet, 1);
        zero_boots.quantity = 0;
        equipment.armor[ArmorSlot::Feet] = Some(zero_boots);

        let snapshot = EquippedGearSnapshot::capture(&equipment);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn capture_is_independent_of_live_equipment() {
        let mut equipment = Equipment::new();
        equipment.equip_item(iron_chestplate()).unwrap();

        let snapshot = EquippedGearSnapshot::capture(&equipment);
        equipment.armor[ArmorSlot::Chest].as_mut().unwrap().meta.durability = 1;
        equipment.armor[ArmorSlot::Chest].as_mut().unwrap().quantity = 0;

        assert_eq!(snapshot.armor[ArmorSlot::Chest], Some(iron_chestplate()));
    }

    #[test]
    fn deduct_removes_exactly_one_similar_stack() {
        let snapshot = snapshot_of(&[iron_chestplate()]);
        let mut drops = vec![iron_chestplate(), item(ItemType::Material, 9), iron_chestplate()];

        assert_eq!(snapshot.deduct_from_drops(&mut drops), 1);
        assert_eq!(drops, vec![item(ItemType::Material, 9), iron_chestplate()]);
    }

    #[test]
    fn deduct_requires_enough_quantity() {
        let mut torches = item(ItemType::Material, 5);
        torches.quantity = 16;
        let mut equipment = Equipment::new();
        equipment.offhand = Some(torches.clone());
        let snapshot = EquippedGearSnapshot::capture(&equipment);

        let mut smaller = torches.clone();
        smaller.quantity = 8;
        let mut drops = vec![smaller.clone()];
        assert_eq!(snapshot.deduct_from_drops(&mut drops), 0);
        assert_eq!(drops, vec![smaller]);

        let mut larger = torches;
        larger.quantity = 32;
        let mut drops = vec![larger];
        assert_eq!(snapshot.deduct_from_drops(&mut drops), 1);
        assert!(drops.is_empty());
    }

    #[test]
    fn deduct_ignores_drops_with_different_metadata() {
        let snapshot = snapshot_of(&[iron_chestplate()]);
        let renamed = iron_chestplate().with_meta(ItemMeta {
            custom_name: Some(String::from("Borrowed")),
            ..Default::default()
        });
        let mut drops = vec![renamed.clone()];

        assert_eq!(snapshot.deduct_from_drops(&mut drops), 0);
        assert_eq!(drops, vec![renamed]);
    }

    #[test]
    fn restore_fills_empty_slots() {
        let snapshot = snapshot_of(&[
            item(ItemType::Feet, 1),
            iron_chestplate(),
            item(ItemType::Shield, 1),
        ]);
        let mut equipment = Equipment::new();
        let mut inventory = Inventory::default();

        let outcome = snapshot.restore(&mut CharacterGear::new(&mut equipment, &mut inventory));

        assert_eq!(
            outcome,
            RestoreOutcome {
                equipped: 3,
                to_inventory: 0
            }
        );
        assert_eq!(equipment.get_armor(ArmorSlot::Feet), Some(&item(ItemType::Feet, 1)));
        assert_eq!(equipment.get_armor(ArmorSlot::Chest), Some(&iron_chestplate()));
        assert_eq!(equipment.get_armor(ArmorSlot::Legs), None);
        assert_eq!(equipment.get_offhand(), Some(&item(ItemType::Shield, 1)));
        assert!(inventory.items.is_empty());
    }

    #[test]
    fn restore_never_overwrites_occupied_slots() {
        let snapshot = snapshot_of(&[iron_chestplate(), item(ItemType::Shield, 1)]);
        let mut equipment = Equipment::new();
        equipment.equip_item(item(ItemType::Chest, 1)).unwrap();
        equipment.equip_item(item(ItemType::Shield, 2)).unwrap();
        let mut inventory = Inventory::default();

        let outcome = snapshot.restore(&mut CharacterGear::new(&mut equipment, &mut inventory));

        assert_eq!(
            outcome,
            RestoreOutcome {
                equipped: 0,
                to_inventory: 2
            }
        );
        assert_eq!(equipment.get_armor(ArmorSlot::Chest), Some(&item(ItemType::Chest, 1)));
        assert_eq!(equipment.get_offhand(), Some(&item(ItemType::Shield, 2)));
        assert_eq!(inventory.items, vec![iron_chestplate(), item(ItemType::Shield, 1)]);
    }

    #[test]
    fn restore_replaces_empty_stack_left_in_slot() {
        let snapshot = snapshot_of(&[iron_chestplate()]);
        let mut equipment = Equipment::new();
        equipment.armor[ArmorSlot::Chest] = Some(item(ItemType::Chest, 0));
        let mut inventory = Inventory::default();

        snapshot.restore(&mut CharacterGear::new(&mut equipment, &mut inventory));

        assert_eq!(equipment.get_armor(ArmorSlot::Chest), Some(&iron_chestplate()));
        assert!(inventory.items.is_empty());
    }
}
