use armor_keeper_data::ItemStack;
use bevy::prelude::Resource;
use std::collections::HashMap;

use crate::game::{
    armor_keeper::{EquipmentView, EquippedGearSnapshot, PermissionCheck},
    components::CharacterUniqueId,
};

/// Gear kept between a character's death and its next respawn.
#[derive(Resource, Default)]
pub struct GearRetention {
    saved: HashMap<CharacterUniqueId, EquippedGearSnapshot>,
}

impl GearRetention {
    pub fn new() -> Self {
        Default::default()
    }

    /// Captures the worn gear of a character holding `permission` and prunes
    /// it from the death drops. Returns the number of items kept, nothing is
    /// modified when the character is not eligible or wears nothing worth
    /// keeping.
    pub fn handle_death(
        &mut self,
        unique_id: CharacterUniqueId,
        permission: &str,
        permissions: &impl PermissionCheck,
        equipment: &impl EquipmentView,
        drops: &mut Vec<ItemStack>,
    ) -> usize {
        if !permissions.has_permission(permission) {
            return 0;
        }

        let snapshot = EquippedGearSnapshot::capture(equipment);
        if snapshot.is_empty() {
            return 0;
        }

        snapshot.deduct_from_drops(drops);

        let kept = snapshot.iter_items().count();
        self.saved.insert(unique_id, snapshot);
        kept
    }

    /// Takes the kept gear for a respawning character, at most once per death.
    pub fn handle_respawn(
        &mut self,
        unique_id: CharacterUniqueId,
    ) -> Option<EquippedGearSnapshot> {
        self.saved
            .remove(&unique_id)
            .filter(|snapshot| !snapshot.is_empty())
    }

    pub fn get(&self, unique_id: CharacterUniqueId) -> Option<&EquippedGearSnapshot> {
        self.saved.get(&unique_id)
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    /// Discards all kept gear, returning how many snapshots were dropped.
    pub fn shutdown(&mut self) -> usize {
        let discarded = self.saved.len();
        self.saved.clear();
        discarded
    }
}

#[cfg(test)]
mod tests {
    use armor_keeper_data::{ArmorSlot, ItemReference, ItemType};

    use super::*;
    use crate::game::armor_keeper::PERMISSION_KEEP;
    use crate::game::{
        armor_keeper::CharacterGear,
        components::{Equipment, Inventory, Permissions},
    };

    const UNIQUE_ID: CharacterUniqueId = 7;

    fn item(item_type: ItemType, item_number: u16) -> ItemStack {
        ItemStack::new(ItemReference::new(item_type, item_number), 1)
    }

    fn keeper() -> Permissions {
        Permissions::new([PERMISSION_KEEP])
    }

    fn full_equipment() -> Equipment {
        let mut equipment = Equipment::new();
        for worn in [
            item(ItemType::Feet, 1),
            item(ItemType::Legs, 1),
            item(ItemType::Chest, 3),
            item(ItemType::Head, 2),
            item(ItemType::Shield, 1),
        ] {
            equipment.equip_item(worn).unwrap();
        }
        equipment
    }

    fn sorted(mut items: Vec<ItemStack>) -> Vec<ItemStack> {
        items.sort_by_key(|item| (format!("{:?}", item.item.item_type), item.item.item_number));
        items
    }

    #[test]
    fn ineligible_character_changes_nothing() {
        let mut gear_retention = GearRetention::default();
        let equipment = full_equipment();
        let mut drops: Vec<ItemStack> = equipment.iter_items().cloned().collect();
        let original_drops = drops.clone();

        let kept = gear_retention.handle_death(
            UNIQUE_ID,
            PERMISSION_KEEP,
            &Permissions::new(["some.other.node"]),
            &equipment,
            &mut drops,
        );

        assert_eq!(kept, 0);
        assert_eq!(drops, original_drops);
        assert!(gear_retention.is_empty());
    }

    #[test]
    fn empty_gear_is_not_stored() {
        let mut gear_retention = GearRetention::default();
        let mut drops = vec![item(ItemType::Material, 4)];

        let kept = gear_retention.handle_death(
            UNIQUE_ID,
            PERMISSION_KEEP,
            &keeper(),
            &Equipment::new(),
            &mut drops,
        );

        assert_eq!(kept, 0);
        assert_eq!(drops, vec![item(ItemType::Material, 4)]);
        assert!(gear_retention.get(UNIQUE_ID).is_none());
    }

    #[test]
    fn death_removes_one_drop_per_kept_item() {
        let mut gear_retention = GearRetention::default();
        let mut equipment = Equipment::new();
        equipment.equip_item(item(ItemType::Chest, 3)).unwrap();
        let mut drops = vec![
            item(ItemType::Chest, 3),
            item(ItemType::Chest, 3),
            item(ItemType::Material, 4),
        ];

        let kept = gear_retention.handle_death(
            UNIQUE_ID,
            PERMISSION_KEEP,
            &keeper(),
            &equipment,
            &mut drops,
        );

        assert_eq!(kept, 1);
        assert_eq!(drops, vec![item(ItemType::Chest, 3), item(ItemType::Material, 4)]);
    }

    #[test]
    fn missing_drop_is_not_an_error() {
        let mut gear_retention = GearRetention::default();
        let mut drops = Vec::new();

        let kept = gear_retention.handle_death(
            UNIQUE_ID,
            PERMISSION_KEEP,
            &keeper(),
            &full_equipment(),
            &mut drops,
        );

        assert_eq!(kept, 5);
        assert!(gear_retention.get(UNIQUE_ID).is_some());
    }

    #[test]
    fn custom_permission_node_is_checked() {
        let mut gear_retention = GearRetention::new();
        let mut drops = Vec::new();

        assert_eq!(
            gear_retention.handle_death(
                UNIQUE_ID,
                "vip.keepgear",
                &keeper(),
                &full_equipment(),
                &mut drops
            ),
            0
        );
        assert_eq!(
            gear_retention.handle_death(
                UNIQUE_ID,
                "vip.keepgear",
                &Permissions::new(["vip.keepgear"]),
                &full_equipment(),
                &mut drops
            ),
            5
        );
    }

    #[test]
    fn second_death_overwrites_snapshot() {
        let mut gear_retention = GearRetention::default();
        let mut drops = Vec::new();
        gear_retention.handle_death(
            UNIQUE_ID,
            PERMISSION_KEEP,
            &keeper(),
            &full_equipment(),
            &mut drops,
        );

        let mut equipment = Equipment::new();
        equipment.equip_item(item(ItemType::Head, 9)).unwrap();
        gear_retention.handle_death(UNIQUE_ID, PERMISSION_KEEP, &keeper(), &equipment, &mut drops);

        let snapshot = gear_retention.get(UNIQUE_ID).unwrap();
        assert_eq!(snapshot.iter_items().count(), 1);
        assert_eq!(snapshot.armor[ArmorSlot::Head], Some(item(ItemType::Head, 9)));
        assert_eq!(gear_retention.len(), 1);
    }

    #[test]
    fn round_trip_returns_every_item_once() {
        let mut gear_retention = GearRetention::default();
        let equipment = full_equipment();
        let captured: Vec<ItemStack> = equipment.iter_items().cloned().collect();
        let mut drops = captured.clone();

        gear_retention.handle_death(UNIQUE_ID, PERMISSION_KEEP, &keeper(), &equipment, &mut drops);
        assert!(drops.is_empty());

        // Another collaborator already equipped a helmet before restoration.
        let mut respawned = Equipment::new();
        respawned.equip_item(item(ItemType::Head, 5)).unwrap();
        let mut inventory = Inventory::default();

        let snapshot = gear_retention.handle_respawn(UNIQUE_ID).unwrap();
        let outcome = snapshot.restore(&mut CharacterGear::new(&mut respawned, &mut inventory));
        assert_eq!(outcome.equipped, 4);
        assert_eq!(outcome.to_inventory, 1);

        let mut restored: Vec<ItemStack> = respawned
            .iter_items()
            .filter(|worn| **worn != item(ItemType::Head, 5))
            .cloned()
            .collect();
        restored.extend(inventory.items);
        assert_eq!(sorted(restored), sorted(captured));
    }

    #[test]
    fn respawn_consumes_snapshot_once() {
        let mut gear_retention = GearRetention::default();
        let mut drops = Vec::new();
        gear_retention.handle_death(
            UNIQUE_ID,
            PERMISSION_KEEP,
            &keeper(),
            &full_equipment(),
            &mut drops,
        );

        assert!(gear_retention.handle_respawn(UNIQUE_ID).is_some());
        assert!(gear_retention.handle_respawn(UNIQUE_ID).is_none());
    }

    #[test]
    fn respawn_without_death_is_a_no_op() {
        let mut gear_retention = GearRetention::default();
        assert!(gear_retention.handle_respawn(UNIQUE_ID).is_none());
    }

    #[test]
    fn shutdown_discards_everything() {
        let mut gear_retention = GearRetention::default();
        let mut drops = Vec::new();
        gear_retention.handle_death(1, PERMISSION_KEEP, &keeper(), &full_equipment(), &mut drops);
        gear_retention.handle_death(2, PERMISSION_KEEP, &keeper(), &full_equipment(), &mut drops);

        assert_eq!(gear_retention.shutdown(), 2);
        assert!(gear_retention.handle_respawn(1).is_none());
        assert!(gear_retention.handle_respawn(2).is_none());
    }
}
