use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::ItemType;

/// Body armor positions, declared in the canonical storage order.
///
/// Capture, drop deduction and restoration all walk slots in this order
/// (feet, legs, chest, head), which is also the iteration order of any
/// `EnumMap<ArmorSlot, _>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum ArmorSlot {
    Feet,
    Legs,
    Chest,
    Head,
}

impl From<ArmorSlot> for ItemType {
    fn from(armor_slot: ArmorSlot) -> Self {
        match armor_slot {
            ArmorSlot::Feet => ItemType::Feet,
            ArmorSlot::Legs => ItemType::Legs,
            ArmorSlot::Chest => ItemType::Chest,
            ArmorSlot::Head => ItemType::Head,
        }
    }
}

impl TryFrom<ItemType> for ArmorSlot {
    type Error = ();

    fn try_from(item_type: ItemType) -> Result<ArmorSlot, ()> {
        match item_type {
            ItemType::Feet => Ok(ArmorSlot::Feet),
            ItemType::Legs => Ok(ArmorSlot::Legs),
            ItemType::Chest => Ok(ArmorSlot::Chest),
            ItemType::Head => Ok(ArmorSlot::Head),
            _ => Err(()),
        }
    }
}
