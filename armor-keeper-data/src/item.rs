use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Feet,
    Legs,
    Chest,
    Head,
    Shield,
    Weapon,
    Tool,
    Consumable,
    Material,
}

impl ItemType {
    pub fn is_offhand_item(self) -> bool {
        matches!(self, ItemType::Shield)
    }
}

/// Identifies an item definition. Item number 0 is the empty ("air") item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemReference {
    pub item_type: ItemType,
    pub item_number: u16,
}

impl ItemReference {
    pub fn new(item_type: ItemType, item_number: u16) -> Self {
        Self {
            item_type,
            item_number,
        }
    }

    pub fn is_air(&self) -> bool {
        self.item_number == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enchantment {
    pub id: u16,
    pub level: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMeta {
    pub durability: u16,
    pub enchantments: Vec<Enchantment>,
    pub custom_name: Option<String>,
}

/// A stack of items. Cloning produces an independent deep copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemReference,
    pub quantity: u32,
    #[serde(default)]
    pub meta: ItemMeta,
}

impl ItemStack {
    pub fn new(item: ItemReference, quantity: u32) -> Self {
        Self {
            item,
            quantity,
            meta: ItemMeta::default(),
        }
    }

    pub fn with_meta(mut self, meta: ItemMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_air() || self.quantity == 0
    }

    /// Same item and metadata, regardless of quantity.
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.item == other.item && self.meta == other.meta
    }
}
