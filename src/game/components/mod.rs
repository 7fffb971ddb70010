mod character_info;
mod dead;
mod equipment;
mod health_points;
mod inventory;
mod item_drop;
mod permissions;
mod respawn_loadout;

pub use armor_keeper_data::{ArmorSlot, ItemMeta, ItemReference, ItemStack, ItemType};

pub use character_info::{CharacterInfo, CharacterUniqueId};
pub use dead::Dead;
pub use equipment::{Equipment, EquipmentSlot};
pub use health_points::HealthPoints;
pub use inventory::Inventory;
pub use item_drop::ItemDrop;
pub use permissions::Permissions;
pub use respawn_loadout::RespawnLoadout;
