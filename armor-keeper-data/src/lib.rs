mod armor_slot;
mod item;

pub use armor_slot::ArmorSlot;
pub use item::{Enchantment, ItemMeta, ItemReference, ItemStack, ItemType};
