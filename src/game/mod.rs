mod bundles;
mod game_world;
mod systems;

pub mod armor_keeper;
pub mod components;
pub mod events;
pub mod resources;

pub use armor_keeper::{ArmorKeeperConfig, ArmorKeeperPlugin, GearRetention};
pub use bundles::CharacterBundle;
pub use game_world::GameWorld;
