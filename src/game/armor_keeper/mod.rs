mod armor_keeper_config;
mod armor_keeper_death;
mod armor_keeper_respawn;
mod armor_keeper_shutdown;
mod equipment_view;
mod gear_retention;
mod gear_snapshot;

use bevy::{
    app::{AppExit, Last, Plugin, Startup, Update},
    prelude::{App, IntoSystemConfigs, Res},
};
use log::info;

pub use armor_keeper_config::ArmorKeeperConfig;
pub use equipment_view::{CharacterGear, EquipmentView, EquipmentViewMut, PermissionCheck};
pub use gear_retention::GearRetention;
pub use gear_snapshot::{EquippedGearSnapshot, RestoreOutcome};

use armor_keeper_death::armor_keeper_death_system;
use armor_keeper_respawn::armor_keeper_respawn_system;
use armor_keeper_shutdown::armor_keeper_shutdown_system;

use crate::game::events::{DeathListeners, EventPriority, RespawnListeners};

pub const PERMISSION_KEEP: &str = "armorkeeper.keep";

/// Keeps worn armor and the offhand item of permitted characters across
/// death, handing it back once they respawn.
///
/// Expects the host to provide `PendingDeathList`, `TaskScheduler` and
/// `RespawnEvent`. An `ArmorKeeperConfig` resource inserted before the plugin
/// is added takes precedence over the default configuration.
pub struct ArmorKeeperPlugin;

impl Plugin for ArmorKeeperPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArmorKeeperConfig>()
            .init_resource::<GearRetention>()
            .add_event::<AppExit>()
            .add_systems(Startup, armor_keeper_startup_system)
            .add_systems(
                Update,
                (
                    armor_keeper_death_system.in_set(DeathListeners(EventPriority::Highest)),
                    armor_keeper_respawn_system.in_set(RespawnListeners(EventPriority::Highest)),
                ),
            )
            .add_systems(Last, armor_keeper_shutdown_system);
    }
}

fn armor_keeper_startup_system(config: Res<ArmorKeeperConfig>) {
    if config.enabled {
        info!(
            "Armor keeper enabled for permission {}.",
            config.permission
        );
    } else {
        info!("Armor keeper loaded but disabled.");
    }
}
