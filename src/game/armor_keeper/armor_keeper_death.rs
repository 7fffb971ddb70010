use bevy::prelude::{Query, Res, ResMut};
use log::debug;

use crate::game::{
    armor_keeper::{ArmorKeeperConfig, GearRetention},
    components::{CharacterInfo, Equipment, Permissions},
    resources::PendingDeathList,
};

pub fn armor_keeper_death_system(
    config: Res<ArmorKeeperConfig>,
    mut gear_retention: ResMut<GearRetention>,
    mut pending_deaths: ResMut<PendingDeathList>,
    query: Query<(&CharacterInfo, &Permissions, &Equipment)>,
) {
    if !config.enabled {
        return;
    }

    for pending_death in pending_deaths.iter_mut() {
        if pending_death.cancelled {
            continue;
        }

        let Ok((character_info, permissions, equipment)) = query.get(pending_death.entity) else {
            continue;
        };

        let kept = gear_retention.handle_death(
            character_info.unique_id,
            &config.permission,
            permissions,
            equipment,
            &mut pending_death.drops,
        );
        if kept > 0 {
            debug!(
                "Keeping {} equipped items of {} until respawn",
                kept, character_info.name
            );
        }
    }
}
