use bevy::prelude::{EventReader, Query};

use crate::game::{
    components::{Equipment, Inventory, RespawnLoadout},
    events::RespawnEvent,
};

/// Equips the respawn loadout once every respawn listener has run.
pub fn respawn_loadout_system(
    mut respawn_events: EventReader<RespawnEvent>,
    mut query: Query<(&mut Equipment, &mut Inventory, &RespawnLoadout)>,
) {
    for event in respawn_events.iter() {
        let Ok((mut equipment, mut inventory, respawn_loadout)) = query.get_mut(event.entity)
        else {
            continue;
        };

        for item in respawn_loadout.items.iter().cloned() {
            equipment.equip_item_or_stow(item, &mut inventory);
        }
    }
}
