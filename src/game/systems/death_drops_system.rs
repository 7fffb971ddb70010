use bevy::prelude::{Commands, Query, ResMut};

use crate::game::{
    components::{Equipment, Inventory, ItemDrop},
    resources::PendingDeathList,
};

/// Finalises deaths once every death listener has run. The character loses
/// everything it carried and whatever remains in the drop list is spawned on
/// the ground. Cancelled deaths keep their items.
pub fn death_drops_system(
    mut commands: Commands,
    mut pending_deaths: ResMut<PendingDeathList>,
    mut query: Query<(&mut Equipment, &mut Inventory)>,
) {
    for pending_death in pending_deaths.deaths.drain(..) {
        if pending_death.cancelled {
            continue;
        }

        if let Ok((mut equipment, mut inventory)) = query.get_mut(pending_death.entity) {
            equipment.clear();
            inventory.clear();
        }

        for item in pending_death.drops {
            commands.spawn(ItemDrop::new(item, pending_death.entity));
        }
    }
}
