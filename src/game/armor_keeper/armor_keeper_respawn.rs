use bevy::prelude::{Entity, EventReader, Query, Res, ResMut, World};
use log::{debug, warn};

use crate::game::{
    armor_keeper::{ArmorKeeperConfig, CharacterGear, EquippedGearSnapshot, GearRetention},
    components::{CharacterInfo, Dead, Equipment, Inventory},
    events::RespawnEvent,
    resources::TaskScheduler,
};

pub fn armor_keeper_respawn_system(
    config: Res<ArmorKeeperConfig>,
    mut gear_retention: ResMut<GearRetention>,
    mut task_scheduler: ResMut<TaskScheduler>,
    mut respawn_events: EventReader<RespawnEvent>,
    query: Query<&CharacterInfo>,
) {
    for event in respawn_events.iter() {
        let Ok(character_info) = query.get(event.entity) else {
            continue;
        };

        let Some(snapshot) = gear_retention.handle_respawn(character_info.unique_id) else {
            continue;
        };

        // The host applies its respawn loadout after every listener has run,
        // so the gear can only be handed back on a later tick.
        let entity = event.entity;
        task_scheduler.run_task_later(config.restore_delay(), move |world: &mut World| {
            restore_gear(world, entity, snapshot)
        });
    }
}

fn restore_gear(world: &mut World, entity: Entity, snapshot: EquippedGearSnapshot) {
    // Died again before the gear came back, wait for the next revive
    if world.get::<Dead>(entity).is_some() {
        world
            .resource_mut::<TaskScheduler>()
            .run_task(move |world: &mut World| restore_gear(world, entity, snapshot));
        return;
    }

    let mut query = world.query::<(&CharacterInfo, &mut Equipment, &mut Inventory)>();
    let Ok((character_info, mut equipment, mut inventory)) = query.get_mut(world, entity) else {
        warn!(
            "Discarding {} kept items for entity {:?} which no longer exists",
            snapshot.iter_items().count(),
            entity
        );
        return;
    };

    let outcome = snapshot.restore(&mut CharacterGear::new(&mut equipment, &mut inventory));
    debug!(
        "Returned kept gear to {}: {} equipped, {} moved to inventory",
        character_info.name, outcome.equipped, outcome.to_inventory
    );
}
