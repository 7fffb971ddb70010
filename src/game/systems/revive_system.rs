use bevy::prelude::{Commands, EventReader, EventWriter, Query, With};

use crate::game::{
    components::{Dead, HealthPoints},
    events::{RespawnEvent, ReviveEvent},
};

pub fn revive_system(
    mut commands: Commands,
    mut revive_events: EventReader<ReviveEvent>,
    mut respawn_events: EventWriter<RespawnEvent>,
    mut query: Query<&mut HealthPoints, With<Dead>>,
) {
    for event in revive_events.iter() {
        let Ok(mut health_points) = query.get_mut(event.entity) else {
            continue;
        };

        health_points.hp = ((3 * health_points.max_hp) / 10).max(1);
        commands.entity(event.entity).remove::<Dead>();
        respawn_events.send(RespawnEvent {
            entity: event.entity,
        });
    }
}
