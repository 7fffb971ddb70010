use bevy::{
    app::AppExit,
    prelude::{EventReader, ResMut},
};
use log::info;

use crate::game::armor_keeper::GearRetention;

pub fn armor_keeper_shutdown_system(
    mut app_exit_events: EventReader<AppExit>,
    mut gear_retention: ResMut<GearRetention>,
) {
    if app_exit_events.iter().last().is_none() {
        return;
    }

    let discarded = gear_retention.shutdown();
    info!(
        "Armor keeper disabled, discarded {} unclaimed gear snapshots.",
        discarded
    );
}
