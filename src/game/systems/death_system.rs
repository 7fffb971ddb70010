use armor_keeper_data::ItemStack;
use bevy::prelude::{Commands, Entity, Query, ResMut, Without};

use crate::game::{
    components::{Dead, Equipment, HealthPoints, Inventory},
    resources::{PendingDeath, PendingDeathList},
};

pub fn death_system(
    mut commands: Commands,
    mut pending_deaths: ResMut<PendingDeathList>,
    query: Query<(Entity, &HealthPoints, &Equipment, &Inventory), Without<Dead>>,
) {
    for (entity, health_points, equipment, inventory) in query.iter() {
        if health_points.hp > 0 {
            continue;
        }

        let drops: Vec<ItemStack> = equipment
            .iter_items()
            .chain(inventory.iter())
            .filter(|item| !item.is_empty())
            .cloned()
            .collect();

        commands.entity(entity).insert(Dead);
        pending_deaths.deaths.push(PendingDeath::new(entity, drops));
    }
}
