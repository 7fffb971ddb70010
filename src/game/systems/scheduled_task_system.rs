use bevy::prelude::World;

use crate::game::resources::TaskScheduler;

pub fn scheduled_task_system(world: &mut World) {
    let tasks = world.resource_mut::<TaskScheduler>().advance_tick();
    for task in tasks {
        task(world);
    }
}
