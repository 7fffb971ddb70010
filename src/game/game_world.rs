use armor_keeper_data::ItemStack;
use bevy::{
    app::{AppExit, First, PreUpdate, Update},
    prelude::{App, Entity, IntoSystemConfigs, IntoSystemSetConfigs, World},
};
use log::debug;

use crate::game::{
    armor_keeper::{ArmorKeeperConfig, ArmorKeeperPlugin},
    bundles::CharacterBundle,
    components::{Dead, HealthPoints, ItemDrop},
    events::{DeathListeners, EventPriority, RespawnEvent, RespawnListeners, ReviveEvent},
    resources::{PendingDeathList, TaskScheduler},
    systems::{
        death_drops_system, death_system, respawn_loadout_system, revive_system,
        scheduled_task_system,
    },
};

/// A headless host running the armor keeper on a single-threaded main loop.
/// Every call to `update` is one tick.
pub struct GameWorld {
    app: App,
}

impl GameWorld {
    pub fn new(config: ArmorKeeperConfig) -> Self {
        let mut app = App::new();

        app.insert_resource(config);
        app.insert_resource(PendingDeathList::new());
        app.insert_resource(TaskScheduler::new());

        app.add_event::<ReviveEvent>().add_event::<RespawnEvent>();

        /*
        Tick order:
        - First: tasks scheduled on earlier ticks
        - PreUpdate: deaths are detected, revive requests processed
        - Update: listeners by priority, then death drops and respawn loadout
        - Last: shutdown
        */
        app.configure_sets(
            Update,
            (
                DeathListeners(EventPriority::Lowest),
                DeathListeners(EventPriority::Low),
                DeathListeners(EventPriority::Normal),
                DeathListeners(EventPriority::High),
                DeathListeners(EventPriority::Highest),
                DeathListeners(EventPriority::Monitor),
            )
                .chain(),
        );
        app.configure_sets(
            Update,
            (
                RespawnListeners(EventPriority::Lowest),
                RespawnListeners(EventPriority::Low),
                RespawnListeners(EventPriority::Normal),
                RespawnListeners(EventPriority::High),
                RespawnListeners(EventPriority::Highest),
                RespawnListeners(EventPriority::Monitor),
            )
                .chain(),
        );

        app.add_systems(First, scheduled_task_system);
        app.add_systems(PreUpdate, (death_system, revive_system));
        app.add_systems(
            Update,
            (
                death_drops_system.after(DeathListeners(EventPriority::Monitor)),
                respawn_loadout_system.after(RespawnListeners(EventPriority::Monitor)),
            ),
        );

        app.add_plugins(ArmorKeeperPlugin);

        Self { app }
    }

    pub fn world(&self) -> &World {
        &self.app.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.app.world
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn spawn_character(&mut self, character: CharacterBundle) -> Entity {
        debug!("Spawning character {}", character.info.name);
        self.app.world.spawn(character).id()
    }

    /// The character dies on the next tick.
    pub fn kill(&mut self, entity: Entity) {
        if let Some(mut health_points) = self.app.world.get_mut::<HealthPoints>(entity) {
            health_points.hp = 0;
        }
    }

    /// The character is revived on the next tick.
    pub fn revive(&mut self, entity: Entity) {
        self.app.world.send_event(ReviveEvent { entity });
    }

    pub fn is_dead(&self, entity: Entity) -> bool {
        self.app.world.get::<Dead>(entity).is_some()
    }

    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn run_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.app.update();
        }
    }

    /// Runs one final tick in which the game shuts down.
    pub fn shutdown(&mut self) {
        self.app.world.send_event(AppExit);
        self.app.update();
    }

    pub fn ground_items(&mut self) -> Vec<ItemStack> {
        let mut query = self.app.world.query::<&ItemDrop>();
        query
            .iter(&self.app.world)
            .map(|item_drop| item_drop.item.clone())
            .collect()
    }
}
