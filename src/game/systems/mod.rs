mod death_drops_system;
mod death_system;
mod respawn_loadout_system;
mod revive_system;
mod scheduled_task_system;

pub use death_drops_system::death_drops_system;
pub use death_system::death_system;
pub use respawn_loadout_system::respawn_loadout_system;
pub use revive_system::revive_system;
pub use scheduled_task_system::scheduled_task_system;
