mod listener_priority;
mod respawn_event;
mod revive_event;

pub use listener_priority::{DeathListeners, EventPriority, RespawnListeners};
pub use respawn_event::RespawnEvent;
pub use revive_event::ReviveEvent;
