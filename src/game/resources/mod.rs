mod pending_death_list;
mod task_scheduler;

pub use pending_death_list::{PendingDeath, PendingDeathList};
pub use task_scheduler::{ScheduledTask, TaskScheduler};
