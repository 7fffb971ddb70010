use bevy::prelude::{Resource, World};

pub type ScheduledTask = Box<dyn FnOnce(&mut World) + Send + Sync>;

struct PendingTask {
    run_at_tick: u64,
    task: ScheduledTask,
}

/// Runs tasks on a later turn of the main loop.
///
/// Tasks are executed with exclusive world access by `scheduled_task_system`
/// at the start of the tick they are due, so a task scheduled during tick N
/// never observes a partially processed tick N.
#[derive(Resource, Default)]
pub struct TaskScheduler {
    current_tick: u64,
    tasks: Vec<PendingTask>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Run the task at the start of the next tick.
    pub fn run_task(&mut self, task: impl FnOnce(&mut World) + Send + Sync + 'static) {
        self.run_task_later(1, task);
    }

    /// Run the task after `delay_ticks` ticks, a delay of 0 is treated as 1.
    pub fn run_task_later(
        &mut self,
        delay_ticks: u64,
        task: impl FnOnce(&mut World) + Send + Sync + 'static,
    ) {
        self.tasks.push(PendingTask {
            run_at_tick: self.current_tick + delay_ticks.max(1),
            task: Box::new(task),
        });
    }

    /// Starts a new tick and returns the tasks now due, in scheduling order.
    pub fn advance_tick(&mut self) -> Vec<ScheduledTask> {
        self.current_tick += 1;

        let current_tick = self.current_tick;
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|pending_task| pending_task.run_at_tick <= current_tick);
        self.tasks = pending;

        due.into_iter().map(|pending_task| pending_task.task).collect()
    }
}
