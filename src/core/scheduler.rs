//! Periodic task scheduling for the physics and spawn drivers.
//!
//! The match never owns a thread or a timer. It calls `start`/`stop` on a
//! [`Scheduler`] when phases change, and whoever drives the match asks the
//! scheduler which firings are due. [`IntervalScheduler`] is the virtual-clock
//! implementation used by the terminal loop and by tests.

use super::config::GameConfig;

/// The two periodic tasks a match runs while a turn is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Per-frame physics update (~60 Hz).
    Physics,
    /// Pipe pair spawning (every 1500 ms).
    Spawn,
}

/// Start/stop hooks the match calls synchronously.
///
/// Both operations must be idempotent: starting a running task or stopping a
/// stopped one does nothing.
pub trait Scheduler {
    fn start(&mut self, task: Task);
    fn stop(&mut self, task: Task);
    fn is_running(&self, task: Task) -> bool;

    fn stop_all(&mut self) {
        self.stop(Task::Physics);
        self.stop(Task::Spawn);
    }

    fn start_all(&mut self) {
        self.start(Task::Physics);
        self.start(Task::Spawn);
    }
}

#[derive(Debug, Clone)]
struct PeriodicTask {
    period_ms: u64,
    /// `None` while stopped.
    next_due_ms: Option<u64>,
}

impl PeriodicTask {
    fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due_ms: None,
        }
    }
}

/// Virtual-clock scheduler. Time only moves when [`pop_due`](Self::pop_due)
/// or [`settle`](Self::settle) is called.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    now_ms: u64,
    physics: PeriodicTask,
    spawn: PeriodicTask,
}

impl IntervalScheduler {
    pub fn new(tick_interval_ms: u64, spawn_interval_ms: u64) -> Self {
        Self {
            now_ms: 0,
            physics: PeriodicTask::new(tick_interval_ms),
            spawn: PeriodicTask::new(spawn_interval_ms),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.tick_interval_ms, config.spawn_interval_ms)
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn task(&self, task: Task) -> &PeriodicTask {
        match task {
            Task::Physics => &self.physics,
            Task::Spawn => &self.spawn,
        }
    }

    fn task_mut(&mut self, task: Task) -> &mut PeriodicTask {
        match task {
            Task::Physics => &mut self.physics,
            Task::Spawn => &mut self.spawn,
        }
    }

    /// Take the earliest firing due at or before `deadline_ms`, moving the
    /// clock to its due time. Physics wins ties with spawn.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<Task> {
        let candidates = [Task::Physics, Task::Spawn];
        let (task, due) = candidates
            .into_iter()
            .filter_map(|t| self.task(t).next_due_ms.map(|due| (t, due)))
            .filter(|&(_, due)| due <= deadline_ms)
            .min_by_key(|&(_, due)| due)?;

        self.now_ms = self.now_ms.max(due);
        let periodic = self.task_mut(task);
        periodic.next_due_ms = Some(due + periodic.period_ms);
        Some(task)
    }

    /// Move the clock forward to `deadline_ms` once every due firing is taken.
    pub fn settle(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, task: Task) {
        let now = self.now_ms;
        let periodic = self.task_mut(task);
        if periodic.next_due_ms.is_none() {
            periodic.next_due_ms = Some(now + periodic.period_ms);
        }
    }

    fn stop(&mut self, task: Task) {
        self.task_mut(task).next_due_ms = None;
    }

    fn is_running(&self, task: Task) -> bool {
        self.task(task).next_due_ms.is_some()
    }
}
