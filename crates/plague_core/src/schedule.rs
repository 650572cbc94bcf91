//! Deferred and recurring tasks
//!
//! The host drives time. `Scheduler` only remembers what should run and
//! when; callers pull work out with [`Scheduler::take_frame_tasks`] once per
//! simulation step and [`Scheduler::due`] from their timer pump.

use crate::handle::{Handle, HandleMap};

/// Marker for timer handles
pub struct Timer;

/// Handle to a recurring timer
pub type TimerHandle = Handle<Timer>;

/// What a recurring task wants after it ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Keep firing
    Continue,
    /// Cancel the timer
    Stop,
}

struct RecurringTask<T> {
    interval: f32,
    next_fire: f32,
    task: T,
}

/// Next-frame deferrals plus cancellable recurring timers
pub struct Scheduler<T> {
    frame_tasks: Vec<T>,
    timers: HandleMap<Timer, RecurringTask<T>>,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            frame_tasks: Vec::new(),
            timers: HandleMap::new(),
        }
    }

    /// Run `task` on the next simulation step
    pub fn defer(&mut self, task: T) {
        self.frame_tasks.push(task);
    }

    /// Drain everything deferred so far. Tasks deferred while these run
    /// wait for the following step.
    pub fn take_frame_tasks(&mut self) -> Vec<T> {
        std::mem::take(&mut self.frame_tasks)
    }

    pub fn pending_frame_tasks(&self) -> usize {
        self.frame_tasks.len()
    }

    /// Fire `task` every `interval` seconds, first at `now + interval`
    pub fn every(&mut self, interval: f32, now: f32, task: T) -> TimerHandle {
        self.timers.insert(RecurringTask {
            interval,
            next_fire: now + interval,
            task,
        })
    }

    /// Cancel a timer. Stale handles are ignored.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(handle).is_some()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.contains(handle)
    }

    /// Collect timers due at `now` and schedule their next firing.
    ///
    /// A timer that fell several intervals behind fires once and resumes
    /// one interval after `now`.
    pub fn due(&mut self, now: f32) -> Vec<(TimerHandle, T)> {
        let mut due = Vec::new();
        for (handle, timer) in self.timers.iter_mut() {
            if timer.next_fire > now {
                continue;
            }
            timer.next_fire += timer.interval;
            if timer.next_fire <= now {
                timer.next_fire = now + timer.interval;
            }
            due.push((handle, timer.task.clone()));
        }
        due
    }

    /// Cancel every timer and pending deferral
    pub fn clear(&mut self) {
        self.frame_tasks.clear();
        self.timers.clear();
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
