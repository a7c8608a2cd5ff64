//! Cancellable timers and frame tasks driven by the host's clock.
//!
//! Nothing here sleeps or spawns. The host calls [`Scheduler::poll`] with the
//! current instant (once per rendered frame, or whenever input arrives) and
//! receives whatever became due.

use std::time::Instant;

/// Handle to a scheduled task, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy)]
enum Trigger {
    At(Instant),
    EveryFrame,
}

#[derive(Debug)]
struct ScheduledTask<K> {
    handle: TaskHandle,
    trigger: Trigger,
    kind: K,
}

/// Set of pending one-shot timers and recurring frame tasks
#[derive(Debug)]
pub struct Scheduler<K> {
    tasks: Vec<ScheduledTask<K>>,
    next_id: u64,
}

impl<K: Clone> Scheduler<K> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `kind` to fire once at `deadline`
    pub fn schedule_at(&mut self, deadline: Instant, kind: K) -> TaskHandle {
        self.push(Trigger::At(deadline), kind)
    }

    /// Schedule `kind` to fire on every poll until cancelled
    pub fn schedule_every_frame(&mut self, kind: K) -> TaskHandle {
        self.push(Trigger::EveryFrame, kind)
    }

    /// Cancel a task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        self.tasks.len() != before
    }

    /// Cancel the task behind `slot`, if any, leaving the slot empty
    pub fn cancel_slot(&mut self, slot: &mut Option<TaskHandle>) {
        if let Some(handle) = slot.take() {
            self.cancel(handle);
        }
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// True while `handle` has neither fired nor been cancelled
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.handle == handle)
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn has_frame_tasks(&self) -> bool {
        self.tasks
            .iter()
            .any(|task| matches!(task.trigger, Trigger::EveryFrame))
    }

    /// Earliest pending one-shot deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks
            .iter()
            .filter_map(|task| match task.trigger {
                Trigger::At(deadline) => Some(deadline),
                Trigger::EveryFrame => None,
            })
            .min()
    }

    /// Collect everything due at `now`.
    ///
    /// Due one-shots are removed and returned in deadline order, followed by
    /// every live frame task (which stay scheduled).
    pub fn poll(&mut self, now: Instant) -> Vec<(TaskHandle, K)> {
        let mut due: Vec<(Instant, TaskHandle, K)> = Vec::new();
        self.tasks.retain(|task| match task.trigger {
            Trigger::At(deadline) if deadline <= now => {
                due.push((deadline, task.handle, task.kind.clone()));
                false
            }
            _ => true,
        });
        due.sort_by_key(|(deadline, _, _)| *deadline);

        let mut fired: Vec<(TaskHandle, K)> = due
            .into_iter()
            .map(|(_, handle, kind)| (handle, kind))
            .collect();
        fired.extend(
            self.tasks
                .iter()
                .filter(|task| matches!(task.trigger, Trigger::EveryFrame))
                .map(|task| (task.handle, task.kind.clone())),
        );
        fired
    }

    fn push(&mut self, trigger: Trigger, kind: K) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            handle,
            trigger,
            kind,
        });
        handle
    }
}

impl<K: Clone> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
