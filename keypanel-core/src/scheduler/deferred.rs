//! Deferred task table
//!
//! Deadlines are absolute millisecond timestamps compared with wrapping
//! arithmetic, so the queue keeps working across the `u32` rollover as long
//! as no delay exceeds `i32::MAX` milliseconds.

use heapless::Vec;

use crate::state::Timestamp;
use crate::traits::{DeferredTask, DeferredTimer, Reschedule, TaskToken};

/// Capacity used by the firmware (idle check + bar redraw)
pub const MAX_DEFERRED_TASKS: usize = 4;

#[derive(Debug, Clone, Copy)]
struct Slot {
    token: TaskToken,
    task: DeferredTask,
    /// Set by `reschedule_soon`; the slot is due regardless of `due`
    soon: bool,
    /// Registered but deadline not yet anchored to a clock reading
    delay_ms: Option<u32>,
    due: Timestamp,
}

/// Fixed-capacity deferred task queue
#[derive(Debug)]
pub struct DeferredQueue<const N: usize> {
    slots: Vec<Slot, N>,
    next_token: u8,
}

impl<const N: usize> Default for DeferredQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DeferredQueue<N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_token: 0,
        }
    }

    /// Number of registered tasks
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no task is registered
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Anchor freshly registered tasks to the clock
    ///
    /// `register_periodic` has no clock reading, so a new task's deadline
    /// counts from the first `poll` or `next_deadline` call after it.
    fn anchor(&mut self, now: Timestamp) {
        for slot in self.slots.iter_mut() {
            if let Some(delay) = slot.delay_ms.take() {
                slot.due = now.wrapping_add(delay);
            }
        }
    }

    /// Earliest due task, if any
    ///
    /// Tasks flagged by [`DeferredTimer::reschedule_soon`] come first, then
    /// the most overdue one. The task stays registered; the caller must
    /// report the callback result through [`DeferredQueue::complete`].
    pub fn poll(&mut self, now: Timestamp) -> Option<(TaskToken, DeferredTask)> {
        self.anchor(now);

        if let Some(slot) = self.slots.iter().find(|s| s.soon) {
            return Some((slot.token, slot.task));
        }

        self.slots
            .iter()
            .filter(|s| is_due(s.due, now))
            .max_by_key(|s| now.wrapping_sub(s.due))
            .map(|s| (s.token, s.task))
    }

    /// Re-arm or free a task after its callback ran at `now`
    pub fn complete(&mut self, token: TaskToken, reschedule: Reschedule, now: Timestamp) {
        let Some(index) = self.slots.iter().position(|s| s.token == token) else {
            return;
        };

        match reschedule {
            Reschedule::After(delay_ms) => {
                let slot = &mut self.slots[index];
                slot.soon = false;
                slot.delay_ms = None;
                slot.due = now.wrapping_add(delay_ms);
            }
            Reschedule::Cancel => {
                trace!("deferred task {} cancelled", token.0);
                self.slots.remove(index);
            }
        }
    }

    /// Milliseconds until the next task is due
    ///
    /// `Some(0)` when a task is already due, `None` when the queue is empty.
    pub fn next_deadline(&mut self, now: Timestamp) -> Option<u32> {
        self.anchor(now);

        self.slots
            .iter()
            .map(|s| {
                if s.soon || is_due(s.due, now) {
                    0
                } else {
                    s.due.wrapping_sub(now)
                }
            })
            .min()
    }
}

impl<const N: usize> DeferredTimer for DeferredQueue<N> {
    fn register_periodic(&mut self, task: DeferredTask, delay_ms: u32) -> Option<TaskToken> {
        let token = TaskToken(self.next_token);
        self.slots
            .push(Slot {
                token,
                task,
                soon: false,
                delay_ms: Some(delay_ms),
                due: 0,
            })
            .ok()?;
        self.next_token = self.next_token.wrapping_add(1);
        Some(token)
    }

    fn reschedule_soon(&mut self, token: TaskToken) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.token == token) {
            slot.soon = true;
        }
    }
}

/// Check whether `due` has been reached at `now`
fn is_due(due: Timestamp, now: Timestamp) -> bool {
    (now.wrapping_sub(due) as i32) >= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_poll() {
        let mut queue: DeferredQueue<4> = DeferredQueue::new();
        let token = queue
            .register_periodic(DeferredTask::IdleCheck, 1000)
            .unwrap();

        assert_eq!(queue.poll(0), None);
        assert_eq!(queue.next_deadline(0), Some(1000));
        assert_eq!(queue.poll(999), None);
        assert_eq!(queue.poll(1000), Some((token, DeferredTask::IdleCheck)));
    }

    #[test]
    fn test_complete_rearms() {
        let mut queue: DeferredQueue<4> = DeferredQueue::new();
        let token = queue
            .register_periodic(DeferredTask::BarRedraw, 250)
            .unwrap();
        queue.poll(0);

        assert!(queue.poll(300).is_some());
        queue.complete(token, Reschedule::After(250), 300);
        assert_eq!(queue.poll(300), None);
        assert_eq!(queue.next_deadline(300), Some(250));
        assert!(queue.poll(550).is_some());
    }

    #[test]
    fn test_cancel_frees_slot() {
        let mut queue: DeferredQueue<1> = DeferredQueue::new();
        let token = queue
            .register_periodic(DeferredTask::IdleCheck, 10)
            .unwrap();
        assert!(queue
            .register_periodic(DeferredTask::BarRedraw, 10)
            .is_none());

        queue.complete(token, Reschedule::Cancel, 10);
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(10), None);
        assert!(queue
            .register_periodic(DeferredTask::BarRedraw, 10)
            .is_some());
    }

    #[test]
    fn test_reschedule_soon_preempts() {
        let mut queue: DeferredQueue<4> = DeferredQueue::new();
        let idle = queue
            .register_periodic(DeferredTask::IdleCheck, 1000)
            .unwrap();
        let bar = queue
            .register_periodic(DeferredTask::BarRedraw, 250)
            .unwrap();
        queue.poll(0);

        queue.reschedule_soon(bar);
        assert_eq!(queue.next_deadline(10), Some(0));
        assert_eq!(queue.poll(10), Some((bar, DeferredTask::BarRedraw)));
        queue.complete(bar, Reschedule::After(250), 10);

        // Flag cleared, normal deadlines again
        assert_eq!(queue.poll(10), None);

        // Bar due at 260 is the more overdue one at 1000
        assert_eq!(queue.poll(1000), Some((bar, DeferredTask::BarRedraw)));
        queue.complete(bar, Reschedule::After(250), 1000);
        assert_eq!(queue.poll(1000), Some((idle, DeferredTask::IdleCheck)));
        queue.complete(idle, Reschedule::After(1000), 1000);
        assert_eq!(queue.poll(1000), None);
    }

    #[test]
    fn test_most_overdue_first() {
        let mut queue: DeferredQueue<4> = DeferredQueue::new();
        let idle = queue
            .register_periodic(DeferredTask::IdleCheck, 100)
            .unwrap();
        let _bar = queue
            .register_periodic(DeferredTask::BarRedraw, 200)
            .unwrap();
        queue.poll(0);

        assert_eq!(queue.poll(500), Some((idle, DeferredTask::IdleCheck)));
    }

    #[test]
    fn test_deadline_across_wraparound() {
        let mut queue: DeferredQueue<4> = DeferredQueue::new();
        let token = queue
            .register_periodic(DeferredTask::IdleCheck, 1000)
            .unwrap();
        let start = u32::MAX - 200;
        queue.poll(start);

        assert_eq!(queue.next_deadline(start), Some(1000));
        assert_eq!(queue.poll(500), None);
        assert_eq!(queue.poll(799), Some((token, DeferredTask::IdleCheck)));
    }

    #[test]
    fn test_unknown_token_ignored() {
        let mut queue: DeferredQueue<4> = DeferredQueue::new();
        queue.register_periodic(DeferredTask::IdleCheck, 10);
        queue.complete(TaskToken(9), Reschedule::Cancel, 0);
        queue.reschedule_soon(TaskToken(9));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_deadline(0), Some(10));
    }
}
