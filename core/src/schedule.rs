use alloc::collections::BinaryHeap;
use core::cmp::{Ordering, Reverse};

/// A pending wake-up for one cell of the board.
///
/// `generation` ties the wake-up to the grid it was scheduled for, so that a
/// timer outliving a reprovision cannot touch the new cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Wake {
    pub cell: usize,
    pub generation: u32,
}

/// Source of delayed callbacks driving the flap animations.
pub trait Scheduler {
    /// Deliver `wake` back to the board after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32, wake: Wake);

    /// Drop every wake-up that has not fired yet.
    fn cancel_all(&mut self);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Entry {
    due_ms: u64,
    seq: u64,
    wake: Wake,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Scheduler running on virtual time that only moves when asked to.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    seq: u64,
    queue: BinaryHeap<Reverse<Entry>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of wake-ups that have not been delivered yet.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Time at which the next wake-up fires.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(entry)| entry.due_ms)
    }

    /// Pops the earliest wake-up due at or before `until_ms`, moving the clock
    /// to its due time. When nothing is due the clock jumps to `until_ms`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Wake> {
        match self.next_due_ms() {
            Some(due_ms) if due_ms <= until_ms => {
                let Reverse(entry) = self.queue.pop()?;
                self.now_ms = self.now_ms.max(entry.due_ms);
                Some(entry.wake)
            }
            _ => {
                self.now_ms = self.now_ms.max(until_ms);
                None
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32, wake: Wake) {
        let entry = Entry {
            due_ms: self.now_ms.saturating_add(u64::from(delay_ms)),
            seq: self.seq,
            wake,
        };
        self.seq += 1;
        self.queue.push(Reverse(entry));
    }

    fn cancel_all(&mut self) {
        self.queue.clear();
    }
}
