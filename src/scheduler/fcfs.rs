use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use super::{Process, ProcessKey, Scheduler};
use crate::core::Ticks;

/// Queue position: earliest arrival first, then earliest add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalOrder {
    pub arrival: Ticks,
    pub seq: usize,
}

// KeyedPriorityQueue is a max-heap, so flip the ordering
impl PartialOrd for ArrivalOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArrivalOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .arrival
            .cmp(&self.arrival)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct FcfsScheduler {
    ready: KeyedPriorityQueue<ProcessKey, ArrivalOrder>,
}

impl Scheduler for FcfsScheduler {
    fn init() -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }

    fn enqueue(&mut self, process: &Process) {
        let order = ArrivalOrder {
            arrival: process.arrival_time,
            seq: process.seq,
        };
        let prev = self.ready.push(process.key, order);
        debug_assert!(prev.is_none(), "Process {} enqueued twice", process.id);
    }

    fn dispatch(&mut self) -> Option<ProcessKey> {
        self.ready.pop().map(|(key, _)| key)
    }

    fn name(&self) -> &'static str {
        "FCFS"
    }
}
