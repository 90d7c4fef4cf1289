use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};

use crate::error::SchedError;

pub type Ticks = u64;
new_key_type! {
    pub struct ProcessKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Pending,
    Scheduled,
}

#[derive(Debug, Clone)]
pub struct Process {
    pub key: ProcessKey,
    pub id: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub state: ProcessState,
    // Position in the add sequence; breaks arrival ties
    pub seq: usize,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
    pub turnaround_time: Option<Ticks>,
    pub waiting_time: Option<Ticks>,
}

impl Process {
    pub fn is_scheduled(&self) -> bool {
        self.state == ProcessState::Scheduled
    }
}

#[derive(Debug, Default)]
pub struct ProcessTable {
    procs: SlotMap<ProcessKey, Process>,
    by_id: FxHashMap<String, ProcessKey>,
    insertion_order: Vec<ProcessKey>,
    // Latest arrival plus every burst; the clock never passes this
    horizon: Ticks,
    max_arrival: Ticks,
    total_burst: Ticks,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects duplicate ids, zero bursts, and any process that could drive the
    /// clock past `Ticks::MAX` once the whole table is scheduled.
    pub(crate) fn insert(
        &mut self,
        id: String,
        arrival_time: Ticks,
        burst_time: Ticks,
    ) -> Result<ProcessKey, SchedError> {
        if self.by_id.contains_key(&id) {
            return Err(SchedError::DuplicateId(id));
        }
        if burst_time == 0 {
            return Err(SchedError::InvalidBurst { id, burst: 0 });
        }

        let max_arrival = self.max_arrival.max(arrival_time);
        let Some((total_burst, horizon)) = self
            .total_burst
            .checked_add(burst_time)
            .and_then(|total| Some((total, max_arrival.checked_add(total)?)))
        else {
            return Err(SchedError::ClockOverflow { id });
        };
        self.max_arrival = max_arrival;
        self.total_burst = total_burst;
        self.horizon = horizon;

        let seq = self.insertion_order.len();
        let key = self.procs.insert_with_key(|key| Process {
            key,
            id: id.clone(),
            arrival_time,
            burst_time,
            state: ProcessState::Pending,
            seq,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        });

        self.by_id.insert(id, key);
        self.insertion_order.push(key);
        Ok(key)
    }

    /// Upper bound on the clock for a run over this table.
    pub fn horizon(&self) -> Ticks {
        self.horizon
    }

    pub fn len(&self) -> usize {
        self.insertion_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }

    pub fn process(&self, key: ProcessKey) -> &Process {
        &self.procs[key]
    }

    pub fn by_id(&self, id: &str) -> Option<&Process> {
        self.by_id.get(id).map(|&key| &self.procs[key])
    }

    /// Processes in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.insertion_order.iter().map(|&key| &self.procs[key])
    }

    // Callers keep start_time within the horizon, so the sums below cannot overflow
    pub(crate) fn mark_scheduled(&mut self, key: ProcessKey, start_time: Ticks) -> Ticks {
        let proc = &mut self.procs[key];
        debug_assert_eq!(
            proc.state,
            ProcessState::Pending,
            "Process {} scheduled twice",
            proc.id
        );
        debug_assert!(
            start_time >= proc.arrival_time,
            "Process {} started before it arrived",
            proc.id
        );

        let completion_time = start_time + proc.burst_time;
        let turnaround_time = completion_time - proc.arrival_time;

        proc.state = ProcessState::Scheduled;
        proc.start_time = Some(start_time);
        proc.completion_time = Some(completion_time);
        proc.turnaround_time = Some(turnaround_time);
        proc.waiting_time = Some(turnaround_time - proc.burst_time);

        completion_time
    }
}
