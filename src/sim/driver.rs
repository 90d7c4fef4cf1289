use log::{debug, info, warn};

use super::process::ProcessSpec;
use crate::{
    core::{Observer, Process, ProcessKey, ProcessTable, Ticks, Timeline},
    error::SchedError,
    report::Stats,
    scheduler::Scheduler,
};

pub struct Sim<S: Scheduler> {
    table: ProcessTable,
    scheduler: S,
    timeline: Timeline,
    observer: Observer,
    has_run: bool,
}

impl<S: Scheduler> Sim<S> {
    pub fn new() -> Self {
        Self {
            table: ProcessTable::new(),
            scheduler: S::init(),
            timeline: Timeline::new(),
            observer: Observer::new(),
            has_run: false,
        }
    }

    pub fn with_processes(specs: impl IntoIterator<Item = ProcessSpec>) -> Result<Self, SchedError> {
        let mut sim = Self::new();
        for spec in specs {
            sim.add_process(spec)?;
        }
        Ok(sim)
    }

    /// Duplicate identifiers are rejected, as is adding after [`Sim::run`].
    pub fn add_process(&mut self, spec: ProcessSpec) -> Result<ProcessKey, SchedError> {
        if self.has_run {
            warn!("rejecting process {}: scheduler already ran", spec.id);
            return Err(SchedError::AlreadyRun);
        }

        let ProcessSpec {
            id,
            arrival_time,
            burst_time,
        } = spec;
        self.table
            .insert(id, arrival_time, burst_time)
            .inspect_err(|err| warn!("rejecting process: {err}"))
    }

    /// Runs every added process to completion in dispatch order.
    ///
    /// Only the first call does any work; later calls leave the derived
    /// times and the timeline untouched.
    pub fn run(&mut self) {
        if self.has_run {
            debug!("{} already ran, keeping existing timeline", self.scheduler.name());
            return;
        }

        for proc in self.table.iter() {
            self.scheduler.enqueue(proc);
        }

        let mut clock: Ticks = 0;
        while let Some(key) = self.scheduler.dispatch() {
            let arrival = self.table.process(key).arrival_time;
            if clock < arrival {
                debug!("t={clock} cpu idle until {arrival}");
                clock = arrival;
            }

            let end = self.table.mark_scheduled(key, clock);
            let proc = self.table.process(key);
            debug!("t={clock} dispatch {} (burst {})", proc.id, proc.burst_time);

            self.timeline.push(proc.id.clone(), clock, end);
            clock = end;
        }

        self.has_run = true;
        self.observer.observe(&self.table, &self.timeline);

        info!(
            "{} scheduled {} processes, makespan {} ticks, {} idle",
            self.scheduler.name(),
            self.table.len(),
            self.timeline.makespan(),
            self.timeline.idle_ticks()
        );
    }

    pub fn stats(&self) -> Result<Stats, SchedError> {
        if !self.has_run {
            return Err(SchedError::NotRun);
        }
        Stats::collect(&self.table)
    }

    pub fn has_run(&self) -> bool {
        self.has_run
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn process(&self, id: &str) -> Option<&Process> {
        self.table.by_id(id)
    }

    pub fn processes(&self) -> impl Iterator<Item = &Process> {
        self.table.iter()
    }
}

impl<S: Scheduler> Default for Sim<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::FcfsScheduler;

    fn spec(id: &str, arrival: Ticks, burst: Ticks) -> ProcessSpec {
        ProcessSpec::new(id, arrival, burst).unwrap()
    }

    #[test]
    fn add_after_run_is_rejected() {
        let mut sim = Sim::<FcfsScheduler>::new();
        sim.add_process(spec("A", 0, 1)).unwrap();
        sim.run();

        let err = sim.add_process(spec("B", 1, 1)).unwrap_err();
        assert!(matches!(err, SchedError::AlreadyRun));
        assert_eq!(sim.processes().count(), 1);
    }

    #[test]
    fn duplicate_add_keeps_first() {
        let mut sim = Sim::<FcfsScheduler>::new();
        sim.add_process(spec("A", 0, 2)).unwrap();
        assert!(matches!(
            sim.add_process(spec("A", 5, 9)),
            Err(SchedError::DuplicateId(_))
        ));

        sim.run();
        assert_eq!(sim.process("A").unwrap().completion_time, Some(2));
    }

    #[test]
    fn stats_before_run_fails() {
        let sim = Sim::<FcfsScheduler>::with_processes([spec("A", 0, 2)]).unwrap();
        assert!(matches!(sim.stats(), Err(SchedError::NotRun)));
    }

    #[test]
    fn idle_gap_between_processes() {
        let mut sim =
            Sim::<FcfsScheduler>::with_processes([spec("A", 0, 2), spec("B", 5, 1)]).unwrap();
        sim.run();

        let b = sim.process("B").unwrap();
        assert_eq!(b.start_time, Some(5));
        assert_eq!(b.waiting_time, Some(0));
        assert_eq!(sim.timeline().idle_ticks(), 3);
    }

    #[test]
    fn processes_keep_insertion_order_after_run() {
        let mut sim =
            Sim::<FcfsScheduler>::with_processes([spec("late", 4, 1), spec("early", 0, 1)])
                .unwrap();
        sim.run();

        let ids: Vec<_> = sim.processes().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["late", "early"]);
        let order: Vec<_> = sim.timeline().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, ["early", "late"]);
    }
}
