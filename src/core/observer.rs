use super::{
    state::{ProcessState, ProcessTable},
    timeline::Timeline,
};

/// Checks the finished schedule in debug builds.
#[derive(Debug, Default)]
pub struct Observer;

impl Observer {
    pub fn new() -> Self {
        Self
    }

    pub fn observe(&self, table: &ProcessTable, timeline: &Timeline) {
        debug_assert_eq!(
            table.len(),
            timeline.len(),
            "Every process must appear exactly once in the timeline"
        );

        for proc in table.iter() {
            let id = &proc.id;
            debug_assert_eq!(
                proc.state,
                ProcessState::Scheduled,
                "Process {id} still pending after run"
            );

            let (Some(start), Some(end), Some(turnaround), Some(waiting)) = (
                proc.start_time,
                proc.completion_time,
                proc.turnaround_time,
                proc.waiting_time,
            ) else {
                debug_assert!(false, "Process {id} missing derived times");
                continue;
            };

            debug_assert!(start >= proc.arrival_time, "Process {id} ran before arrival");
            debug_assert_eq!(end, start + proc.burst_time, "Process {id} completion mismatch");
            debug_assert_eq!(turnaround, end - proc.arrival_time, "Process {id} turnaround mismatch");
            debug_assert_eq!(waiting, turnaround - proc.burst_time, "Process {id} waiting mismatch");
        }

        for pair in timeline.slices().windows(2) {
            debug_assert!(
                pair[0].end <= pair[1].start,
                "Slices {} and {} overlap",
                pair[0].id,
                pair[1].id
            );
        }
    }
}
