pub mod fcfs;

use crate::core::{Process, ProcessKey};
pub use fcfs::FcfsScheduler;

/// Dispatch policy plugged into [`crate::Sim`].
///
/// The driver enqueues every process once before the clock starts, then
/// repeatedly asks for the next one to run until the policy returns `None`.
/// Non-preemptive: a dispatched process runs to completion.
pub trait Scheduler {
    fn init() -> Self;

    fn enqueue(&mut self, process: &Process);

    fn dispatch(&mut self) -> Option<ProcessKey>;

    fn name(&self) -> &'static str;
}
