pub mod core;
pub mod error;
pub mod report;
pub mod scheduler;
pub mod sim;
pub mod workload;

pub use error::SchedError;
pub use report::{Stats, StatsRow, render_gantt};
pub use scheduler::{FcfsScheduler, Scheduler};
pub use sim::{ProcessSpec, Sim};

pub type FcfsSim = Sim<FcfsScheduler>;
