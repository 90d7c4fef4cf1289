pub mod observer;
pub mod state;
pub mod timeline;

pub use observer::Observer;
pub use state::{Process, ProcessKey, ProcessState, ProcessTable, Ticks};
pub use timeline::{Slice, Timeline};
