pub mod driver;
pub mod process;

pub use driver::Sim;
pub use process::{MAX_TICKS, ProcessSpec, RawProcess};
