use std::{fmt, io};

#[derive(Debug)]
pub enum SchedError {
    InvalidId,
    InvalidArrival { id: String, arrival: i64 },
    InvalidBurst { id: String, burst: i64 },
    // Times must fit the signed wire format
    TicksTooLarge { id: String, value: u64 },
    DuplicateId(String),
    // Adding the process could push the clock past u64::MAX
    ClockOverflow { id: String },
    // Processes cannot be added once the timeline exists
    AlreadyRun,
    NotRun,
    EmptyWorkload,
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "process identifier must not be empty"),
            Self::InvalidArrival { id, arrival } => {
                write!(f, "process {id}: arrival time {arrival} is negative")
            }
            Self::InvalidBurst { id, burst } => {
                write!(f, "process {id}: burst time {burst} must be positive")
            }
            Self::TicksTooLarge { id, value } => {
                write!(f, "process {id}: time {value} exceeds {}", i64::MAX)
            }
            Self::ClockOverflow { id } => {
                write!(f, "process {id}: schedule would overflow the clock")
            }
            Self::DuplicateId(id) => write!(f, "process {id} was already added"),
            Self::AlreadyRun => write!(f, "scheduler has already run"),
            Self::NotRun => write!(f, "statistics requested before the scheduler ran"),
            Self::EmptyWorkload => write!(f, "no processes to report on"),
            Self::Io(err) => write!(f, "failed to read workload: {err}"),
            Self::Parse(err) => write!(f, "malformed workload: {err}"),
        }
    }
}

impl std::error::Error for SchedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SchedError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SchedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
