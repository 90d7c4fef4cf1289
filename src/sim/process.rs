use serde::{Deserialize, Serialize};

use crate::{core::Ticks, error::SchedError};

/// Largest arrival or burst a process may have, so every spec can be written
/// back to a workload file unchanged.
pub const MAX_TICKS: Ticks = i64::MAX as Ticks;

/// A validated process descriptor, ready to be added to a [`crate::Sim`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub(crate) id: String,
    pub(crate) arrival_time: Ticks,
    pub(crate) burst_time: Ticks,
}

impl ProcessSpec {
    /// Fails with [`SchedError::InvalidId`] for an empty identifier,
    /// [`SchedError::InvalidBurst`] for a zero burst and
    /// [`SchedError::TicksTooLarge`] for times above [`MAX_TICKS`].
    pub fn new(
        id: impl Into<String>,
        arrival_time: Ticks,
        burst_time: Ticks,
    ) -> Result<Self, SchedError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SchedError::InvalidId);
        }
        if burst_time == 0 {
            return Err(SchedError::InvalidBurst { id, burst: 0 });
        }
        if let Some(value) = [arrival_time, burst_time].into_iter().find(|&t| t > MAX_TICKS) {
            return Err(SchedError::TicksTooLarge { id, value });
        }

        Ok(Self {
            id,
            arrival_time,
            burst_time,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }
}

/// Wire form of a process, as found in workload files. Times are signed so
/// that negative values reach validation instead of failing as a type error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProcess {
    pub id: String,
    pub arrival: i64,
    pub burst: i64,
}

impl TryFrom<RawProcess> for ProcessSpec {
    type Error = SchedError;

    fn try_from(raw: RawProcess) -> Result<Self, Self::Error> {
        let RawProcess { id, arrival, burst } = raw;
        if id.trim().is_empty() {
            return Err(SchedError::InvalidId);
        }
        let Ok(arrival_time) = Ticks::try_from(arrival) else {
            return Err(SchedError::InvalidArrival { id, arrival });
        };
        let burst_time = match Ticks::try_from(burst) {
            Ok(b) if b > 0 => b,
            _ => return Err(SchedError::InvalidBurst { id, burst }),
        };

        Ok(Self {
            id,
            arrival_time,
            burst_time,
        })
    }
}

// Lossless: both constructors keep times within MAX_TICKS
impl From<&ProcessSpec> for RawProcess {
    fn from(spec: &ProcessSpec) -> Self {
        Self {
            id: spec.id.clone(),
            arrival: spec.arrival_time as i64,
            burst: spec.burst_time as i64,
        }
    }
}
