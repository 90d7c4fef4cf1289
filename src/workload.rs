use std::{fs, path::Path};

use log::debug;
use rand::prelude::*;

use crate::{
    core::Ticks,
    error::SchedError,
    sim::{MAX_TICKS, ProcessSpec, RawProcess},
};

/// The four-process set used when no workload is given.
pub fn sample() -> Vec<ProcessSpec> {
    [("P1", 0, 5), ("P2", 2, 3), ("P3", 4, 1), ("P4", 6, 2)]
        .into_iter()
        .map(|(id, arrival_time, burst_time)| ProcessSpec {
            id: id.to_string(),
            arrival_time,
            burst_time,
        })
        .collect()
}

/// Parses a JSON array of `{"id", "arrival", "burst"}` objects. The first
/// invalid entry fails the whole workload.
pub fn from_json_str(json: &str) -> Result<Vec<ProcessSpec>, SchedError> {
    let raw: Vec<RawProcess> = serde_json::from_str(json)?;
    raw.into_iter().map(ProcessSpec::try_from).collect()
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<ProcessSpec>, SchedError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let specs = from_json_str(&json)?;
    debug!("loaded {} processes from {}", specs.len(), path.display());
    Ok(specs)
}

pub fn to_json_string(specs: &[ProcessSpec]) -> Result<String, SchedError> {
    let raw: Vec<RawProcess> = specs.iter().map(RawProcess::from).collect();
    Ok(serde_json::to_string_pretty(&raw)?)
}

/// Each tick, a process arrives with probability `p_arrival` and a burst drawn
/// uniformly from `1..=max_burst`. Seeded, so the same arguments give the same set.
pub fn bernoulli(ticks: Ticks, p_arrival: f64, max_burst: Ticks, seed: u64) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_burst = max_burst.clamp(1, MAX_TICKS);
    let mut specs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            specs.push(ProcessSpec {
                id: format!("P{}", specs.len() + 1),
                arrival_time: t,
                burst_time: rng.random_range(1..=max_burst),
            });
        }
    }

    specs
}
