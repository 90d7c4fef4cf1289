use std::fmt;

use average::{Estimate, Mean};

use crate::{
    core::{ProcessTable, Ticks, Timeline},
    error::SchedError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRow {
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub start: Ticks,
    pub completion: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
}

/// Per-process results in dispatch order plus the run-wide averages.
#[derive(Debug, Clone)]
pub struct Stats {
    pub rows: Vec<StatsRow>,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
}

impl Stats {
    /// Builds the report once every process is scheduled. A pending process
    /// fails with `NotRun`; an empty table with `EmptyWorkload` rather than a
    /// NaN average.
    pub(crate) fn collect(table: &ProcessTable) -> Result<Self, SchedError> {
        let mut rows = table
            .iter()
            .map(|p| {
                Some(StatsRow {
                    id: p.id.clone(),
                    arrival: p.arrival_time,
                    burst: p.burst_time,
                    start: p.start_time?,
                    completion: p.completion_time?,
                    turnaround: p.turnaround_time?,
                    waiting: p.waiting_time?,
                })
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(SchedError::NotRun)?;

        if rows.is_empty() {
            return Err(SchedError::EmptyWorkload);
        }
        rows.sort_by_key(|r| r.start);

        let avg_turnaround = avg(rows.iter().map(|r| r.turnaround as f64));
        let avg_waiting = avg(rows.iter().map(|r| r.waiting as f64));

        Ok(Self {
            rows,
            avg_turnaround,
            avg_waiting,
        })
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PID | Arrival | Burst | Start | Completion | Turnaround | Waiting"
        )?;
        for r in &self.rows {
            writeln!(
                f,
                "{:>3} | {:^7} | {:^5} | {:^5} | {:^10} | {:^10} | {:^7}",
                r.id, r.arrival, r.burst, r.start, r.completion, r.turnaround, r.waiting
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.avg_turnaround)?;
        write!(f, "Average Waiting Time: {:.2}", self.avg_waiting)
    }
}

/// Text Gantt chart: one row per slice, `width` columns spanning `0..=makespan`.
pub fn render_gantt(timeline: &Timeline, width: usize) -> String {
    if timeline.is_empty() {
        return String::new();
    }

    let width = width.max(1);
    let makespan = timeline.makespan();
    // Padding counts chars, not bytes
    let label_w = timeline
        .iter()
        .map(|s| s.id.chars().count())
        .max()
        .unwrap_or(0);
    let col = |t: Ticks| (t as u128 * width as u128 / makespan as u128) as usize;

    let mut out = String::new();
    for slice in timeline.iter() {
        let from = col(slice.start).min(width - 1);
        let to = col(slice.end).max(from + 1).min(width);

        let bar: String = (0..width)
            .map(|c| if (from..to).contains(&c) { '#' } else { ' ' })
            .collect();
        out.push_str(&format!(
            "{:<label_w$} |{bar}| {}-{}\n",
            slice.id, slice.start, slice.end
        ));
    }

    let axis_w = width + 1;
    out.push_str(&format!("{:<label_w$} 0{makespan:>axis_w$}\n", ""));
    out
}
