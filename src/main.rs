use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fcfs_model::{FcfsSim, render_gantt, workload};

#[derive(Parser, Debug)]
#[command(name = "fcfs_model", version, about = "First-come-first-served scheduling simulator")]
struct Args {
    /// JSON workload: [{"id": "P1", "arrival": 0, "burst": 5}, ...]
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate a random workload over this many ticks
    #[arg(long, value_name = "TICKS")]
    random: Option<u64>,

    #[arg(long, default_value_t = 0.3)]
    p_arrival: f64,

    #[arg(long, default_value_t = 6)]
    max_burst: u64,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Also print a Gantt chart of the timeline
    #[arg(long)]
    gantt: bool,

    #[arg(long, default_value_t = 60)]
    width: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let specs = match (&args.input, args.random) {
        (Some(path), _) => workload::from_path(path)
            .with_context(|| format!("loading workload from {}", path.display()))?,
        (None, Some(ticks)) => workload::bernoulli(ticks, args.p_arrival, args.max_burst, args.seed),
        (None, None) => workload::sample(),
    };

    let mut sim = FcfsSim::with_processes(specs).context("building workload")?;
    sim.run();

    let stats = sim.stats().context("reporting statistics")?;
    println!("{stats}");

    let timeline = sim.timeline();
    println!(
        "Makespan: {} ticks ({} idle)",
        timeline.makespan(),
        timeline.idle_ticks()
    );

    if args.gantt {
        println!();
        print!("{}", render_gantt(timeline, args.width));
    }

    Ok(())
}
