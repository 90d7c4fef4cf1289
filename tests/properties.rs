use fcfs_model::{FcfsSim, ProcessSpec, core::Ticks, sim::MAX_TICKS};
use rand::prelude::*;

// Random sets with frequent arrival ties and idle gaps, ids in add order
fn random_workload(rng: &mut StdRng) -> Vec<ProcessSpec> {
    let count = rng.random_range(0..40);
    (0..count)
        .map(|i| {
            let arrival: Ticks = rng.random_range(0..30);
            let burst: Ticks = rng.random_range(1..8);
            ProcessSpec::new(format!("P{i}"), arrival, burst).unwrap()
        })
        .collect()
}

// Arrivals packed just below MAX_TICKS, bursts large enough that the clock
// ends near u64::MAX but the whole set stays accepted
fn near_limit_workload(rng: &mut StdRng) -> Vec<ProcessSpec> {
    let count: Ticks = rng.random_range(0..20);
    (0..count)
        .map(|i| {
            let arrival = MAX_TICKS - rng.random_range(0..1_000);
            let burst = rng.random_range(1..=MAX_TICKS / 20);
            ProcessSpec::new(format!("P{i}"), arrival, burst).unwrap()
        })
        .collect()
}

fn for_each_workload(check: impl FnMut(&[ProcessSpec], &FcfsSim)) {
    for_each_generated(random_workload, check);
}

fn for_each_generated(
    generate: impl Fn(&mut StdRng) -> Vec<ProcessSpec>,
    mut check: impl FnMut(&[ProcessSpec], &FcfsSim),
) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let specs = generate(&mut rng);
        let mut sim = FcfsSim::with_processes(specs.clone()).unwrap();
        sim.run();
        check(&specs, &sim);
    }
}

#[test]
fn completion_is_start_plus_burst() {
    for_each_workload(|_, sim| {
        for p in sim.processes() {
            let start = p.start_time.unwrap();
            assert!(start >= p.arrival_time, "{} ran before arrival", p.id);
            assert_eq!(p.completion_time, Some(start + p.burst_time));
            assert_eq!(
                p.waiting_time,
                Some(p.turnaround_time.unwrap() - p.burst_time)
            );
        }
    });
}

#[test]
fn timeline_is_ordered_and_disjoint() {
    for_each_workload(|specs, sim| {
        let slices = sim.timeline().slices();
        assert_eq!(slices.len(), specs.len());
        for pair in slices.windows(2) {
            assert!(pair[0].start <= pair[1].start);
            assert!(pair[0].end <= pair[1].start);
        }
    });
}

#[test]
fn dispatch_order_is_stable_sort_by_arrival() {
    for_each_workload(|specs, sim| {
        let mut expected: Vec<_> = specs.iter().collect();
        expected.sort_by_key(|s| s.arrival_time());

        let order: Vec<_> = sim.timeline().iter().map(|s| s.id.as_str()).collect();
        let expected: Vec<_> = expected.iter().map(|s| s.id()).collect();
        assert_eq!(order, expected);
    });
}

#[test]
fn second_run_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let mut sim = FcfsSim::with_processes(random_workload(&mut rng)).unwrap();
        sim.run();
        let timeline = sim.timeline().clone();
        let derived: Vec<_> = sim
            .processes()
            .map(|p| (p.start_time, p.completion_time, p.waiting_time))
            .collect();

        sim.run();
        assert_eq!(sim.timeline(), &timeline);
        let again: Vec<_> = sim
            .processes()
            .map(|p| (p.start_time, p.completion_time, p.waiting_time))
            .collect();
        assert_eq!(again, derived);
    }
}

#[test]
fn averages_are_finite_for_non_empty_sets() {
    for_each_workload(|specs, sim| match sim.stats() {
        Ok(stats) => {
            assert!(!specs.is_empty());
            assert!(stats.avg_turnaround.is_finite());
            assert!(stats.avg_waiting.is_finite());
            assert!(stats.avg_turnaround >= stats.avg_waiting);
        }
        Err(_) => assert!(specs.is_empty()),
    });
}

#[test]
fn invariants_hold_near_integer_limits() {
    for_each_generated(near_limit_workload, |specs, sim| {
        assert_eq!(sim.timeline().len(), specs.len());
        for p in sim.processes() {
            let start = p.start_time.unwrap();
            assert!(start >= p.arrival_time);
            assert_eq!(p.completion_time, Some(start + p.burst_time));
            assert_eq!(
                p.turnaround_time,
                Some(p.completion_time.unwrap() - p.arrival_time)
            );
        }
        for pair in sim.timeline().slices().windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    });
}
