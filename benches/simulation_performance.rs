//! Performance benchmarks for simulation runs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matchmaking_sim::config::{RunOptions, SimulationParameters};
use matchmaking_sim::rating::{NaiveEloCalculator, RatingCalculator};
use matchmaking_sim::rng::SimulationRng;
use matchmaking_sim::scheduler::EventScheduler;
use matchmaking_sim::simulation::Simulation;
use matchmaking_sim::strategy::StrategyRegistry;
use matchmaking_sim::types::{EventKind, QueueType};

fn bench_options(num_players: usize, sim_time: f64) -> RunOptions {
    RunOptions {
        sim_time,
        num_players,
        seed: Some(42),
        ..RunOptions::default()
    }
}

fn bench_full_runs(c: &mut Criterion) {
    let strategies = StrategyRegistry::with_defaults();
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);

    for num_players in [100usize, 1_000, 5_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_players),
            &num_players,
            |b, &num_players| {
                b.iter(|| {
                    let mut simulation = Simulation::new(
                        SimulationParameters::default(),
                        bench_options(num_players, 3600.0),
                        &strategies,
                    )
                    .unwrap();
                    black_box(simulation.run().unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_scheduler_churn(c: &mut Criterion) {
    c.bench_function("scheduler_10k_events", |b| {
        b.iter(|| {
            let mut rng = SimulationRng::new(7);
            let mut scheduler = EventScheduler::new();
            for player_id in 0..10_000 {
                let at = rng.uniform(0.0, 360.0);
                scheduler
                    .schedule(
                        at,
                        EventKind::JoinQueue {
                            player_id,
                            queue_type: QueueType::Duel,
                        },
                    )
                    .unwrap();
            }
            while let Some(event) = scheduler.pop_earliest() {
                black_box(event);
            }
        })
    });
}

fn bench_rating_updates(c: &mut Criterion) {
    let calculator = NaiveEloCalculator::new();
    let params = SimulationParameters::default();
    let roster: Vec<_> = (0..10).map(|id| (id, 1500.0 + id as f64)).collect();

    c.bench_function("group_rating_update_10_players", |b| {
        let mut rng = SimulationRng::new(3);
        b.iter(|| {
            black_box(
                calculator
                    .calculate_outcome(QueueType::Group, black_box(&roster), &params, &mut rng)
                    .unwrap(),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_full_runs,
    bench_scheduler_churn,
    bench_rating_updates
);
criterion_main!(benches);
