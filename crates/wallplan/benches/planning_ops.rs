//! Planning Operations Benchmarks
//!
//! Benchmarks for bond generation, design assembly and stride partitioning.
//!
//! Run with: `cargo bench --bench planning_ops`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wallplan::{
    generate_wall_design, plan_strides, BondStrategy, BrickId, BuildOrderSequencer, BuildState,
    Seed, WallConfig,
};

fn bonds() -> Vec<(&'static str, BondStrategy)> {
    vec![
        ("stretcher", BondStrategy::Stretcher),
        ("english_cross", BondStrategy::EnglishCross),
        ("wild", BondStrategy::Wild(Seed::from_u64(42))),
    ]
}

fn bench_design_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("design_generation");
    let config = WallConfig::default();

    for (name, bond) in bonds() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &bond, |bench, &bond| {
            bench.iter(|| {
                let design = generate_wall_design(black_box(&config), bond);
                black_box(design)
            });
        });
    }

    group.finish();
}

fn bench_wall_length_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("wild_wall_length");

    // Lengths of the form k * 220 + 210 fill exactly with the default bricks
    for units in [10u32, 20, 40] {
        let config = WallConfig::default().with_wall_length(units * 220 + 210);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{units}_units")),
            &config,
            |bench, config| {
                bench.iter(|| {
                    let design = generate_wall_design(
                        black_box(config),
                        BondStrategy::Wild(Seed::from_u64(7)),
                    );
                    black_box(design)
                });
            },
        );
    }

    group.finish();
}

fn bench_stride_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("stride_simulation");

    for (name, bond) in bonds() {
        let Ok(design) = generate_wall_design(&WallConfig::default(), bond) else {
            continue;
        };
        let state = BuildState::new();
        group.bench_function(name, |bench| {
            let sequencer = BuildOrderSequencer::new(&design);
            bench.iter(|| black_box(sequencer.simulate(&state, black_box(BrickId::new(0, 0)))));
        });
    }

    group.finish();
}

fn bench_stride_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("stride_planning");
    group.sample_size(20);

    for (name, bond) in bonds() {
        let Ok(design) = generate_wall_design(&WallConfig::default(), bond) else {
            continue;
        };
        group.bench_function(name, |bench| {
            bench.iter(|| black_box(plan_strides(black_box(&design))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_design_generation,
    bench_wall_length_scaling,
    bench_stride_simulation,
    bench_stride_planning,
);
criterion_main!(benches);
