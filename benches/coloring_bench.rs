//! Criterion benchmarks for the coloring search.
//!
//! Uses seeded random graphs so timings are comparable between runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_coloring::ga::operators::{block_crossover, random_coloring, reset_mutation};
use u_coloring::ga::{conflicts, ColoringRunner, Silent, SolverConfig};
use u_coloring::graph::Graph;
use u_coloring::random::create_rng;

fn random_graph(nodes: usize, avg_degree: f64) -> Graph {
    let mut rng = create_rng(42);
    Graph::random(nodes, avg_degree / nodes as f64, &mut rng)
}

fn bench_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflicts");

    for &nodes in &[100usize, 1_000, 10_000] {
        let graph = random_graph(nodes, 8.0);
        let mut rng = create_rng(7);
        let coloring = random_coloring(nodes, 7, &mut rng);
        group.bench_with_input(
            BenchmarkId::from_parameter(nodes),
            &(graph, coloring),
            |b, (g, col)| b.iter(|| black_box(conflicts(black_box(g), black_box(col)))),
        );
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("breed");

    for &len in &[100usize, 1_000] {
        let mut rng = create_rng(3);
        let a = random_coloring(len, 7, &mut rng);
        let b = random_coloring(len, 7, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(len), &(a, b), |bench, (a, b)| {
            let mut rng = create_rng(11);
            bench.iter(|| {
                let child = block_crossover(&[a, b], &mut rng);
                black_box(reset_mutation(child, 7, &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for (nodes, pop, iters) in [(50usize, 50usize, 50usize), (200, 100, 30), (1_000, 100, 10)] {
        let graph = random_graph(nodes, 3.0);
        let config = SolverConfig::default()
            .with_num_colors(3)
            .with_population_size(pop)
            .with_max_iterations(iters)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_i{}", nodes, pop, iters), nodes),
            &(graph, config),
            |b, (g, c)| {
                b.iter(|| {
                    let result = ColoringRunner::run_with_observer(
                        black_box(g),
                        black_box(c),
                        &Silent,
                        None,
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_conflicts, bench_operators, bench_solve);
criterion_main!(benches);
