use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prim_mst::graph::{build_mst, prim_heap, Adjacency, PrimConfig, WeightedGraph};

fn random_connected_graph(n: u32, extra: u32, seed: u64) -> WeightedGraph<u32, i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for v in 1..n {
        edges.push((rng.gen_range(0..v), v, rng.gen_range(0..1000)));
    }
    for _ in 0..extra {
        edges.push((rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(0..1000)));
    }
    WeightedGraph::from_edges(edges, Adjacency::Symmetric)
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");
    let config = PrimConfig::default();

    for &n in &[16u32, 64, 256] {
        let graph = random_connected_graph(n, n * 3, 42);

        group.bench_with_input(BenchmarkId::new("scan", n), &graph, |b, g| {
            b.iter(|| build_mst(black_box(g), &0).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("heap", n), &graph, |b, g| {
            b.iter(|| prim_heap::minimum_spanning_tree(black_box(g), &0, &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prim);
criterion_main!(benches);
