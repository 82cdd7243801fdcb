// Performance benchmarks for candidate generation, assignment and full mapping runs
use analogy_core::{generate_candidates, solve_assignment, CostMatrix, Mapper};
use analogy_similarity::{CachedProvider, Domain, LexicalProvider, RelationTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

const VERBS: &[&str] = &[
    "orbits", "attracts", "pulls", "contains", "discovered", "heats", "is bigger than",
    "is smaller than", "surrounds", "feeds", "controls", "repels",
];

fn entity_names(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

/// Two isomorphic domains: target entity i plays the role of base entity i
fn synthetic_domain(n: usize, density: f64, seed: u64) -> (Vec<String>, Vec<String>, RelationTable) {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = entity_names("b", n);
    let target = entity_names("t", n);
    let mut table = RelationTable::new();

    for i in 0..n {
        for j in 0..n {
            if i == j || !rng.random_bool(density) {
                continue;
            }
            let count = rng.random_range(1..=3);
            let props: Vec<&str> = VERBS.choose_multiple(&mut rng, count).copied().collect();
            table.insert(&base[i], &base[j], props.iter().copied());
            table.insert(&target[i], &target[j], props);
        }
    }
    (base, target, table)
}

fn random_costs(rows: usize, cols: usize, rng: &mut StdRng) -> CostMatrix {
    let mut costs = CostMatrix::new(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            if rng.random_bool(0.8) {
                costs.set(i, j, rng.random_range(0.0..1.0));
            }
        }
    }
    costs
}

fn benchmark_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_candidates");

    for size in [4, 8, 16].iter() {
        let base = entity_names("b", *size);
        let target = entity_names("t", *size);
        group.bench_with_input(BenchmarkId::new("entities", size), size, |b, _| {
            b.iter(|| generate_candidates(black_box(&base), black_box(&target)));
        });
    }

    group.finish();
}

fn benchmark_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("hungarian");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [4, 16, 64].iter() {
        let costs = random_costs(*size, *size, &mut rng);
        group.bench_with_input(BenchmarkId::new("square", size), size, |b, _| {
            b.iter(|| solve_assignment(black_box(&costs)));
        });

        let wide = random_costs(*size / 2, *size, &mut rng);
        group.bench_with_input(BenchmarkId::new("wide", size), size, |b, _| {
            b.iter(|| solve_assignment(black_box(&wide)));
        });
    }

    group.finish();
}

fn benchmark_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");
    group.sample_size(10);

    let domain = Domain::solar_atom().unwrap();
    let table = domain.relation_table().unwrap();
    group.bench_function("solar_atom", |b| {
        b.iter(|| {
            let mapper = Mapper::new(LexicalProvider::new(table.clone()));
            mapper.map(black_box(&domain.base), black_box(&domain.target)).unwrap()
        });
    });
    group.bench_function("solar_atom_cached", |b| {
        b.iter(|| {
            let mapper = Mapper::new(CachedProvider::new(LexicalProvider::new(table.clone())));
            mapper.map(black_box(&domain.base), black_box(&domain.target)).unwrap()
        });
    });

    for size in [5, 7].iter() {
        let (base, target, table) = synthetic_domain(*size, 0.4, 42);
        group.bench_with_input(BenchmarkId::new("synthetic_cached", size), size, |b, _| {
            b.iter(|| {
                let mapper = Mapper::new(CachedProvider::new(LexicalProvider::new(table.clone())));
                mapper.map(black_box(&base), black_box(&target)).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_candidates, benchmark_assignment, benchmark_mapping);
criterion_main!(benches);
