use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use plotopt::config::PackerConfig;
use plotopt::knapsack::KnapsackSolver;
use plotopt::pack::RectanglePacker;
use plotpack::entities::{BuildingFact, BuildingKind, KnapsackInstance, PackInstance};
use plotpack::io::ext_repr::ExtBuilding;
use plotpack::io::import;
use std::hint::black_box;
use std::path::Path;

criterion_main!(benches);
criterion_group!(benches, knapsack_bench, pack_bench);

const BUILDINGS_PATH: &str = "../assets/buildings_small.json";
const BUCKET_SIZES: [f32; 3] = [100.0, 25.0, 5.0];
const PLOT_SIDES: [f32; 3] = [40.0, 60.0, 80.0];

fn read_buildings() -> Vec<BuildingFact> {
    let file = std::fs::File::open(Path::new(BUILDINGS_PATH)).expect("could not open buildings");
    let ext_buildings: Vec<ExtBuilding> =
        serde_json::from_reader(std::io::BufReader::new(file)).expect("could not parse buildings");
    import::import_buildings(&ext_buildings).expect("invalid buildings")
}

/// Table construction and backtracking with increasingly fine buckets.
fn knapsack_bench(c: &mut Criterion) {
    let mut buildings = read_buildings();
    // a cheap type with a sizeable area keeps the fast path out of reach
    buildings.push(
        BuildingFact::try_new("row_house", 8.0, 5.0, 0.0, 10.0, 4.0, BuildingKind::Apartment).unwrap(),
    );
    let instance = KnapsackInstance::try_new(60.0 * 80.0, 5_000.0, buildings).unwrap();

    let mut group = c.benchmark_group("knapsack_table");
    for bucket_size in BUCKET_SIZES {
        let solver = KnapsackSolver::new(bucket_size).with_fast_path(false);
        group.bench_function(BenchmarkId::from_parameter(bucket_size), |b| {
            b.iter(|| black_box(solver.solve(&instance).unwrap()))
        });
    }
    group.finish();
}

/// Packing the selection for square plots of different sizes.
fn pack_bench(c: &mut Criterion) {
    let buildings = read_buildings();
    let packer = RectanglePacker::new(PackerConfig {
        max_attempts: Some(100_000),
        time_limit_ms: None,
    });

    let mut group = c.benchmark_group("pack_selection");
    for side in PLOT_SIDES {
        let ks_instance = KnapsackInstance::try_new(side * side, 1_000.0, buildings.clone()).unwrap();
        let selection = KnapsackSolver::new(100.0).solve(&ks_instance).unwrap();
        let instance = PackInstance::try_new(side, side, selection.blocks()).unwrap();

        group.bench_function(BenchmarkId::from_parameter(side), |b| {
            b.iter(|| black_box(packer.pack(&instance)))
        });
    }
    group.finish();
}
