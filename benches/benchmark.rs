use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use n_body_bench::{
    inits,
    runners::OfflineHeadless,
    sims::{NaiveSim, ParallelSim, SimParams, Simulator},
};

#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

const SIZES: [usize; 4] = [100, 250, 500, 1000];

fn bench_sim<T: Simulator>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for size in SIZES.iter() {
        group.throughput(Throughput::Elements((*size * *size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let sim_params = SimParams {
                particle_num: size,
                ..SimParams::default()
            };
            let mut runner = OfflineHeadless::<T>::new(sim_params, inits::uniform_init).unwrap();
            b.iter(|| runner.step());
        });
    }
    group.finish()
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_sim::<NaiveSim>(c, "naive");
    bench_sim::<ParallelSim>(c, "parallel");
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
