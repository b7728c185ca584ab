use camino::Utf8Path;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use groundtrace::ground_track::{trace_satellite, TimeWindow, TraceConfig};
use groundtrace::satellite::Satellite;
use groundtrace::tle_file::{read_tle_file, select_by_name};

fn bench_one_day(c: &mut Criterion) {
    let catalog = read_tle_file(Utf8Path::new("tests/data/stations.tle")).unwrap();
    let iss = select_by_name(&catalog, &["ISS (ZARYA)"]).unwrap()[0].clone();
    let satellite = Satellite::new(iss).unwrap();
    let start = "2023-07-06 00:00:00".parse().unwrap();

    let mut step_group = c.benchmark_group("one_day_trace");

    for step_seconds in [1, 10, 60, 600] {
        let window = TimeWindow::one_day(start, step_seconds).unwrap();
        let config = TraceConfig::default().with_step_seconds(step_seconds);

        step_group.throughput(Throughput::Elements(window.sample_count() as u64));
        step_group.bench_with_input(
            BenchmarkId::from_parameter(format!("step_{step_seconds}s")),
            &window,
            |b, window| {
                b.iter(|| black_box(trace_satellite(&satellite, window, &config).unwrap()));
            },
        );
    }
    step_group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_one_day
);
criterion_main!(benches);
