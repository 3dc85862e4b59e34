use std::time::Duration;

use phone_sorter::application::ports::{DatasetGenerator, Sorter};
use phone_sorter::infrastructure::generator::RandomDatasetGenerator;
use phone_sorter::infrastructure::sorter::{BitmapSorter, TreeSetSorter};

const BENCH_NAME: &str = "sort_methods";
const BENCH_GROUP_NAME: &str = const_format::formatc!("bench.{BENCH_NAME}");

fn sort_bencher<S: Sorter>(b: &mut criterion::Bencher, sorter: &S, record_count: usize) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("InputPhoneNumbers.txt");
    let output = dir.path().join("OutputPhoneNumbers.txt");
    RandomDatasetGenerator.generate(record_count, &input).unwrap();

    b.iter(|| sorter.sort(&input, &output).unwrap());
}

fn sort_methods_bench_group(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group(BENCH_GROUP_NAME);
    for record_count in [1_000, 10_000, 100_000] {
        group.throughput(criterion::Throughput::Elements(record_count as u64));

        let bench_id = criterion::BenchmarkId::new("naive", record_count);
        group.bench_function(bench_id, |b| sort_bencher(b, &TreeSetSorter, record_count));

        let bench_id = criterion::BenchmarkId::new("bitwise", record_count);
        group.bench_function(bench_id, |b| sort_bencher(b, &BitmapSorter, record_count));
    }
    group.finish();
}

criterion::criterion_group! {
    name = sort_methods;
    config = criterion::Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_secs(3));
    targets = sort_methods_bench_group
}

criterion::criterion_main!(sort_methods);
