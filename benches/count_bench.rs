use std::hint::black_box;
use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linemeter::count::count_lines;

fn make_input(lines: usize) -> Vec<u8> {
    "2017-01-01,station-042,17.3\n".repeat(lines).into_bytes()
}

fn bench_count_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_lines");
    for lines in [1_000usize, 10_000, 100_000] {
        let data = make_input(lines);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &data, |b, data| {
            b.iter(|| count_lines(Cursor::new(black_box(data.as_slice()))).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_count_lines);
criterion_main!(benches);
