use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use flowlog::{decode_series, expand, tokenize};

/// Build a stream resembling a day of device data: flow runs, pauses and
/// a temperature marker every hour
fn sample_stream(hours: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    for h in 0..hours {
        bytes.push(0xDC + (h % 4) as u8);
        bytes.extend([0xE0, 0x40]);
        for i in 0..600 {
            bytes.push(107 + (i % 5) as u8);
        }
        // 2999 second pause
        bytes.extend([0xFB, 0xB7]);
    }
    bytes
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for hours in [1, 24, 168] {
        let bytes = sample_stream(hours);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_function(format!("{hours}h"), |b| b.iter(|| black_box(tokenize(black_box(&bytes)))));
    }
    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let codes = tokenize(&sample_stream(24));

    let mut group = c.benchmark_group("expand");
    group.throughput(Throughput::Elements(24 * 3600));
    group.bench_function("24h", |b| b.iter(|| black_box(expand(black_box(&codes), 1_600_000_000))));
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let bytes = sample_stream(24);

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(24 * 3600));
    group.bench_function("24h", |b| b.iter(|| black_box(decode_series(black_box(&bytes), 1_600_000_000))));
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_expand, bench_pipeline);
criterion_main!(benches);
