//! Encode and decode benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use syncgraph_bench::{chain, holder, record, roster};
use syncgraph_codec::{from_json_str, to_json_string};
use syncgraph_core::Syncable;
use syncgraph_testkit::{fresh, Complex, DataRecord, Holder, Node, Roster};

/// Benchmark encoding single objects.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    group.bench_function("complex", |b| {
        let value = Complex::new(21.0, 7.0);
        b.iter(|| black_box(black_box(&value).to_sync_data().unwrap()));
    });

    group.bench_function("holder", |b| {
        let value = holder();
        b.iter(|| black_box(black_box(&value).to_sync_data().unwrap()));
    });

    group.bench_function("record", |b| {
        let value = record();
        b.iter(|| black_box(black_box(&value).to_sync_data().unwrap()));
    });

    group.finish();
}

/// Benchmark decoding single objects.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("complex", |b| {
        let data = Complex::new(21.0, 7.0).to_sync_data().unwrap();
        b.iter(|| {
            let mut target = Complex::default();
            target.sync_from(black_box(&data)).unwrap();
            black_box(target);
        });
    });

    group.bench_function("holder", |b| {
        let data = holder().to_sync_data().unwrap();
        b.iter(|| {
            let mut target: Holder = fresh();
            target.sync_from(black_box(&data)).unwrap();
            black_box(target);
        });
    });

    group.bench_function("record", |b| {
        let data = record().to_sync_data().unwrap();
        b.iter(|| {
            let mut target: DataRecord = fresh();
            target.sync_from(black_box(&data)).unwrap();
            black_box(target);
        });
    });

    group.finish();
}

/// Benchmark scaling with chain length and list size.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for len in [8, 64, 256] {
        let source = chain(len);
        let data = source.to_sync_data().unwrap();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("chain_encode", len), &source, |b, source| {
            b.iter(|| black_box(source.to_sync_data().unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("chain_decode", len), &data, |b, data| {
            b.iter(|| {
                let mut target: Node = fresh();
                target.sync_from(data).unwrap();
                black_box(target);
            });
        });
    }

    for n in [10, 100, 1000] {
        let source = roster(n);
        let data = source.to_sync_data().unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("roster_encode", n), &source, |b, source| {
            b.iter(|| black_box(source.to_sync_data().unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("roster_decode", n), &data, |b, data| {
            b.iter(|| {
                let mut target: Roster = fresh();
                target.sync_from(data).unwrap();
                black_box(target);
            });
        });
    }

    group.finish();
}

/// Benchmark a full JSON transit: encode, print, parse, decode.
fn bench_json_transit(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_transit");

    for n in [10, 100] {
        let source = roster(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, source| {
            b.iter(|| {
                let text = to_json_string(&source.to_sync_data().unwrap()).unwrap();
                let parsed = from_json_str(black_box(&text)).unwrap();
                let mut target: Roster = fresh();
                target.sync_from(&parsed).unwrap();
                black_box(target);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_scaling,
    bench_json_transit,
);

criterion_main!(benches);
