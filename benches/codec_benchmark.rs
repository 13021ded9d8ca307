use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use xorpar::verify::{verify_encoded, VerifyConfig};
use xorpar::xor::xor_into;
use xorpar::{decode, encode, recover_chunk};

const SIZES: [usize; 3] = [4 * 1024, 256 * 1024, 4 * 1024 * 1024];

fn sample_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

/// Benchmark the XOR kernel on aligned and misaligned buffers
fn bench_xor_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("xor_into");
    let len = 64 * 1024;
    group.throughput(Throughput::Bytes(len as u64));

    let src = sample_data(len + 1);
    group.bench_function("aligned", |b| {
        let mut dst = vec![0x55u8; len];
        b.iter(|| xor_into(black_box(&mut dst), black_box(&src[..len])));
    });
    group.bench_function("misaligned", |b| {
        let mut dst = vec![0x55u8; len];
        b.iter(|| xor_into(black_box(&mut dst), black_box(&src[1..])));
    });
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in SIZES {
        let data = sample_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data), 8).unwrap());
        });
    }
    group.finish();
}

fn bench_recover(c: &mut Criterion) {
    let mut group = c.benchmark_group("recover_chunk");
    for size in SIZES {
        let encoded = encode(&sample_data(size), 8).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| recover_chunk(black_box(encoded), 3).unwrap());
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in SIZES {
        let encoded = encode(&sample_data(size), 8).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded), size).unwrap());
        });
    }
    group.finish();
}

/// Compare the sequential and parallel verification sweeps
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_encoded");
    let data = sample_data(1024 * 1024);
    let encoded = encode(&data, 32).unwrap();

    for (name, config) in [
        ("sequential", VerifyConfig::new(1, false)),
        ("parallel", VerifyConfig::default()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| verify_encoded(black_box(&encoded), &data, &config).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_xor_kernel,
    bench_encode,
    bench_recover,
    bench_decode,
    bench_verify
);
criterion_main!(benches);
