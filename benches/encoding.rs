use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hexd::{AlphabetRegistry, Codec, DecodeOptions, LOWER, UPPER};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode_vec(c: &mut Criterion) {
    for (label, codec) in [("lower", LOWER), ("upper", UPPER)] {
        let mut group = c.benchmark_group(format!("encode_vec_{}", label));

        for size in SIZES {
            let data = sample(size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
                b.iter(|| codec.encoder().encode_vec(black_box(data)).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_encode_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_buffer");

    for size in SIZES {
        let data = sample(size);
        let mut output = vec![0u8; size * 2];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                LOWER.encoder().encode(black_box(data), &mut output);
            });
        });
    }
    group.finish();
}

fn bench_decode_vec(c: &mut Criterion) {
    for (label, options) in [("mixed", DecodeOptions::MIXED), ("strict", DecodeOptions::strict())] {
        let mut group = c.benchmark_group(format!("decode_vec_{}", label));

        for size in SIZES {
            let encoded = LOWER.encoder().encode_vec(&sample(size)).unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
                b.iter(|| LOWER.decode_vec(black_box(encoded), options).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_decode_to_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_to_sink");

    for size in SIZES {
        let encoded = UPPER.encoder().encode_vec(&sample(size)).unwrap();
        let mut sink = Vec::with_capacity(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| {
                sink.clear();
                UPPER
                    .decoder()
                    .decode_to_sink(black_box(encoded), &mut sink, DecodeOptions::default())
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_custom_alphabet(c: &mut Criterion) {
    let registry = AlphabetRegistry::load_default().unwrap();
    let codec: Codec = registry.codec("modhex").unwrap();
    let mut group = c.benchmark_group("modhex");

    for size in SIZES {
        let data = sample(size);
        let encoded = codec.encoder().encode_vec(&data).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| codec.encoder().encode_vec(black_box(data)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| codec.decode_vec(black_box(encoded), DecodeOptions::MIXED).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_vec,
    bench_encode_buffer,
    bench_decode_vec,
    bench_decode_to_sink,
    bench_custom_alphabet
);
criterion_main!(benches);
