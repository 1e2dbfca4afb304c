use bitfield::Bitfield;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::*;

const SIZES: [usize; 3] = [64, 4096, 262_144];

pub fn not_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("Bitfield::not");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            let bitfield = random_bitfield(size, false);
            bencher.iter(|| bitfield.not());
        });
    }
    group.finish();
}

pub fn binary_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("Bitfield::binary");
    for size in SIZES {
        let cases = [("plain", false, false), ("mixed", false, true), ("inverted", true, true)];
        for (name, left_inverted, right_inverted) in cases {
            let left = random_bitfield(size, left_inverted);
            let right = random_bitfield(size / 2, right_inverted);
            group.bench_with_input(BenchmarkId::new(format!("and/{name}"), size), &size, |bencher, _| {
                bencher.iter(|| left.and(&right));
            });
            group.bench_with_input(BenchmarkId::new(format!("or/{name}"), size), &size, |bencher, _| {
                bencher.iter(|| left.or(&right));
            });
            group.bench_with_input(BenchmarkId::new(format!("xor/{name}"), size), &size, |bencher, _| {
                bencher.iter(|| left.xor(&right));
            });
        }
    }
    group.finish();
}

pub fn set_bit_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("Bitfield::set_bit");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            let mut random_number_generator = thread_rng();
            bencher.iter_batched(
                || (random_bitfield(size, false), random_number_generator.gen_range(0..2 * size)),
                |(bitfield, index)| bitfield.set_bit(index),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn random_bitfield(size: usize, inverted: bool) -> Bitfield {
    let mut random_number_generator = thread_rng();
    let bits: Vec<bool> = (0..size.max(1)).map(|_| random_number_generator.r#gen()).collect();
    Bitfield::from_bools_with(&bits, inverted, bits.len()).expect("benchmark sizes are positive")
}

criterion_group!(benches, not_benchmark, binary_benchmark, set_bit_benchmark);
criterion_main!(benches);
