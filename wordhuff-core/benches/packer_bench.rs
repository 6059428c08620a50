//! Performance benchmarks for bounded bit packing
//!
//! This benchmark suite evaluates:
//! - Packing throughput across primary buffer capacities
//! - Cost of overflow handling with tiny buffers
//! - Effect of codeword length on packing speed

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wordhuff_core::{BitSequence, BoundedBitPacker};

/// Generate codeword streams for benchmarking
mod test_codes {
    use wordhuff_core::BitSequence;

    /// `count` codewords of a fixed length with a varying bit pattern.
    pub fn fixed(count: usize, len: usize) -> Vec<BitSequence> {
        (0..count)
            .map(|i| (0..len).map(|j| (i >> (j % 16)) & 1 == 1).collect())
            .collect()
    }

    /// `count` codewords with lengths cycling through 1..=24.
    pub fn mixed(count: usize) -> Vec<BitSequence> {
        let mut seed: u64 = 0x123456789ABCDEF0;
        (0..count)
            .map(|i| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                let len = 1 + i % 24;
                (0..len).map(|j| (seed >> (j + 8)) & 1 == 1).collect()
            })
            .collect()
    }
}

fn pack(capacity: usize, codes: &[BitSequence]) -> usize {
    let mut packer = BoundedBitPacker::new(capacity).expect("non-zero capacity");
    let mut written = 0;
    for code in codes {
        packer.append(code).expect("append after drain");
        while packer.has_overflow() {
            written += packer.drain_full().expect("overflow pending").len();
        }
    }
    written + packer.drain_partial().expect("no overflow").len()
}

/// Benchmark packing across primary buffer capacities
fn bench_capacities(c: &mut Criterion) {
    let mut group = c.benchmark_group("packer_capacity");
    let codes = test_codes::mixed(100_000);
    let total_bits: usize = codes.iter().map(BitSequence::len).sum();

    for capacity in [16usize, 4 * 1024, 64 * 1024, 1024 * 1024] {
        group.throughput(Throughput::Bytes(total_bits.div_ceil(8) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &codes,
            |b, codes| {
                b.iter(|| black_box(pack(black_box(capacity), codes)));
            },
        );
    }

    group.finish();
}

/// Benchmark codeword length impact
fn bench_code_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("packer_code_length");

    for len in [1usize, 4, 8, 16, 32] {
        let codes = test_codes::fixed(50_000, len);
        group.throughput(Throughput::Bytes((50_000 * len).div_ceil(8) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &codes, |b, codes| {
            b.iter(|| black_box(pack(64 * 1024, codes)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_capacities, bench_code_lengths);
criterion_main!(benches);
