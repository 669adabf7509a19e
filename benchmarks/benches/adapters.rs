// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rampart::support::test_utils::Xxtea;
use rampart::{ARX_STATE_WORDS, ArxProgram, Engine, EngineConfig, ResultSink, Secret};
use rampart_rand::SystemEntropySource;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench adapters
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(5));
        group.sample_size(30);
    }
}

struct DiscardSink;

impl ResultSink for DiscardSink {
    fn emit(&mut self, buffer: &[u8]) {
        black_box(buffer);
    }
}

fn bench_byte_transform(c: &mut Criterion) {
    let entropy = SystemEntropySource {};
    let first = Engine::first_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::first_order(..)");
    let second = Engine::second_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::second_order(..)");

    let key = Secret::new([0x42u8; 16]);
    let cipher = Xxtea { key: [1, 2, 3, 4] };

    let mut group = c.benchmark_group("byte_transform");
    configure_group(&mut group);

    for size in [16usize, 64, 256] {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("first_order", size), &size, |b, &s| {
            let mut data = vec![0u8; s];
            b.iter(|| {
                first
                    .byte_transform(&key, &mut data, &cipher, &mut DiscardSink)
                    .expect("Failed to byte_transform(..)")
            });
        });

        group.bench_with_input(BenchmarkId::new("second_order", size), &size, |b, &s| {
            let mut data = vec![0u8; s];
            b.iter(|| {
                second
                    .byte_transform(&key, &mut data, &cipher, &mut DiscardSink)
                    .expect("Failed to byte_transform(..)")
            });
        });
    }

    group.finish();
}

fn bench_arx_rounds(c: &mut Criterion) {
    let entropy = SystemEntropySource {};
    let first = Engine::first_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::first_order(..)");
    let second = Engine::second_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::second_order(..)");

    let state = Secret::new([0x6170_7865u32; ARX_STATE_WORDS]);
    let program = ArxProgram::chacha();

    let mut group = c.benchmark_group("arx_rounds");
    configure_group(&mut group);
    group.throughput(Throughput::Bytes(64));

    group.bench_function("chacha20/first_order", |b| {
        b.iter(|| {
            first
                .arx_rounds(&state, &program, 10, &mut DiscardSink)
                .expect("Failed to arx_rounds(..)")
        });
    });

    group.bench_function("chacha20/second_order", |b| {
        b.iter(|| {
            second
                .arx_rounds(&state, &program, 10, &mut DiscardSink)
                .expect("Failed to arx_rounds(..)")
        });
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let entropy = SystemEntropySource {};
    let engine = Engine::first_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::first_order(..)");

    let mut group = c.benchmark_group("sort");
    configure_group(&mut group);

    for size in [8usize, 32, 64] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("u8", size), &size, |b, &s| {
            let input: Vec<u8> = (0..s).rev().map(|i| i as u8).collect();
            b.iter(|| {
                let mut data = input.clone();
                engine
                    .sort(&mut data, &mut DiscardSink)
                    .expect("Failed to sort(..)");
                black_box(data)
            });
        });

        group.bench_with_input(BenchmarkId::new("u16", size), &size, |b, &s| {
            let input: Vec<u16> = (0..s).rev().map(|i| (i * 977) as u16).collect();
            b.iter(|| {
                let mut data = input.clone();
                engine
                    .sort(&mut data, &mut DiscardSink)
                    .expect("Failed to sort(..)");
                black_box(data)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_byte_transform, bench_arx_rounds, bench_sort);
criterion_main!(benches);
