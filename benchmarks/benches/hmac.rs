// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use shamac::{Algorithm, Hmac, hmac_digest};

fn benchmark_hmac(c: &mut Criterion) {
    let key = b"benchmark-hmac-key";

    for &algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("hmac_{}", algorithm.name()));

        for len in [32, 1024, 64 * 1024].iter() {
            let data = vec![0x3cu8; *len];
            group.throughput(Throughput::Bytes(*len as u64));
            group.bench_with_input(format!("{} bytes", len), &data, |b, data| {
                b.iter(|| hmac_digest(black_box(algorithm), black_box(data), black_box(key)));
            });
        }
        group.finish();
    }
}

fn benchmark_keying(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_keying");
    let long_key = [0xaau8; 200];

    for &algorithm in Algorithm::ALL {
        group.bench_function(format!("{} long key", algorithm.name()), |b| {
            b.iter(|| Hmac::new(black_box(algorithm), black_box(&long_key)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_hmac, benchmark_keying);
criterion_main!(benches);
