// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use shamac::{Algorithm, Sha};

fn benchmark_checkpoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkpoint");

    for &algorithm in Algorithm::ALL {
        let mut sha = Sha::new(algorithm);
        sha.write(&[0x42; 100], 797).expect("write failed");
        let record = sha.dump().expect("dump failed");

        group.bench_function(format!("{} dump", algorithm.name()), |b| {
            b.iter(|| black_box(&sha).dump().expect("dump failed"));
        });
        group.bench_function(format!("{} load", algorithm.name()), |b| {
            b.iter(|| Sha::load(black_box(&record)).expect("load failed"));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_checkpoint);
criterion_main!(benches);
