// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::thread;

use super::support::{finish_hex, sample_message};
use crate::{Algorithm, Digest, Hmac, Sha, ShaError, hex};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_are_send_and_sync() {
    assert_send_sync::<Sha>();
    assert_send_sync::<Hmac>();
    assert_send_sync::<Digest>();
    assert_send_sync::<ShaError>();
}

#[test]
fn test_independent_engines_across_threads() {
    let message = sample_message(10_000);

    thread::scope(|scope| {
        let mut handles = Vec::new();
        for &algorithm in Algorithm::ALL {
            for worker in 0..4 {
                let message = &message;
                handles.push(scope.spawn(move || {
                    let mut sha = Sha::new(algorithm);
                    for chunk in message.chunks(100 + worker * 37) {
                        sha.update(chunk).expect("Failed to update(..)");
                    }
                    (algorithm, finish_hex(sha))
                }));
            }
        }

        for handle in handles {
            let (algorithm, digest) = handle.join().expect("Failed to join worker");
            assert_eq!(digest, hex(algorithm, &message), "{algorithm}");
        }
    });
}

#[test]
fn test_engine_moves_between_threads() {
    let mut sha = Sha::new(Algorithm::Sha256);
    sha.update(b"ab").expect("Failed to update(..)");

    let sha = thread::spawn(move || {
        let mut sha = sha;
        sha.update(b"c").expect("Failed to update(..)");
        sha
    })
    .join()
    .expect("Failed to join worker");

    assert_eq!(finish_hex(sha), hex(Algorithm::Sha256, b"abc"));
}
