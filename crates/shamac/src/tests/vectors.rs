// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Known-answer digests.
//
// References:
// [1] FIPS 180-2: Secure Hash Standard, Appendices A-D

use shamac_vectors::{DIGEST_VECTORS, DigestVector, hex_to_bytes};

use super::support::{enabled, finish_hex};
use crate::{Sha, digest, hex};

fn run_vector(v: &DigestVector) -> Result<(), String> {
    let Some(algorithm) = enabled(v.algorithm_id) else {
        return Ok(());
    };
    let message = v.message.to_vec();

    let oneshot = hex(algorithm, &message);
    if oneshot != v.digest {
        return Err(format!(
            "{} (one-shot)\n  expected: {}\n  got:      {}",
            v.name, v.digest, oneshot
        ));
    }

    let mut sha = Sha::new(algorithm);
    for chunk in message.chunks(997) {
        sha.update(chunk).expect("Failed to update(..)");
    }
    let streamed = finish_hex(sha);
    if streamed != v.digest {
        return Err(format!(
            "{} (streamed)\n  expected: {}\n  got:      {}",
            v.name, v.digest, streamed
        ));
    }

    let bytes = digest(algorithm, &message);
    if bytes.len() != algorithm.digest_len() || bytes.to_vec() != hex_to_bytes(v.digest) {
        return Err(format!("{}: digest bytes mismatch", v.name));
    }

    Ok(())
}

#[test]
fn test_digest_vectors_all() {
    let mut failures = Vec::new();

    for v in DIGEST_VECTORS {
        if let Err(msg) = run_vector(v) {
            failures.push(msg);
        }
    }

    if !failures.is_empty() {
        panic!(
            "digest vector failures ({}/{}):\n{}",
            failures.len(),
            DIGEST_VECTORS.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_digest_vectors_bitwise_equivalence() {
    // Whole-byte messages written as bit strings hash identically
    for v in DIGEST_VECTORS.iter().filter(|v| v.message.len() < 1024) {
        let Some(algorithm) = enabled(v.algorithm_id) else {
            continue;
        };
        let message = v.message.to_vec();

        let mut sha = Sha::new(algorithm);
        let written = sha
            .write(&message, message.len() * 8)
            .expect("Failed to write(..)");
        assert_eq!(written, message.len() * 8);
        assert_eq!(finish_hex(sha), v.digest, "{}", v.name);
    }
}

#[test]
fn test_digest_hex_is_lowercase_and_sized() {
    for v in DIGEST_VECTORS.iter().filter(|v| v.message.is_empty()) {
        let Some(algorithm) = enabled(v.algorithm_id) else {
            continue;
        };
        let rendered = hex(algorithm, b"");
        assert_eq!(rendered.len(), algorithm.digest_len() * 2);
        assert!(rendered.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }
}
