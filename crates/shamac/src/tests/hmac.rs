// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// HMAC known answers and keying rules.
//
// References:
// [1] FIPS 198: The Keyed-Hash Message Authentication Code
// [2] RFC 2202: Test Cases for HMAC-MD5 and HMAC-SHA-1
// [3] RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224/256/384/512

use shamac_vectors::{HMAC_VECTORS, HmacVector, hex_to_bytes};

use super::support::{enabled, sample_message};
use crate::{Algorithm, Hmac, Misuse, ShaError, digest, hmac_base64, hmac_digest, hmac_hex};

fn run_vector(v: &HmacVector) -> Result<(), String> {
    let Some(algorithm) = enabled(v.algorithm_id) else {
        return Ok(());
    };
    let key = v.key.to_vec();
    let data = v.data.to_vec();

    let oneshot = hmac_hex(algorithm, &data, &key);
    if oneshot != v.mac {
        return Err(format!(
            "{} (one-shot)\n  expected: {}\n  got:      {}",
            v.name, v.mac, oneshot
        ));
    }

    let mut mac = Hmac::new(algorithm, &key);
    for chunk in data.chunks(7) {
        mac.update(chunk).expect("Failed to update(..)");
    }
    mac.finish().expect("Failed to finish()");
    let streamed = mac.hex().expect("Failed to hex()");
    if streamed != v.mac {
        return Err(format!(
            "{} (streamed)\n  expected: {}\n  got:      {}",
            v.name, v.mac, streamed
        ));
    }

    let expected = hex_to_bytes(v.mac);
    if !mac.verify(&expected).expect("Failed to verify(..)") {
        return Err(format!("{}: verify rejected the expected tag", v.name));
    }

    Ok(())
}

#[test]
fn test_hmac_vectors_all() {
    let mut failures = Vec::new();

    for v in HMAC_VECTORS {
        if let Err(msg) = run_vector(v) {
            failures.push(msg);
        }
    }

    if !failures.is_empty() {
        panic!(
            "HMAC vector failures ({}/{}):\n{}",
            failures.len(),
            HMAC_VECTORS.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_empty_key_equals_zero_key() {
    for &algorithm in Algorithm::ALL {
        let data = b"message";
        let empty = hmac_digest(algorithm, data, b"");
        let zeros = hmac_digest(algorithm, data, &[0u8; 16]);
        let full_zeros = hmac_digest(algorithm, data, &vec![0u8; algorithm.block_len()]);
        assert_eq!(empty, zeros, "{algorithm}");
        assert_eq!(empty, full_zeros, "{algorithm}");
    }
}

#[test]
fn test_long_key_is_hashed_first() {
    for &algorithm in Algorithm::ALL {
        let data = b"payload";
        let long_key = sample_message(algorithm.block_len() + 1);
        let hashed_key = digest(algorithm, &long_key);

        assert_eq!(
            hmac_digest(algorithm, data, &long_key),
            hmac_digest(algorithm, data, hashed_key.as_bytes()),
            "{algorithm}"
        );
    }
}

#[test]
fn test_block_length_key_is_used_directly() {
    for &algorithm in Algorithm::ALL {
        let data = b"payload";
        let key = sample_message(algorithm.block_len());
        let hashed_key = digest(algorithm, &key);

        assert_ne!(
            hmac_digest(algorithm, data, &key),
            hmac_digest(algorithm, data, hashed_key.as_bytes()),
            "{algorithm}"
        );
    }
}

#[test]
fn test_bit_writes_match_byte_writes() {
    for &algorithm in Algorithm::ALL {
        let data = sample_message(40);

        let mut mac = Hmac::new(algorithm, b"key");
        mac.write(&data[..3], 20).expect("Failed to write(..)");
        let rest = super::support::extract_bits(&data, 20, data.len() * 8 - 20);
        mac.write(&rest, data.len() * 8 - 20).expect("Failed to write(..)");
        mac.finish().expect("Failed to finish()");

        assert_eq!(
            mac.digest().expect("Failed to digest()"),
            hmac_digest(algorithm, &data, b"key"),
            "{algorithm}"
        );
    }
}

#[test]
fn test_verify_rejects_wrong_tags() {
    let mut mac = Hmac::new(Algorithm::Sha256, b"key");
    mac.update(b"The quick brown fox jumps over the lazy dog")
        .expect("Failed to update(..)");
    mac.finish().expect("Failed to finish()");

    let mut tag = mac.digest().expect("Failed to digest()").to_vec();
    assert!(mac.verify(&tag).expect("Failed to verify(..)"));

    tag[31] ^= 0x01;
    assert!(!mac.verify(&tag).expect("Failed to verify(..)"));

    tag[31] ^= 0x01;
    assert!(!mac.verify(&tag[..16]).expect("Failed to verify(..)"));
    assert!(!mac.verify(&[]).expect("Failed to verify(..)"));
}

#[test]
fn test_phase_rules() {
    let mut mac = Hmac::new(Algorithm::Sha1, b"key");
    assert!(!mac.is_finished());
    assert_eq!(mac.algorithm(), Algorithm::Sha1);
    assert_eq!(mac.digest_len(), 20);

    assert!(matches!(
        mac.digest(),
        Err(ShaError::MisusedEngine(Misuse::DigestBeforeFinish))
    ));
    assert!(matches!(
        mac.verify(&[0u8; 20]),
        Err(ShaError::MisusedEngine(Misuse::DigestBeforeFinish))
    ));

    mac.update(b"abc").expect("Failed to update(..)");
    mac.finish().expect("Failed to finish()");
    assert!(mac.is_finished());
    let first = mac.hex().expect("Failed to hex()");

    assert!(matches!(
        mac.update(b"more"),
        Err(ShaError::MisusedEngine(Misuse::WriteAfterFinish))
    ));
    assert!(matches!(
        mac.write(b"more", 8),
        Err(ShaError::MisusedEngine(Misuse::WriteAfterFinish))
    ));
    assert!(matches!(
        mac.finish(),
        Err(ShaError::MisusedEngine(Misuse::FinishAfterFinish))
    ));
    assert_eq!(mac.hex().expect("Failed to hex()"), first);
}

#[test]
fn test_renderings_agree() {
    for &algorithm in Algorithm::ALL {
        let tag = hmac_digest(algorithm, b"data", b"key");
        assert_eq!(hmac_hex(algorithm, b"data", b"key"), tag.to_hex());
        assert_eq!(hmac_base64(algorithm, b"data", b"key"), tag.to_base64());

        let mut mac = Hmac::new(algorithm, b"key");
        mac.update(b"data").expect("Failed to update(..)");
        mac.finish().expect("Failed to finish()");
        assert_eq!(mac.base64().expect("Failed to base64()"), tag.to_base64());
    }
}

#[test]
fn test_clone_shares_key_schedule() {
    let keyed = Hmac::new(Algorithm::Sha256, b"shared key");

    let mut left = keyed.clone();
    let mut right = keyed;
    left.update(b"same").expect("Failed to update(..)");
    right.update(b"same").expect("Failed to update(..)");
    left.finish().expect("Failed to finish()");
    right.finish().expect("Failed to finish()");

    assert_eq!(
        left.digest().expect("Failed to digest()"),
        right.digest().expect("Failed to digest()")
    );
}
