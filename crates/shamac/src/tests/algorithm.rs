// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Algorithm, SHA1_ID, SHA256_ID, ShaError};

#[test]
fn test_from_id_roundtrip() {
    for &algorithm in Algorithm::ALL {
        let resolved = Algorithm::from_id(algorithm.id()).expect("Failed to from_id(..)");
        assert_eq!(resolved, algorithm);
        assert_eq!(Algorithm::try_from(algorithm.id()).expect("Failed to try_from(..)"), algorithm);
    }
}

#[test]
fn test_from_id_unknown() {
    for id in [0, 5, 256, u32::MAX] {
        match Algorithm::from_id(id) {
            Err(ShaError::UnsupportedAlgorithm(found)) => assert_eq!(found, id),
            other => panic!("expected UnsupportedAlgorithm for {id}, got {other:?}"),
        }
    }
}

#[cfg(not(feature = "sha512"))]
#[test]
fn test_from_id_disabled_sha512() {
    assert!(matches!(
        Algorithm::from_id(crate::SHA384_ID),
        Err(ShaError::UnsupportedAlgorithm(3))
    ));
    assert!(matches!(
        Algorithm::from_id(crate::SHA512_ID),
        Err(ShaError::UnsupportedAlgorithm(4))
    ));
}

#[test]
fn test_parameters_32_bit() {
    let sha1 = Algorithm::from_id(SHA1_ID).expect("Failed to from_id(..)");
    assert_eq!(sha1.block_len(), 64);
    assert_eq!(sha1.block_bits(), 512);
    assert_eq!(sha1.digest_len(), 20);
    assert_eq!(sha1.word_bits(), 32);
    assert_eq!(sha1.state_words(), 5);

    let sha256 = Algorithm::from_id(SHA256_ID).expect("Failed to from_id(..)");
    assert_eq!(sha256.block_len(), 64);
    assert_eq!(sha256.digest_len(), 32);
    assert_eq!(sha256.word_bits(), 32);
    assert_eq!(sha256.state_words(), 8);
}

#[cfg(feature = "sha512")]
#[test]
fn test_parameters_64_bit() {
    assert_eq!(Algorithm::Sha384.block_len(), 128);
    assert_eq!(Algorithm::Sha384.block_bits(), 1024);
    assert_eq!(Algorithm::Sha384.digest_len(), 48);
    assert_eq!(Algorithm::Sha384.word_bits(), 64);
    assert_eq!(Algorithm::Sha384.state_words(), 8);

    assert_eq!(Algorithm::Sha512.block_len(), 128);
    assert_eq!(Algorithm::Sha512.digest_len(), 64);
    assert_eq!(Algorithm::Sha512.length_field_len(), 16);
}

#[test]
fn test_display_names() {
    assert_eq!(Algorithm::Sha1.to_string(), "SHA-1");
    assert_eq!(Algorithm::Sha256.to_string(), "SHA-256");
    #[cfg(feature = "sha512")]
    {
        assert_eq!(Algorithm::Sha384.to_string(), "SHA-384");
        assert_eq!(Algorithm::Sha512.to_string(), "SHA-512");
    }
}
