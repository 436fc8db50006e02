// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-call digests over a complete message

use alloc::string::String;

use crate::algorithm::Algorithm;
use crate::engine::Sha;
use crate::error::ShaError;
use crate::output::Digest;

/// Digest of `data`
pub fn digest(algorithm: Algorithm, data: &[u8]) -> Digest {
    let mut sha = Sha::new(algorithm);
    sha.absorb_bytes(data);
    sha.finalize()
}

/// Lowercase hex digest of `data`
pub fn hex(algorithm: Algorithm, data: &[u8]) -> String {
    digest(algorithm, data).to_hex()
}

/// Unpadded base64 digest of `data`
pub fn base64(algorithm: Algorithm, data: &[u8]) -> String {
    digest(algorithm, data).to_base64()
}

/// Digest of the first `bit_count` bits of `data`
///
/// # Errors
/// `BitCountExceedsInput` when `bit_count > data.len() * 8`.
pub fn digest_bits(algorithm: Algorithm, data: &[u8], bit_count: usize) -> Result<Digest, ShaError> {
    let mut sha = Sha::new(algorithm);
    sha.write(data, bit_count)?;
    Ok(sha.finalize())
}
