// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Algorithm, Sha};

/// Algorithm for a vector id, `None` when disabled in this build
pub(crate) fn enabled(id: u32) -> Option<Algorithm> {
    Algorithm::from_id(id).ok()
}

/// Bits `start..start + count` of `data` (MSB first), left-aligned in fresh bytes
pub(crate) fn extract_bits(data: &[u8], start: usize, count: usize) -> Vec<u8> {
    let mut out = vec![0u8; count.div_ceil(8)];
    for i in 0..count {
        let src = start + i;
        let bit = (data[src / 8] >> (7 - src % 8)) & 1;
        out[i / 8] |= bit << (7 - i % 8);
    }
    out
}

/// Feed the first `total_bits` of `data` in pieces of `chunk_bits`
pub(crate) fn write_in_bit_chunks(sha: &mut Sha, data: &[u8], total_bits: usize, chunk_bits: usize) {
    let mut offset = 0;
    while offset < total_bits {
        let count = chunk_bits.min(total_bits - offset);
        let piece = extract_bits(data, offset, count);
        let written = sha
            .write(&piece, count)
            .expect("Failed to write(..)");
        assert_eq!(written, count);
        offset += count;
    }
}

/// Finish `sha` and return its hex digest
pub(crate) fn finish_hex(mut sha: Sha) -> String {
    sha.finish().expect("Failed to finish()");
    sha.hex().expect("Failed to hex()")
}

/// Deterministic message of `len` bytes
pub(crate) fn sample_message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}
