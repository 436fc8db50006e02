// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word-transform kernel: per-block compression for every algorithm.
//!
//! The chaining value is a closed enum over word widths; each call matches
//! on it and runs the corresponding pure compression function.

pub(crate) mod sha1;
pub(crate) mod sha256;
#[cfg(feature = "sha512")]
pub(crate) mod sha512;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithm::Algorithm;
use crate::consts::{H0_SHA1, H0_SHA256};
#[cfg(feature = "sha512")]
use crate::consts::{H0_SHA384, H0_SHA512};

/// Chaining value H(i) of one hash computation
#[derive(Clone, PartialEq, Eq)]
pub(crate) enum ChainState {
    /// SHA-1: five 32-bit words
    Sha1([u32; 5]),
    /// SHA-256: eight 32-bit words
    Sha256([u32; 8]),
    /// SHA-384 and SHA-512: eight 64-bit words
    #[cfg(feature = "sha512")]
    Sha512([u64; 8]),
}

impl ChainState {
    /// H(0) for `algorithm`
    pub(crate) const fn initial(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha1 => Self::Sha1(H0_SHA1),
            Algorithm::Sha256 => Self::Sha256(H0_SHA256),
            #[cfg(feature = "sha512")]
            Algorithm::Sha384 => Self::Sha512(H0_SHA384),
            #[cfg(feature = "sha512")]
            Algorithm::Sha512 => Self::Sha512(H0_SHA512),
        }
    }

    /// Run the compression function over one full block
    #[inline]
    pub(crate) fn compress(&mut self, block: &[u8]) {
        match self {
            Self::Sha1(h) => sha1::compress(h, block),
            Self::Sha256(h) => sha256::compress(h, block),
            #[cfg(feature = "sha512")]
            Self::Sha512(h) => sha512::compress(h, block),
        }
    }

    /// Serialize words big-endian into `out`, stopping when `out` is full
    pub(crate) fn write_be(&self, out: &mut [u8]) {
        match self {
            Self::Sha1(h) => write_be_words(h.iter().map(|w| w.to_be_bytes()), out),
            Self::Sha256(h) => write_be_words(h.iter().map(|w| w.to_be_bytes()), out),
            #[cfg(feature = "sha512")]
            Self::Sha512(h) => write_be_words(h.iter().map(|w| w.to_be_bytes()), out),
        }
    }
}

impl Zeroize for ChainState {
    fn zeroize(&mut self) {
        match self {
            Self::Sha1(h) => h.zeroize(),
            Self::Sha256(h) => h.zeroize(),
            #[cfg(feature = "sha512")]
            Self::Sha512(h) => h.zeroize(),
        }
    }
}

impl Drop for ChainState {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for ChainState {}

/// Decode big-endian 32-bit words from `bytes` into `out`
#[inline(always)]
pub(crate) fn read_be_u32(bytes: &[u8], out: &mut [u32]) {
    for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

fn write_be_words<const N: usize>(words: impl Iterator<Item = [u8; N]>, out: &mut [u8]) {
    for (chunk, bytes) in out.chunks_mut(N).zip(words) {
        let len = chunk.len();
        chunk.copy_from_slice(&bytes[..len]);
    }
}
