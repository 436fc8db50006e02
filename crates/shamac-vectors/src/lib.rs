// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer vectors for SHA-1/SHA-256/SHA-384/SHA-512 and HMAC.
//!
//! Sources:
//! - FIPS 180-2 Appendices A-D (digests)
//! - RFC 2202 Section 3 (HMAC-SHA-1)
//! - RFC 4231 Section 4 (HMAC-SHA-256/384/512)
//!
//! Algorithms are identified by their numeric checkpoint id so that this crate
//! carries no dependency on the implementation under test.

mod decode;
mod digest;
mod hmac;

pub use decode::{base64_to_bytes, hex_to_bytes};
pub use digest::{DIGEST_VECTORS, DigestVector};
pub use hmac::{HMAC_VECTORS, HmacVector};

/// Message source: literal bytes or a single byte repeated
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Literal bytes
    Bytes(&'static [u8]),
    /// `byte` repeated `count` times
    Repeat {
        /// Repeated value
        byte: u8,
        /// Number of repetitions
        count: usize,
    },
}

impl Message {
    /// Materialize the message
    pub fn to_vec(&self) -> Vec<u8> {
        match *self {
            Message::Bytes(bytes) => bytes.to_vec(),
            Message::Repeat { byte, count } => vec![byte; count],
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        match *self {
            Message::Bytes(bytes) => bytes.len(),
            Message::Repeat { count, .. } => count,
        }
    }

    /// Whether the message is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
