// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::MAX_DIGEST_LEN;
use crate::encoding::{base64_encode, hex_encode};
use crate::kernel::ChainState;

/// Finished digest or authentication code.
///
/// Holds up to 64 bytes inline; only the first [`len`](Self::len) are meaningful.
/// Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_LEN],
    len: usize,
}

impl Digest {
    /// Serialize the chaining value, truncated to `len` bytes
    pub(crate) fn from_state(state: &ChainState, len: usize) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        state.write_be(&mut bytes[..len]);
        Self { bytes, len }
    }

    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Digest size in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for digests produced by an engine
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Owned copy of the bytes
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex_encode(self.as_bytes())
    }

    /// Unpadded standard base64 rendering
    pub fn to_base64(&self) -> String {
        base64_encode(self.as_bytes())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}
