// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC (FIPS 198) over any supported algorithm.
//!
//! ```text
//! K'   = H(K) if |K| > B, else K, zero padded to B bytes
//! HMAC = H((K' ^ opad) || H((K' ^ ipad) || text))
//! ```

use alloc::string::String;
use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::algorithm::Algorithm;
use crate::consts::MAX_BLOCK_LEN;
use crate::engine::Sha;
use crate::error::ShaError;
use crate::output::Digest;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC context: an inner engine fed the message and an outer
/// engine holding the keyed outer pad.
///
/// Same phase rules as [`Sha`]. The key is never retained; only the two
/// keyed engine states are, and both are zeroized on drop.
#[derive(Clone)]
pub struct Hmac {
    inner: Sha,
    outer: Sha,
}

impl Hmac {
    /// Key an HMAC context. Keys of any length (including empty) are accepted.
    pub fn new(algorithm: Algorithm, key: &[u8]) -> Self {
        let block_len = algorithm.block_len();
        let mut pad = Zeroizing::new([0u8; MAX_BLOCK_LEN]);

        if key.len() > block_len {
            log::debug!("hashing {}-byte HMAC key with {algorithm}", key.len());
            let mut sha = Sha::new(algorithm);
            sha.absorb_bytes(key);
            let hashed = sha.finalize();
            pad[..hashed.len()].copy_from_slice(hashed.as_bytes());
        } else {
            pad[..key.len()].copy_from_slice(key);
        }

        let pad = &mut pad[..block_len];

        pad.iter_mut().for_each(|b| *b ^= OPAD);
        let mut outer = Sha::new(algorithm);
        outer.absorb_bytes(pad);

        pad.iter_mut().for_each(|b| *b ^= OPAD ^ IPAD);
        let mut inner = Sha::new(algorithm);
        inner.absorb_bytes(pad);

        Self { inner, outer }
    }

    /// Algorithm underlying this MAC
    pub fn algorithm(&self) -> Algorithm {
        self.inner.algorithm()
    }

    /// MAC size in bytes
    pub fn digest_len(&self) -> usize {
        self.inner.digest_len()
    }

    /// Whether `finish` has run
    pub fn is_finished(&self) -> bool {
        self.outer.is_finished()
    }

    /// Append the first `bit_count` bits of `data` to the message
    ///
    /// # Errors
    /// As [`Sha::write`].
    pub fn write(&mut self, data: &[u8], bit_count: usize) -> Result<usize, ShaError> {
        self.inner.write(data, bit_count)
    }

    /// Append whole bytes to the message
    ///
    /// # Errors
    /// `MisusedEngine(WriteAfterFinish)` once finished.
    pub fn update(&mut self, data: &[u8]) -> Result<(), ShaError> {
        self.inner.update(data)
    }

    /// Close the inner hash and feed it through the outer one
    ///
    /// # Errors
    /// `MisusedEngine(FinishAfterFinish)` on a second call.
    pub fn finish(&mut self) -> Result<(), ShaError> {
        self.inner.finish()?;
        let inner = self.inner.digest()?;
        self.outer.update(inner.as_bytes())?;
        self.outer.finish()
    }

    /// MAC bytes
    ///
    /// # Errors
    /// `MisusedEngine(DigestBeforeFinish)` before `finish`.
    pub fn digest(&self) -> Result<Digest, ShaError> {
        self.outer.digest()
    }

    /// Lowercase hex MAC
    ///
    /// # Errors
    /// `MisusedEngine(DigestBeforeFinish)` before `finish`.
    pub fn hex(&self) -> Result<String, ShaError> {
        self.outer.hex()
    }

    /// Unpadded base64 MAC
    ///
    /// # Errors
    /// `MisusedEngine(DigestBeforeFinish)` before `finish`.
    pub fn base64(&self) -> Result<String, ShaError> {
        self.outer.base64()
    }

    /// Compare the MAC with `tag` in constant time.
    ///
    /// A tag of the wrong length never matches.
    ///
    /// # Errors
    /// `MisusedEngine(DigestBeforeFinish)` before `finish`.
    pub fn verify(&self, tag: &[u8]) -> Result<bool, ShaError> {
        let mac = self.digest()?;
        Ok(bool::from(mac.as_bytes().ct_eq(tag)))
    }

    /// Finish and return the MAC, consuming an open context
    fn finalize(self) -> Digest {
        let Self { inner, mut outer } = self;
        outer.absorb_bytes(inner.finalize().as_bytes());
        outer.finalize()
    }
}

impl fmt::Debug for Hmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("algorithm", &self.algorithm())
            .field("key", &"REDACTED")
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// HMAC of `data` under `key`
pub fn hmac_digest(algorithm: Algorithm, data: &[u8], key: &[u8]) -> Digest {
    let mut mac = Hmac::new(algorithm, key);
    mac.inner.absorb_bytes(data);
    mac.finalize()
}

/// Lowercase hex HMAC of `data` under `key`
pub fn hmac_hex(algorithm: Algorithm, data: &[u8], key: &[u8]) -> String {
    hmac_digest(algorithm, data, key).to_hex()
}

/// Unpadded base64 HMAC of `data` under `key`
pub fn hmac_base64(algorithm: Algorithm, data: &[u8], key: &[u8]) -> String {
    hmac_digest(algorithm, data, key).to_base64()
}
