// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming digest engine with bit-granular input

use alloc::string::String;
use core::fmt;

use zeroize::Zeroize;

use crate::algorithm::Algorithm;
use crate::consts::MAX_BLOCK_LEN;
use crate::error::{Misuse, ShaError};
use crate::kernel::ChainState;
use crate::output::Digest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Finished,
}

/// Streaming SHA context.
///
/// Accepts input as an arbitrary bit string split over any number of
/// [`write`](Self::write) calls. After [`finish`](Self::finish) the engine is
/// read-only until [`reset`](Self::reset); operations in the wrong phase return
/// [`ShaError::MisusedEngine`] instead of producing a wrong digest.
///
/// Buffers, chaining value and length counter are zeroized on drop.
#[derive(Clone)]
pub struct Sha {
    algorithm: Algorithm,
    state: ChainState,
    // Bytes past `block_bits` are always zero
    block: [u8; MAX_BLOCK_LEN],
    block_bits: usize,
    total_bits: u128,
    phase: Phase,
}

impl Sha {
    /// Open an engine at H(0)
    pub fn new(algorithm: Algorithm) -> Self {
        log::trace!("opening {algorithm} engine");
        Self {
            algorithm,
            state: ChainState::initial(algorithm),
            block: [0u8; MAX_BLOCK_LEN],
            block_bits: 0,
            total_bits: 0,
            phase: Phase::Open,
        }
    }

    /// Open an engine from a numeric algorithm id (1 = SHA-1 … 4 = SHA-512)
    ///
    /// # Errors
    /// `UnsupportedAlgorithm` for unknown or disabled ids.
    pub fn from_id(id: u32) -> Result<Self, ShaError> {
        Algorithm::from_id(id).map(Self::new)
    }

    /// Rebuild an open engine from checkpointed parts
    pub(crate) fn restore(
        algorithm: Algorithm,
        state: ChainState,
        block: &[u8; MAX_BLOCK_LEN],
        block_bits: usize,
        total_bits: u128,
    ) -> Self {
        debug_assert!(block_bits < algorithm.block_bits());
        Self {
            algorithm,
            state,
            block: *block,
            block_bits,
            total_bits,
            phase: Phase::Open,
        }
    }

    /// Algorithm this engine computes
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Digest size in bytes
    pub fn digest_len(&self) -> usize {
        self.algorithm.digest_len()
    }

    /// Block size in bytes
    pub fn block_len(&self) -> usize {
        self.algorithm.block_len()
    }

    /// Total bits written so far, modulo 2^128
    pub fn bit_len(&self) -> u128 {
        self.total_bits
    }

    /// Whether `finish` has run
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub(crate) fn state(&self) -> &ChainState {
        &self.state
    }

    /// Buffered bytes, sized to the algorithm's block
    pub(crate) fn block(&self) -> &[u8] {
        &self.block[..self.block_len()]
    }

    pub(crate) fn block_bits(&self) -> usize {
        self.block_bits
    }

    /// Rewind to H(0), keeping the algorithm. Valid in any phase.
    pub fn reset(&mut self) {
        log::trace!("resetting {} engine", self.algorithm);
        self.state = ChainState::initial(self.algorithm);
        self.block.zeroize();
        self.block_bits = 0;
        self.total_bits = 0;
        self.phase = Phase::Open;
    }

    /// Append the first `bit_count` bits of `data`.
    ///
    /// When `bit_count` is not a multiple of 8, only the high-order
    /// `bit_count % 8` bits of the last byte are used. Returns `bit_count`.
    ///
    /// # Errors
    /// - `MisusedEngine(WriteAfterFinish)` once finished
    /// - `BitCountExceedsInput` when `bit_count > data.len() * 8`
    pub fn write(&mut self, data: &[u8], bit_count: usize) -> Result<usize, ShaError> {
        self.ensure_open(Misuse::WriteAfterFinish)?;

        let available = data.len().saturating_mul(8);
        if bit_count > available {
            return Err(ShaError::BitCountExceedsInput {
                bit_count,
                available,
            });
        }

        self.absorb(data, bit_count);
        Ok(bit_count)
    }

    /// Append whole bytes
    ///
    /// # Errors
    /// `MisusedEngine(WriteAfterFinish)` once finished.
    pub fn update(&mut self, data: &[u8]) -> Result<(), ShaError> {
        self.ensure_open(Misuse::WriteAfterFinish)?;
        self.absorb_bytes(data);
        Ok(())
    }

    /// Pad per FIPS 180-2 Section 5.1 and run the final transform
    ///
    /// # Errors
    /// `MisusedEngine(FinishAfterFinish)` on a second call; the digest is left intact.
    pub fn finish(&mut self) -> Result<(), ShaError> {
        self.ensure_open(Misuse::FinishAfterFinish)?;
        self.pad();
        self.phase = Phase::Finished;
        Ok(())
    }

    /// Digest bytes, big-endian words truncated to `digest_len`
    ///
    /// # Errors
    /// `MisusedEngine(DigestBeforeFinish)` before `finish`.
    pub fn digest(&self) -> Result<Digest, ShaError> {
        if self.phase == Phase::Open {
            log::warn!("{} engine misuse: {}", self.algorithm, Misuse::DigestBeforeFinish);
            return Err(Misuse::DigestBeforeFinish.into());
        }
        Ok(Digest::from_state(&self.state, self.digest_len()))
    }

    /// Lowercase hex digest
    ///
    /// # Errors
    /// `MisusedEngine(DigestBeforeFinish)` before `finish`.
    pub fn hex(&self) -> Result<String, ShaError> {
        self.digest().map(|d| d.to_hex())
    }

    /// Unpadded base64 digest
    ///
    /// # Errors
    /// `MisusedEngine(DigestBeforeFinish)` before `finish`.
    pub fn base64(&self) -> Result<String, ShaError> {
        self.digest().map(|d| d.to_base64())
    }

    /// Pad, transform and return the digest, consuming an open engine
    pub(crate) fn finalize(mut self) -> Digest {
        debug_assert_eq!(self.phase, Phase::Open);
        self.pad();
        Digest::from_state(&self.state, self.digest_len())
    }

    pub(crate) fn ensure_open(&self, misuse: Misuse) -> Result<(), ShaError> {
        match self.phase {
            Phase::Open => Ok(()),
            Phase::Finished => {
                log::warn!("{} engine misuse: {misuse}", self.algorithm);
                Err(misuse.into())
            }
        }
    }

    /// Append whole bytes to an open engine
    pub(crate) fn absorb_bytes(&mut self, data: &[u8]) {
        self.absorb(data, data.len() * 8);
    }

    /// Append the first `bit_count` bits of `data` (caller checked phase and bounds)
    fn absorb(&mut self, data: &[u8], bit_count: usize) {
        if bit_count == 0 {
            return;
        }
        self.total_bits = self.total_bits.wrapping_add(bit_count as u128);

        let whole = bit_count / 8;
        let tail = bit_count % 8;

        if self.block_bits % 8 == 0 {
            self.absorb_aligned(&data[..whole]);
        } else {
            for &byte in &data[..whole] {
                self.absorb_bits(byte, 8);
            }
        }

        if tail > 0 {
            self.absorb_bits(data[whole] & (0xffu8 << (8 - tail)), tail);
        }
    }

    /// Byte-aligned path: fill the pending block, compress whole blocks
    /// straight from `data`, buffer the remainder
    fn absorb_aligned(&mut self, mut data: &[u8]) {
        let block_len = self.block_len();

        if self.block_bits > 0 {
            let offset = self.block_bits / 8;
            let take = core::cmp::min(block_len - offset, data.len());

            self.block[offset..offset + take].copy_from_slice(&data[..take]);
            self.block_bits += take * 8;
            data = &data[take..];

            if self.block_bits < block_len * 8 {
                return;
            }
            self.flush_block();
        }

        let mut blocks = data.chunks_exact(block_len);
        for block in &mut blocks {
            self.state.compress(block);
        }

        let rest = blocks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.block_bits = rest.len() * 8;
    }

    /// Append the high `count` bits of `byte` (low bits must be clear), 1 <= count <= 8
    fn absorb_bits(&mut self, byte: u8, count: usize) {
        debug_assert!((1..=8).contains(&count));

        let used = self.block_bits % 8;
        let room = 8 - used;
        let index = self.block_bits / 8;

        if used == 0 {
            self.block[index] = byte;
        } else {
            self.block[index] |= byte >> used;
        }

        if count < room {
            self.block_bits += count;
            return;
        }

        self.block_bits += room;
        if self.block_bits == self.algorithm.block_bits() {
            self.flush_block();
        }

        let spill = count - room;
        if spill > 0 {
            self.block[self.block_bits / 8] = byte << room;
            self.block_bits += spill;
        }
    }

    /// Compress the full buffer and clear it
    fn flush_block(&mut self) {
        let block_len = self.block_len();
        self.state.compress(&self.block[..block_len]);
        self.block.zeroize();
        self.block_bits = 0;
    }

    /// Append the `1` bit, zero fill and the big-endian bit length, then transform
    fn pad(&mut self) {
        let block_len = self.block_len();
        let length_offset = block_len - self.algorithm.length_field_len();

        self.absorb_bits(0x80, 1);

        // Bytes past the valid bits are already zero
        if self.block_bits > length_offset * 8 {
            self.flush_block();
        }

        let length = self.total_bits.to_be_bytes();
        self.block[length_offset..block_len]
            .copy_from_slice(&length[length.len() - (block_len - length_offset)..]);
        self.flush_block();
    }
}

impl fmt::Debug for Sha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha")
            .field("algorithm", &self.algorithm)
            .field("state", &"REDACTED")
            .field("block", &"REDACTED")
            .field("bit_len", &self.total_bits)
            .field("finished", &self.is_finished())
            .finish()
    }
}

impl Drop for Sha {
    fn drop(&mut self) {
        self.block.zeroize();
        self.block_bits.zeroize();
        self.total_bits.zeroize();
    }
}
