// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Algorithm tags and their fixed parameters

use core::fmt;

use crate::error::ShaError;

/// Checkpoint id of SHA-1
pub const SHA1_ID: u32 = 1;

/// Checkpoint id of SHA-256
pub const SHA256_ID: u32 = 2;

/// Checkpoint id of SHA-384 (requires the `sha512` feature)
pub const SHA384_ID: u32 = 3;

/// Checkpoint id of SHA-512 (requires the `sha512` feature)
pub const SHA512_ID: u32 = 4;

/// FIPS 180-2 hash algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-1: 32-bit words, 160-bit digest
    Sha1,
    /// SHA-256: 32-bit words, 256-bit digest
    Sha256,
    /// SHA-384: 64-bit words, 384-bit digest
    #[cfg(feature = "sha512")]
    Sha384,
    /// SHA-512: 64-bit words, 512-bit digest
    #[cfg(feature = "sha512")]
    Sha512,
}

impl Algorithm {
    /// Every algorithm enabled in this build
    #[cfg(feature = "sha512")]
    pub const ALL: &'static [Algorithm] = &[
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Every algorithm enabled in this build
    #[cfg(not(feature = "sha512"))]
    pub const ALL: &'static [Algorithm] = &[Algorithm::Sha1, Algorithm::Sha256];

    /// Numeric id used by checkpoint records
    pub const fn id(self) -> u32 {
        match self {
            Self::Sha1 => SHA1_ID,
            Self::Sha256 => SHA256_ID,
            #[cfg(feature = "sha512")]
            Self::Sha384 => SHA384_ID,
            #[cfg(feature = "sha512")]
            Self::Sha512 => SHA512_ID,
        }
    }

    /// Resolve a checkpoint id
    ///
    /// # Errors
    /// `UnsupportedAlgorithm` for unknown ids, and for 3/4 when built without `sha512`.
    pub fn from_id(id: u32) -> Result<Self, ShaError> {
        match id {
            SHA1_ID => Ok(Self::Sha1),
            SHA256_ID => Ok(Self::Sha256),
            #[cfg(feature = "sha512")]
            SHA384_ID => Ok(Self::Sha384),
            #[cfg(feature = "sha512")]
            SHA512_ID => Ok(Self::Sha512),
            _ => Err(ShaError::UnsupportedAlgorithm(id)),
        }
    }

    /// Block size in bytes (64 or 128)
    pub const fn block_len(self) -> usize {
        match self {
            Self::Sha1 | Self::Sha256 => 64,
            #[cfg(feature = "sha512")]
            Self::Sha384 | Self::Sha512 => 128,
        }
    }

    /// Block size in bits
    pub const fn block_bits(self) -> usize {
        self.block_len() * 8
    }

    /// Digest size in bytes
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            #[cfg(feature = "sha512")]
            Self::Sha384 => 48,
            #[cfg(feature = "sha512")]
            Self::Sha512 => 64,
        }
    }

    /// Word width in bits (32 or 64)
    pub const fn word_bits(self) -> u32 {
        match self {
            Self::Sha1 | Self::Sha256 => 32,
            #[cfg(feature = "sha512")]
            Self::Sha384 | Self::Sha512 => 64,
        }
    }

    /// Number of chaining words (5 for SHA-1, 8 otherwise)
    pub const fn state_words(self) -> usize {
        match self {
            Self::Sha1 => 5,
            _ => 8,
        }
    }

    /// FIPS name, e.g. `SHA-256`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            #[cfg(feature = "sha512")]
            Self::Sha384 => "SHA-384",
            #[cfg(feature = "sha512")]
            Self::Sha512 => "SHA-512",
        }
    }

    /// Size of the trailing message-length field written by padding (8 or 16 bytes)
    pub(crate) const fn length_field_len(self) -> usize {
        self.block_len() / 8
    }
}

impl TryFrom<u32> for Algorithm {
    type Error = ShaError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
