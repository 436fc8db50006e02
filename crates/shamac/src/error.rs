// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Operation attempted in the wrong engine phase
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Misuse {
    /// `write`/`update` called after `finish`
    #[error("write after finish")]
    WriteAfterFinish,

    /// `finish` called a second time
    #[error("finish called twice")]
    FinishAfterFinish,

    /// `digest`/`hex`/`base64` called before `finish`
    #[error("digest read before finish")]
    DigestBeforeFinish,

    /// Checkpoint requested for a finished engine
    #[error("checkpoint of a finished engine")]
    DumpAfterFinish,
}

/// What is wrong with a checkpoint field
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointDefect {
    /// Record ended before the field
    #[error("field missing")]
    Missing,

    /// A different field appeared where this one was expected
    #[error("unexpected tag")]
    TagMismatch,

    /// Number of values does not match the algorithm
    #[error("expected {expected} values, found {found}")]
    ValueCount {
        /// Values required by the field
        expected: usize,
        /// Values present in the record
        found: usize,
    },

    /// Value has the wrong number of digits
    #[error("expected {expected} digits, found {found}")]
    Width {
        /// Fixed digit count of the field
        expected: usize,
        /// Digit count present in the record
        found: usize,
    },

    /// Value contains a character outside its radix
    #[error("invalid digit")]
    InvalidDigit,

    /// Value does not fit its field
    #[error("value out of range")]
    OutOfRange,

    /// Length counter disagrees with the buffered bit count
    #[error("length counter disagrees with buffered bit count")]
    Inconsistent,

    /// Non-comment content after the last field
    #[error("trailing content after record")]
    TrailingContent,
}

/// Digest engine error
#[derive(Error, Debug)]
pub enum ShaError {
    /// Algorithm id is unknown or disabled in this build
    #[error("unsupported algorithm id {0}")]
    UnsupportedAlgorithm(u32),

    /// Checkpoint record failed to parse
    #[error("malformed checkpoint field `{field}`: {defect}")]
    MalformedCheckpoint {
        /// Tag of the offending field
        field: &'static str,
        /// Defect found in it
        defect: CheckpointDefect,
    },

    /// Engine used out of phase
    #[error("engine misuse: {0}")]
    MisusedEngine(#[from] Misuse),

    /// `write` asked for more bits than the input holds
    #[error("bit count {bit_count} exceeds the {available} bits supplied")]
    BitCountExceedsInput {
        /// Requested bit count
        bit_count: usize,
        /// Bits available in the input slice
        available: usize,
    },

    /// Checkpoint storage failed
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShaError {
    pub(crate) fn malformed(field: &'static str, defect: CheckpointDefect) -> Self {
        Self::MalformedCheckpoint { field, defect }
    }
}
