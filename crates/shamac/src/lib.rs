// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1/SHA-256/SHA-384/SHA-512 and HMAC with bit-granular streaming input
//! and resumable checkpoints.
//!
//! Implementation per FIPS 180-2 (Secure Hash Standard) and FIPS 198 (HMAC).
//! Engines hold no heap memory; chaining values, buffers and length counters
//! are zeroized on drop.
//!
//! References:
//! - FIPS 180-2: Secure Hash Standard
//!   <https://csrc.nist.gov/publications/detail/fips/180/2/archive/2002-08-01>
//! - FIPS 198: The Keyed-Hash Message Authentication Code (HMAC)
//!   <https://csrc.nist.gov/publications/detail/fips/198/archive/2002-03-06>
//!
//! # Example
//!
//! ```
//! use shamac::{Algorithm, Sha};
//!
//! let mut sha = Sha::new(Algorithm::Sha256);
//! sha.update(b"ab")?;
//!
//! // Suspend, then resume from the checkpoint record
//! let record = sha.dump()?;
//! let mut sha = Sha::load(&record)?;
//!
//! sha.write(b"c", 8)?;
//! sha.finish()?;
//! assert_eq!(
//!     sha.hex()?,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), shamac::ShaError>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod checkpoint;
mod consts;
mod encoding;
mod engine;
mod error;
mod hmac;
mod kernel;
mod oneshot;
mod output;

pub use algorithm::{Algorithm, SHA1_ID, SHA256_ID, SHA384_ID, SHA512_ID};
pub use consts::{MAX_BLOCK_LEN, MAX_DIGEST_LEN};
pub use encoding::{base64_encode, hex_encode};
pub use engine::Sha;
pub use error::{CheckpointDefect, Misuse, ShaError};
pub use hmac::{Hmac, hmac_base64, hmac_digest, hmac_hex};
pub use oneshot::{base64, digest, digest_bits, hex};
pub use output::Digest;
