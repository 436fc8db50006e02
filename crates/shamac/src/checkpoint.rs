// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Checkpoint records: line-oriented snapshots of an open engine.
//!
//! ```text
//! alg:2
//! H:6a09e667:bb67ae85:...
//! block:61:62:63:00:...
//! blockcnt:24
//! lenhh:0
//! lenhl:0
//! lenlh:0
//! lenll:24
//! ```
//!
//! Fields appear in this fixed order. On read, lines starting with `#` and
//! blank lines are skipped; anything else out of place rejects the record.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::{Lines, Split};

use zeroize::Zeroizing;

use crate::algorithm::Algorithm;
use crate::consts::MAX_BLOCK_LEN;
use crate::engine::Sha;
use crate::error::{CheckpointDefect, Misuse, ShaError};
use crate::kernel::ChainState;

const ALG: &str = "alg";
const H: &str = "H";
const BLOCK: &str = "block";
const BLOCKCNT: &str = "blockcnt";
const LEN_TAGS: [&str; 4] = ["lenhh", "lenhl", "lenlh", "lenll"];

impl Sha {
    /// Render a checkpoint record of this engine
    ///
    /// # Errors
    /// `MisusedEngine(DumpAfterFinish)` once finished.
    pub fn dump(&self) -> Result<String, ShaError> {
        self.ensure_open(Misuse::DumpAfterFinish)?;
        log::debug!(
            "dumping {} checkpoint ({} buffered bits)",
            self.algorithm(),
            self.block_bits()
        );
        Ok(Record(self).to_string())
    }

    /// Rebuild an open engine from a checkpoint record
    ///
    /// # Errors
    /// - `MalformedCheckpoint` naming the first offending field
    /// - `UnsupportedAlgorithm` for an unknown or disabled `alg`
    pub fn load(record: &str) -> Result<Self, ShaError> {
        let mut fields = Fields::new(record);

        let id = decimal(ALG, single(ALG, fields.next(ALG)?)?)?;
        let algorithm = Algorithm::from_id(id)?;

        let values = fields.next(H)?;
        let state = match ChainState::initial(algorithm) {
            ChainState::Sha1(_) => {
                let mut h = Zeroizing::new([0u32; 5]);
                parse_values(H, values, &mut h[..], hex_u32)?;
                ChainState::Sha1(*h)
            }
            ChainState::Sha256(_) => {
                let mut h = Zeroizing::new([0u32; 8]);
                parse_values(H, values, &mut h[..], hex_u32)?;
                ChainState::Sha256(*h)
            }
            #[cfg(feature = "sha512")]
            ChainState::Sha512(_) => {
                let mut h = Zeroizing::new([0u64; 8]);
                parse_values(H, values, &mut h[..], hex_u64)?;
                ChainState::Sha512(*h)
            }
        };

        let block_len = algorithm.block_len();
        let mut block = Zeroizing::new([0u8; MAX_BLOCK_LEN]);
        parse_values(BLOCK, fields.next(BLOCK)?, &mut block[..block_len], hex_u8)?;

        let block_bits = decimal(BLOCKCNT, single(BLOCKCNT, fields.next(BLOCKCNT)?)?)? as usize;
        if block_bits >= algorithm.block_bits() {
            return Err(ShaError::malformed(BLOCKCNT, CheckpointDefect::OutOfRange));
        }

        let mut total_bits = 0u128;
        for tag in LEN_TAGS {
            let limb = decimal(tag, single(tag, fields.next(tag)?)?)?;
            total_bits = (total_bits << 32) | u128::from(limb);
        }

        fields.finish()?;

        if total_bits % algorithm.block_bits() as u128 != block_bits as u128 {
            return Err(ShaError::malformed(LEN_TAGS[3], CheckpointDefect::Inconsistent));
        }

        clear_bits_from(&mut block[..block_len], block_bits);

        log::debug!("loaded {algorithm} checkpoint ({block_bits} buffered bits)");
        Ok(Sha::restore(algorithm, state, &block, block_bits, total_bits))
    }
}

#[cfg(feature = "std")]
impl Sha {
    /// Write a checkpoint record to `writer` (e.g. stdout or a socket)
    ///
    /// # Errors
    /// `MisusedEngine(DumpAfterFinish)` once finished; `Io` on write failure.
    pub fn dump_to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), ShaError> {
        let record = Zeroizing::new(self.dump()?);
        writer.write_all(record.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Read a whole checkpoint record from `reader` (e.g. stdin)
    ///
    /// # Errors
    /// `Io` on read failure or non-UTF-8 input; otherwise as [`load`](Self::load).
    pub fn load_from_reader<R: std::io::Read>(mut reader: R) -> Result<Self, ShaError> {
        let mut record = Zeroizing::new(String::new());
        reader.read_to_string(&mut record)?;
        Self::load(&record)
    }

    /// Write a checkpoint record to `path`, replacing any existing file.
    ///
    /// A finished engine is rejected before the file is touched.
    ///
    /// # Errors
    /// `MisusedEngine(DumpAfterFinish)` once finished; `Io` on storage failure.
    pub fn dump_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ShaError> {
        let record = Zeroizing::new(self.dump()?);
        std::fs::write(path, record.as_bytes())?;
        Ok(())
    }

    /// Load a checkpoint record from `path`
    ///
    /// # Errors
    /// `Io` on storage failure; otherwise as [`load`](Self::load).
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ShaError> {
        let record = Zeroizing::new(std::fs::read_to_string(path)?);
        Self::load(&record)
    }
}

/// Display adapter rendering the record of an open engine
struct Record<'a>(&'a Sha);

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sha = self.0;

        writeln!(f, "{ALG}:{}", sha.algorithm().id())?;

        f.write_str(H)?;
        match sha.state() {
            ChainState::Sha1(h) => h.iter().try_for_each(|w| write!(f, ":{w:08x}"))?,
            ChainState::Sha256(h) => h.iter().try_for_each(|w| write!(f, ":{w:08x}"))?,
            #[cfg(feature = "sha512")]
            ChainState::Sha512(h) => h.iter().try_for_each(|w| write!(f, ":{w:016x}"))?,
        }
        writeln!(f)?;

        f.write_str(BLOCK)?;
        for byte in sha.block() {
            write!(f, ":{byte:02x}")?;
        }
        writeln!(f)?;

        writeln!(f, "{BLOCKCNT}:{}", sha.block_bits())?;

        let total = sha.bit_len();
        for (i, tag) in LEN_TAGS.iter().enumerate() {
            let limb = (total >> (32 * (3 - i))) as u32;
            writeln!(f, "{tag}:{limb}")?;
        }

        Ok(())
    }
}

/// Ordered field reader over the lines of a record
struct Fields<'a> {
    lines: Lines<'a>,
}

impl<'a> Fields<'a> {
    fn new(record: &'a str) -> Self {
        Self {
            lines: record.lines(),
        }
    }

    fn next_significant(&mut self) -> Option<&'a str> {
        self.lines
            .by_ref()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .find(|line| !line.trim().is_empty() && !line.starts_with('#'))
    }

    /// Next field, which must carry `tag`; yields its values
    fn next(&mut self, tag: &'static str) -> Result<Split<'a, char>, ShaError> {
        let line = self
            .next_significant()
            .ok_or_else(|| ShaError::malformed(tag, CheckpointDefect::Missing))?;

        let mut parts = line.split(':');
        match parts.next() {
            Some(found) if found == tag => Ok(parts),
            _ => Err(ShaError::malformed(tag, CheckpointDefect::TagMismatch)),
        }
    }

    /// Reject anything but comments after the last field
    fn finish(mut self) -> Result<(), ShaError> {
        match self.next_significant() {
            None => Ok(()),
            Some(_) => Err(ShaError::malformed(
                LEN_TAGS[3],
                CheckpointDefect::TrailingContent,
            )),
        }
    }
}

fn single<'a>(field: &'static str, mut values: Split<'a, char>) -> Result<&'a str, ShaError> {
    let count_error = |found| {
        ShaError::malformed(
            field,
            CheckpointDefect::ValueCount { expected: 1, found },
        )
    };

    let value = values.next().ok_or_else(|| count_error(0))?;
    let extra = values.count();
    if extra > 0 {
        return Err(count_error(1 + extra));
    }
    Ok(value)
}

/// Fill `out` from exactly `out.len()` values
fn parse_values<T>(
    field: &'static str,
    values: Split<'_, char>,
    out: &mut [T],
    parse: fn(&str) -> Result<T, CheckpointDefect>,
) -> Result<(), ShaError> {
    let expected = out.len();
    let mut found = 0;

    for value in values {
        if found < expected {
            out[found] = parse(value).map_err(|defect| ShaError::malformed(field, defect))?;
        }
        found += 1;
    }

    if found != expected {
        return Err(ShaError::malformed(
            field,
            CheckpointDefect::ValueCount { expected, found },
        ));
    }
    Ok(())
}

fn decimal(field: &'static str, text: &str) -> Result<u32, ShaError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShaError::malformed(field, CheckpointDefect::InvalidDigit));
    }
    text.parse::<u32>()
        .map_err(|_| ShaError::malformed(field, CheckpointDefect::OutOfRange))
}

fn fixed_hex(text: &str, width: usize) -> Result<u64, CheckpointDefect> {
    if text.len() != width {
        return Err(CheckpointDefect::Width {
            expected: width,
            found: text.len(),
        });
    }
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CheckpointDefect::InvalidDigit);
    }
    u64::from_str_radix(text, 16).map_err(|_| CheckpointDefect::InvalidDigit)
}

fn hex_u8(text: &str) -> Result<u8, CheckpointDefect> {
    fixed_hex(text, 2).map(|v| v as u8)
}

fn hex_u32(text: &str) -> Result<u32, CheckpointDefect> {
    fixed_hex(text, 8).map(|v| v as u32)
}

#[cfg(feature = "sha512")]
fn hex_u64(text: &str) -> Result<u64, CheckpointDefect> {
    fixed_hex(text, 16)
}

/// Zero every bit of `block` from bit offset `from` onwards
fn clear_bits_from(block: &mut [u8], from: usize) {
    let index = from / 8;
    let used = from % 8;

    if used > 0 {
        block[index] &= 0xffu8 << (8 - used);
        block[index + 1..].fill(0);
    } else {
        block[index..].fill(0);
    }
}
