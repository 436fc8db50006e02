// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Decode a hex string (either case).
///
/// # Panics
/// On odd length or non-hex characters.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd hex length {}", hex.len());
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

/// Decode unpadded standard-alphabet base64.
///
/// # Panics
/// On characters outside the alphabet or a length of 1 mod 4.
pub fn base64_to_bytes(text: &str) -> Vec<u8> {
    assert!(text.len() % 4 != 1, "impossible base64 length {}", text.len());

    let sextet = |c: u8| -> u32 {
        match c {
            b'A'..=b'Z' => u32::from(c - b'A'),
            b'a'..=b'z' => u32::from(c - b'a') + 26,
            b'0'..=b'9' => u32::from(c - b'0') + 52,
            b'+' => 62,
            b'/' => 63,
            _ => panic!("invalid base64 character {:?}", c as char),
        }
    };

    let mut out = Vec::with_capacity(text.len() * 3 / 4);
    for group in text.as_bytes().chunks(4) {
        let mut acc = 0u32;
        for (i, &c) in group.iter().enumerate() {
            acc |= sextet(c) << (18 - 6 * i);
        }
        let bytes = acc.to_be_bytes();
        out.extend_from_slice(&bytes[1..group.len()]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_bytes_mixed_case() {
        assert_eq!(hex_to_bytes("00ffAb"), vec![0x00, 0xff, 0xab]);
    }

    #[test]
    fn test_base64_to_bytes_partial_groups() {
        assert_eq!(base64_to_bytes("TWFu"), b"Man".to_vec());
        assert_eq!(base64_to_bytes("TWE"), b"Ma".to_vec());
        assert_eq!(base64_to_bytes("TQ"), b"M".to_vec());
        assert!(base64_to_bytes("").is_empty());
    }
}
