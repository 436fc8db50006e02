// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 compression per FIPS 180-2 Section 6.1.2

use zeroize::Zeroize;

use crate::consts::K1;

use super::read_be_u32;

/// SHA-1 block size in bytes
pub(crate) const BLOCK_LEN: usize = 64;

/// SHA-1 logical functions per FIPS 180-2 Section 4.1.1
#[inline(always)]
const fn ch(x: u32, y: u32, z: u32) -> u32 {
    z ^ (x & (y ^ z))
}

#[inline(always)]
const fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (z & (x | y))
}

/// Compress one 64-byte block into `h`
pub(crate) fn compress(h: &mut [u32; 5], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut w = [0u32; 80];

    // W[0..15] from block (big-endian)
    read_be_u32(block, &mut w[..16]);

    // W[16..79]: W[t] = ROTL^1(W[t-3] ^ W[t-8] ^ W[t-14] ^ W[t-16])
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *h;

    // 80 rounds in four stages of 20
    for (t, &wt) in w.iter().enumerate() {
        let f = match t / 20 {
            0 => ch(b, c, d),
            1 | 3 => parity(b, c, d),
            _ => maj(b, c, d),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K1[t / 20])
            .wrapping_add(wt);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    h[0] = h[0].wrapping_add(a);
    h[1] = h[1].wrapping_add(b);
    h[2] = h[2].wrapping_add(c);
    h[3] = h[3].wrapping_add(d);
    h[4] = h[4].wrapping_add(e);

    w.zeroize();
}
