// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::Message;

/// Two-block message for the 32-bit word algorithms (448 bits)
const MSG_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// Two-block message for the 64-bit word algorithms (896 bits)
const MSG_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

const MILLION_A: Message = Message::Repeat {
    byte: b'a',
    count: 1_000_000,
};

const QUICK_FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

/// Digest known-answer test
#[derive(Debug, Clone, Copy)]
pub struct DigestVector {
    /// Case label
    pub name: &'static str,
    /// Checkpoint id of the algorithm (1 = SHA-1 … 4 = SHA-512)
    pub algorithm_id: u32,
    /// Input message
    pub message: Message,
    /// Expected digest (lowercase hex)
    pub digest: &'static str,
}

/// FIPS 180-2 vectors plus the empty and pangram messages
pub const DIGEST_VECTORS: &[DigestVector] = &[
    // SHA-1
    DigestVector {
        name: "sha1 empty",
        algorithm_id: 1,
        message: Message::Bytes(b""),
        digest: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    DigestVector {
        name: "sha1 abc",
        algorithm_id: 1,
        message: Message::Bytes(b"abc"),
        digest: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    DigestVector {
        name: "sha1 two blocks",
        algorithm_id: 1,
        message: Message::Bytes(MSG_448),
        digest: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    },
    DigestVector {
        name: "sha1 quick fox",
        algorithm_id: 1,
        message: Message::Bytes(QUICK_FOX),
        digest: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    },
    DigestVector {
        name: "sha1 million a",
        algorithm_id: 1,
        message: MILLION_A,
        digest: "34aa973cd4c4daa4f61eeb2bdbad27316534016f",
    },
    // SHA-256
    DigestVector {
        name: "sha256 empty",
        algorithm_id: 2,
        message: Message::Bytes(b""),
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    DigestVector {
        name: "sha256 abc",
        algorithm_id: 2,
        message: Message::Bytes(b"abc"),
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    DigestVector {
        name: "sha256 two blocks",
        algorithm_id: 2,
        message: Message::Bytes(MSG_448),
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    DigestVector {
        name: "sha256 quick fox",
        algorithm_id: 2,
        message: Message::Bytes(QUICK_FOX),
        digest: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
    DigestVector {
        name: "sha256 million a",
        algorithm_id: 2,
        message: MILLION_A,
        digest: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
    // SHA-384
    DigestVector {
        name: "sha384 empty",
        algorithm_id: 3,
        message: Message::Bytes(b""),
        digest: "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
    },
    DigestVector {
        name: "sha384 abc",
        algorithm_id: 3,
        message: Message::Bytes(b"abc"),
        digest: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
    },
    DigestVector {
        name: "sha384 two blocks",
        algorithm_id: 3,
        message: Message::Bytes(MSG_896),
        digest: "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039",
    },
    DigestVector {
        name: "sha384 million a",
        algorithm_id: 3,
        message: MILLION_A,
        digest: "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985",
    },
    // SHA-512
    DigestVector {
        name: "sha512 empty",
        algorithm_id: 4,
        message: Message::Bytes(b""),
        digest: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    },
    DigestVector {
        name: "sha512 abc",
        algorithm_id: 4,
        message: Message::Bytes(b"abc"),
        digest: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    },
    DigestVector {
        name: "sha512 two blocks",
        algorithm_id: 4,
        message: Message::Bytes(MSG_896),
        digest: "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
    },
    DigestVector {
        name: "sha512 million a",
        algorithm_id: 4,
        message: MILLION_A,
        digest: "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b",
    },
];
