// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::Message;

const KEY_0B_20: Message = Message::Repeat {
    byte: 0x0b,
    count: 20,
};
const KEY_AA_20: Message = Message::Repeat {
    byte: 0xaa,
    count: 20,
};
const KEY_AA_80: Message = Message::Repeat {
    byte: 0xaa,
    count: 80,
};
const KEY_AA_131: Message = Message::Repeat {
    byte: 0xaa,
    count: 131,
};
const KEY_COUNTING: Message = Message::Bytes(&[
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19,
]);
const KEY_JEFE: Message = Message::Bytes(b"Jefe");

const DATA_HI_THERE: Message = Message::Bytes(b"Hi There");
const DATA_JEFE: Message = Message::Bytes(b"what do ya want for nothing?");
const DATA_DD_50: Message = Message::Repeat {
    byte: 0xdd,
    count: 50,
};
const DATA_CD_50: Message = Message::Repeat {
    byte: 0xcd,
    count: 50,
};
const DATA_HASH_KEY_FIRST: Message =
    Message::Bytes(b"Test Using Larger Than Block-Size Key - Hash Key First");
const DATA_RFC2202_LARGE: Message =
    Message::Bytes(b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data");
const DATA_RFC4231_LARGE: Message = Message::Bytes(
    b"This is a test using a larger than block-size key and a larger than block-size data. The key needs to be hashed before being used by the HMAC algorithm.",
);

/// HMAC known-answer test
#[derive(Debug, Clone, Copy)]
pub struct HmacVector {
    /// Case label
    pub name: &'static str,
    /// Checkpoint id of the underlying algorithm
    pub algorithm_id: u32,
    /// Secret key
    pub key: Message,
    /// Message text
    pub data: Message,
    /// Expected MAC (lowercase hex, full length)
    pub mac: &'static str,
}

/// RFC 2202 (SHA-1) and RFC 4231 (SHA-2) vectors plus empty and pangram cases.
///
/// RFC 4231 case 5 is omitted; it only checks a truncated output.
pub const HMAC_VECTORS: &[HmacVector] = &[
    // RFC 2202
    HmacVector {
        name: "rfc2202 case 1",
        algorithm_id: 1,
        key: KEY_0B_20,
        data: DATA_HI_THERE,
        mac: "b617318655057264e28bc0b6fb378c8ef146be00",
    },
    HmacVector {
        name: "rfc2202 case 2",
        algorithm_id: 1,
        key: KEY_JEFE,
        data: DATA_JEFE,
        mac: "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
    },
    HmacVector {
        name: "rfc2202 case 3",
        algorithm_id: 1,
        key: KEY_AA_20,
        data: DATA_DD_50,
        mac: "125d7342b9ac11cd91a39af48aa17b4f63f175d3",
    },
    HmacVector {
        name: "rfc2202 case 4",
        algorithm_id: 1,
        key: KEY_COUNTING,
        data: DATA_CD_50,
        mac: "4c9007f4026250c6bc8414f9bf50c86c2d7235da",
    },
    HmacVector {
        name: "rfc2202 case 6",
        algorithm_id: 1,
        key: KEY_AA_80,
        data: DATA_HASH_KEY_FIRST,
        mac: "aa4ae5e15272d00e95705637ce8a3b55ed402112",
    },
    HmacVector {
        name: "rfc2202 case 7",
        algorithm_id: 1,
        key: KEY_AA_80,
        data: DATA_RFC2202_LARGE,
        mac: "e8e99d0f45237d786d6bbaa7965c7808bbff1a91",
    },
    HmacVector {
        name: "sha1 empty key and data",
        algorithm_id: 1,
        key: Message::Bytes(b""),
        data: Message::Bytes(b""),
        mac: "fbdb1d1b18aa6c08324b7d64b71fb76370690e1d",
    },
    HmacVector {
        name: "sha1 quick fox",
        algorithm_id: 1,
        key: Message::Bytes(b"key"),
        data: Message::Bytes(b"The quick brown fox jumps over the lazy dog"),
        mac: "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9",
    },
    // RFC 4231, SHA-256
    HmacVector {
        name: "rfc4231 case 1 sha256",
        algorithm_id: 2,
        key: KEY_0B_20,
        data: DATA_HI_THERE,
        mac: "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
    },
    HmacVector {
        name: "rfc4231 case 2 sha256",
        algorithm_id: 2,
        key: KEY_JEFE,
        data: DATA_JEFE,
        mac: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
    },
    HmacVector {
        name: "rfc4231 case 3 sha256",
        algorithm_id: 2,
        key: KEY_AA_20,
        data: DATA_DD_50,
        mac: "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe",
    },
    HmacVector {
        name: "rfc4231 case 4 sha256",
        algorithm_id: 2,
        key: KEY_COUNTING,
        data: DATA_CD_50,
        mac: "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b",
    },
    HmacVector {
        name: "rfc4231 case 6 sha256",
        algorithm_id: 2,
        key: KEY_AA_131,
        data: DATA_HASH_KEY_FIRST,
        mac: "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
    },
    HmacVector {
        name: "rfc4231 case 7 sha256",
        algorithm_id: 2,
        key: KEY_AA_131,
        data: DATA_RFC4231_LARGE,
        mac: "9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2",
    },
    HmacVector {
        name: "sha256 empty key and data",
        algorithm_id: 2,
        key: Message::Bytes(b""),
        data: Message::Bytes(b""),
        mac: "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad",
    },
    HmacVector {
        name: "sha256 quick fox",
        algorithm_id: 2,
        key: Message::Bytes(b"key"),
        data: Message::Bytes(b"The quick brown fox jumps over the lazy dog"),
        mac: "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8",
    },
    // RFC 4231, SHA-384
    HmacVector {
        name: "rfc4231 case 1 sha384",
        algorithm_id: 3,
        key: KEY_0B_20,
        data: DATA_HI_THERE,
        mac: "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59cfaea9ea9076ede7f4af152e8b2fa9cb6",
    },
    HmacVector {
        name: "rfc4231 case 2 sha384",
        algorithm_id: 3,
        key: KEY_JEFE,
        data: DATA_JEFE,
        mac: "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649",
    },
    HmacVector {
        name: "rfc4231 case 3 sha384",
        algorithm_id: 3,
        key: KEY_AA_20,
        data: DATA_DD_50,
        mac: "88062608d3e6ad8a0aa2ace014c8a86f0aa635d947ac9febe83ef4e55966144b2a5ab39dc13814b94e3ab6e101a34f27",
    },
    HmacVector {
        name: "rfc4231 case 4 sha384",
        algorithm_id: 3,
        key: KEY_COUNTING,
        data: DATA_CD_50,
        mac: "3e8a69b7783c25851933ab6290af6ca77a9981480850009cc5577c6e1f573b4e6801dd23c4a7d679ccf8a386c674cffb",
    },
    HmacVector {
        name: "rfc4231 case 6 sha384",
        algorithm_id: 3,
        key: KEY_AA_131,
        data: DATA_HASH_KEY_FIRST,
        mac: "4ece084485813e9088d2c63a041bc5b44f9ef1012a2b588f3cd11f05033ac4c60c2ef6ab4030fe8296248df163f44952",
    },
    HmacVector {
        name: "rfc4231 case 7 sha384",
        algorithm_id: 3,
        key: KEY_AA_131,
        data: DATA_RFC4231_LARGE,
        mac: "6617178e941f020d351e2f254e8fd32c602420feb0b8fb9adccebb82461e99c5a678cc31e799176d3860e6110c46523e",
    },
    // RFC 4231, SHA-512
    HmacVector {
        name: "rfc4231 case 1 sha512",
        algorithm_id: 4,
        key: KEY_0B_20,
        data: DATA_HI_THERE,
        mac: "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cdedaa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
    },
    HmacVector {
        name: "rfc4231 case 2 sha512",
        algorithm_id: 4,
        key: KEY_JEFE,
        data: DATA_JEFE,
        mac: "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
    },
    HmacVector {
        name: "rfc4231 case 3 sha512",
        algorithm_id: 4,
        key: KEY_AA_20,
        data: DATA_DD_50,
        mac: "fa73b0089d56a284efb0f0756c890be9b1b5dbdd8ee81a3655f83e33b2279d39bf3e848279a722c806b485a47e67c807b946a337bee8942674278859e13292fb",
    },
    HmacVector {
        name: "rfc4231 case 4 sha512",
        algorithm_id: 4,
        key: KEY_COUNTING,
        data: DATA_CD_50,
        mac: "b0ba465637458c6990e5a8c5f61d4af7e576d97ff94b872de76f8050361ee3dba91ca5c11aa25eb4d679275cc5788063a5f19741120c4f2de2adebeb10a298dd",
    },
    HmacVector {
        name: "rfc4231 case 6 sha512",
        algorithm_id: 4,
        key: KEY_AA_131,
        data: DATA_HASH_KEY_FIRST,
        mac: "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f3526b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598",
    },
    HmacVector {
        name: "rfc4231 case 7 sha512",
        algorithm_id: 4,
        key: KEY_AA_131,
        data: DATA_RFC4231_LARGE,
        mac: "e37b6a775dc87dbaa4dfa9f96e5e3ffddebd71f8867289865df5a32d20cdc944b6022cac3c4982b10d5eeb55c3e4de15134676fb6de0446065c97440fa8c6a58",
    },
];
