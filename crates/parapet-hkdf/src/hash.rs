// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash algorithm selection and HMAC dispatch

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

/// Largest digest size across supported algorithms (SHA-256, 32 bytes)
pub(crate) const MAX_HASH_LEN: usize = 32;

/// Hash algorithms HKDF can run over.
///
/// A closed set: each variant fixes the digest length, so an unsupported
/// algorithm is unrepresentable rather than a runtime failure inside a
/// derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlg {
    /// SHA-1, 20-byte digest
    Sha1,
    /// SHA-256, 32-byte digest
    Sha256,
}

impl HashAlg {
    /// Digest length in bytes (HashLen in RFC 5869)
    pub const fn hash_len(self) -> usize {
        match self {
            HashAlg::Sha1 => 20,
            HashAlg::Sha256 => 32,
        }
    }

    /// Maximum output a single expand may produce: 255 * HashLen.
    ///
    /// The expand block counter is one byte with valid range 1..=255.
    pub const fn max_okm_len(self) -> usize {
        255 * self.hash_len()
    }
}

/// HMAC(key, parts[0] || parts[1] || ..) for the selected algorithm.
///
/// Writes the tag into `out[..alg.hash_len()]`; trailing bytes of `out` are
/// left untouched. Parts are streamed into the MAC, never concatenated.
pub(crate) fn hmac(alg: HashAlg, key: &[u8], parts: &[&[u8]], out: &mut [u8; MAX_HASH_LEN]) {
    let tag = &mut out[..alg.hash_len()];

    match alg {
        HashAlg::Sha1 => mac_parts::<Hmac<Sha1>>(key, parts, tag),
        HashAlg::Sha256 => mac_parts::<Hmac<Sha256>>(key, parts, tag),
    }
}

fn mac_parts<M: Mac + KeyInit>(key: &[u8], parts: &[&[u8]], tag: &mut [u8]) {
    // RFC 2104 normalizes any key length, so construction cannot fail
    let mut mac = <M as KeyInit>::new_from_slice(key).expect("HMAC can take key of any size");

    for part in parts {
        mac.update(part);
    }

    tag.copy_from_slice(&mac.finalize().into_bytes());
}
