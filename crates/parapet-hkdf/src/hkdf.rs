// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF-Extract and HKDF-Expand per RFC 5869

use zeroize::Zeroize;

use crate::error::HkdfError;
use crate::hash::{self, HashAlg, MAX_HASH_LEN};

/// Pseudorandom key produced by [`extract`].
///
/// Exactly `hash_len` bytes for the algorithm it was extracted with. The
/// backing buffer is zeroized on drop.
pub struct Prk {
    alg: HashAlg,
    bytes: [u8; MAX_HASH_LEN],
}

impl Prk {
    /// The hash algorithm this PRK was extracted with
    pub fn algorithm(&self) -> HashAlg {
        self.alg
    }

    /// PRK bytes: exactly `self.algorithm().hash_len()` of them
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.alg.hash_len()]
    }
}

impl Drop for Prk {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// HKDF-Extract per RFC 5869 Section 2.2.
///
/// Compresses `ikm` into a `hash_len`-byte pseudorandom key:
/// `PRK = HMAC(salt, ikm)`. An absent salt (`None`) is replaced by
/// `hash_len` zero bytes; an explicitly empty salt yields the same PRK,
/// since HMAC zero-pads short keys to the hash block size. Every input is
/// valid, including empty `ikm`.
pub fn extract(alg: HashAlg, salt: Option<&[u8]>, ikm: &[u8]) -> Prk {
    static ZERO_SALT: [u8; MAX_HASH_LEN] = [0u8; MAX_HASH_LEN];

    let salt = match salt {
        Some(salt) => salt,
        None => &ZERO_SALT[..alg.hash_len()],
    };

    let mut prk = Prk {
        alg,
        bytes: [0u8; MAX_HASH_LEN],
    };
    hash::hmac(alg, salt, &[ikm], &mut prk.bytes);
    prk
}

/// HKDF-Expand per RFC 5869 Section 2.3.
///
/// Fills `okm` with output keying material derived from `prk` and `info`:
/// `T(i) = HMAC(prk, T(i-1) || info || i)` for `i` in `1..=N`, the final
/// block truncated to fit. `prk` is used as an HMAC key as-is; it is
/// normally the output of [`extract`], but any key of sufficient strength
/// and at least `hash_len` bytes works.
///
/// # Errors
///
/// [`HkdfError::OutputTooLong`] when `okm.len()` exceeds `255 * hash_len`,
/// detected before any HMAC computation. An empty `okm` is valid and
/// performs no HMAC work.
pub fn expand(alg: HashAlg, prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
    let max = alg.max_okm_len();
    if okm.len() > max {
        return Err(HkdfError::OutputTooLong {
            requested: okm.len(),
            max,
        });
    }

    let hash_len = alg.hash_len();

    // T(i-1); empty for the first round
    let mut t_prev = [0u8; MAX_HASH_LEN];
    let mut t_prev_len = 0;

    for (i, chunk) in okm.chunks_mut(hash_len).enumerate() {
        // The length bound above keeps the counter within 1..=255
        let counter = [(i + 1) as u8];
        let mut t = [0u8; MAX_HASH_LEN];

        hash::hmac(alg, prk, &[&t_prev[..t_prev_len], info, &counter], &mut t);

        chunk.copy_from_slice(&t[..chunk.len()]);
        t_prev.copy_from_slice(&t);
        t_prev_len = hash_len;

        t.zeroize();
    }

    t_prev.zeroize();
    Ok(())
}

/// One-shot HKDF: Extract-then-Expand.
///
/// Equivalent to [`extract`] followed by [`expand`] with the resulting PRK.
///
/// # Errors
///
/// [`HkdfError::OutputTooLong`] under the same condition as [`expand`].
pub fn hkdf(
    alg: HashAlg,
    salt: Option<&[u8]>,
    ikm: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), HkdfError> {
    let prk = extract(alg, salt, ikm);
    expand(alg, prk.as_bytes(), info, okm)
}
