// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF over a selectable HMAC hash
//!
//! Implementation per RFC 5869 (HKDF). The keyed-hash primitive comes from
//! the RustCrypto `hmac` crate, parameterized by a closed set of hash
//! algorithms (SHA-1, SHA-256). Intermediate key material is zeroized.
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod hash;
mod hkdf;

pub use error::HkdfError;
pub use hash::HashAlg;
pub use hkdf::{Prk, expand, extract, hkdf};
