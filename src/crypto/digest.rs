// src/crypto/digest.rs

//! SHA-512 adapter: hashes a sequence of byte slices straight into a
//! caller-owned, zeroizing 64-byte buffer.

use sha2::{Digest, Sha512};

use crate::consts::SHA512_DIGEST_SIZE;

/// `out = SHA-512(parts[0] || parts[1] || ...)`
#[inline]
pub(crate) fn sha512_into(parts: &[&[u8]], out: &mut [u8; SHA512_DIGEST_SIZE]) {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    out.copy_from_slice(&hasher.finalize());
}
