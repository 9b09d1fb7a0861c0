// src/crypto/bhash.rs

//! The bcrypt hash used as the PRF of bcrypt_pbkdf.
//!
//! Differs from classic bcrypt password hashing: inputs are SHA-512 digests,
//! the expansion count is fixed at 64, the plaintext is 32 bytes long and the
//! output words are emitted little-endian.

use zeroize::Zeroizing;

use crate::consts::{
    BCRYPT_EXPANSION_ROUNDS, BCRYPT_HASH_SIZE, BCRYPT_PLAINTEXT, SHA512_DIGEST_SIZE,
};
use crate::crypto::blowfish::Blowfish;
use crate::error::BcryptPbkdfError;

const BHASH_WORDS: usize = BCRYPT_HASH_SIZE / 4;

/// Hash a pre-hashed password and a pre-hashed salt into `out`.
///
/// `cipher` is reset first, so any instance can be passed in; reusing one across
/// calls only saves the allocation.
pub(crate) fn bcrypt_hash(
    cipher: &mut Blowfish,
    prehashed_password: &[u8; SHA512_DIGEST_SIZE],
    prehashed_salt: &[u8; SHA512_DIGEST_SIZE],
    out: &mut [u8; BCRYPT_HASH_SIZE],
) -> Result<(), BcryptPbkdfError> {
    cipher.reset();
    cipher.salted_expand_key(prehashed_password, prehashed_salt);
    for _ in 0..BCRYPT_EXPANSION_ROUNDS {
        cipher.expand_key(prehashed_salt);
        cipher.expand_key(prehashed_password);
    }

    let mut cdata = Zeroizing::new([0u32; BHASH_WORDS]);
    for (word, chunk) in cdata.iter_mut().zip(BCRYPT_PLAINTEXT.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for _ in 0..BCRYPT_EXPANSION_ROUNDS {
        cipher.encrypt(&mut cdata[..])?;
    }

    // Loaded big-endian, emitted little-endian.
    for (chunk, word) in out.chunks_exact_mut(4).zip(cdata.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    Ok(())
}
