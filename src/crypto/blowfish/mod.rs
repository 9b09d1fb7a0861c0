// src/crypto/blowfish/mod.rs

//! Blowfish block cipher core, as driven by bcrypt.
//!
//! Only encryption is implemented, and the key schedule in [`schedule`] deviates
//! from standard Blowfish when a salt is supplied. This is not a general-purpose
//! cipher.

mod consts;
pub(crate) mod schedule;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::BLOWFISH_ROUNDS;
use crate::error::BcryptPbkdfError;
use consts::{P_INIT, S_INIT};

/// Number of words in the permutation table.
pub(crate) const P_WORDS: usize = BLOWFISH_ROUNDS + 2;

/// Blowfish cipher state: 18 subkeys plus four 256-entry S-boxes.
///
/// The state is key-derived, so it is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Blowfish {
    p: [u32; P_WORDS],
    s: [[u32; 256]; 4],
}

impl Blowfish {
    /// Fresh state holding the π constants.
    pub(crate) fn new() -> Self {
        Self {
            p: P_INIT,
            s: S_INIT,
        }
    }

    /// Overwrite the whole state with the π constants.
    ///
    /// Lets one instance be reused across independent bcrypt hashes without
    /// carrying anything over.
    pub(crate) fn reset(&mut self) {
        self.p = P_INIT;
        self.s = S_INIT;
    }

    #[inline(always)]
    fn round_function(&self, x: u32) -> u32 {
        let [b0, b1, b2, b3] = x.to_be_bytes();
        let h = self.s[0][usize::from(b0)].wrapping_add(self.s[1][usize::from(b1)]);
        (h ^ self.s[2][usize::from(b2)]).wrapping_add(self.s[3][usize::from(b3)])
    }

    /// Encrypt one 64-bit block given as two big-endian halves.
    #[inline]
    pub(crate) fn encrypt_block(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        left ^= self.p[0];
        for round in 1..=BLOWFISH_ROUNDS {
            right ^= self.round_function(left) ^ self.p[round];
            core::mem::swap(&mut left, &mut right);
        }
        // P[16] went into the last round; undo the final swap and whiten with P[17].
        (right ^ self.p[BLOWFISH_ROUNDS + 1], left)
    }

    /// ECB-encrypt a word sequence in place, one `(left, right)` pair at a time.
    pub(crate) fn encrypt(&self, words: &mut [u32]) -> Result<(), BcryptPbkdfError> {
        if words.len() % 2 != 0 {
            return Err(BcryptPbkdfError::InternalInvariant(format!(
                "ECB input must hold an even number of words, got {}",
                words.len()
            )));
        }

        for pair in words.chunks_exact_mut(2) {
            let (left, right) = self.encrypt_block(pair[0], pair[1]);
            pair[0] = left;
            pair[1] = right;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_from_hex(hex_block: &str) -> (u32, u32) {
        let bytes = hex::decode(hex_block).unwrap();
        (
            u32::from_be_bytes(bytes[..4].try_into().unwrap()),
            u32::from_be_bytes(bytes[4..].try_into().unwrap()),
        )
    }

    #[test]
    fn standard_blowfish_vectors() {
        // Eric Young's reference set: plain expand_key is unmodified Blowfish.
        let cases = &[
            ("0000000000000000", "0000000000000000", "4ef997456198dd78"),
            ("ffffffffffffffff", "ffffffffffffffff", "51866fd5b85ecb8a"),
            ("3000000000000000", "1000000000000001", "7d856f9a613063f2"),
            ("0123456789abcdef", "1111111111111111", "61f9c3802281b096"),
        ];

        for &(key, plaintext, ciphertext) in cases {
            let mut cipher = Blowfish::new();
            cipher.expand_key(&hex::decode(key).unwrap());

            let (left, right) = block_from_hex(plaintext);
            let expected = block_from_hex(ciphertext);
            assert_eq!(cipher.encrypt_block(left, right), expected, "key {key}");
        }
    }

    #[test]
    fn initial_state_encrypts_zero_block() {
        let cipher = Blowfish::new();
        assert_eq!(cipher.encrypt_block(0, 0), (0x706d_9fcc, 0x1792_d23a));
    }

    #[test]
    fn ecb_matches_per_block_encryption() {
        let mut cipher = Blowfish::new();
        cipher.expand_key(b"ecb key");

        let mut words = [1u32, 2, 3, 4, 1, 2];
        cipher.encrypt(&mut words).unwrap();

        let first = cipher.encrypt_block(1, 2);
        assert_eq!((words[0], words[1]), first);
        assert_eq!((words[4], words[5]), first, "ECB: equal blocks, equal output");
        assert_eq!((words[2], words[3]), cipher.encrypt_block(3, 4));
    }

    #[test]
    fn ecb_rejects_odd_word_count() {
        let cipher = Blowfish::new();
        let mut words = [0u32; 3];
        let err = cipher.encrypt(&mut words).unwrap_err();
        assert!(matches!(err, BcryptPbkdfError::InternalInvariant(_)));
        assert_eq!(words, [0u32; 3], "nothing encrypted on error");
    }

    #[test]
    fn zeroize_clears_all_tables() {
        let mut cipher = Blowfish::new();
        cipher.salted_expand_key(b"secret key", b"salt");

        cipher.zeroize();

        assert!(cipher.p.iter().all(|&word| word == 0), "P-array not wiped");
        for (index, table) in cipher.s.iter().enumerate() {
            assert!(table.iter().all(|&word| word == 0), "S-box {index} not wiped");
        }
    }

    #[test]
    fn reset_discards_key_material() {
        let mut cipher = Blowfish::new();
        let pristine = cipher.encrypt_block(0, 0);

        cipher.expand_key(b"some key");
        assert_ne!(cipher.encrypt_block(0, 0), pristine);

        cipher.reset();
        assert_eq!(cipher.encrypt_block(0, 0), pristine);
    }
}
