// src/crypto/blowfish/schedule.rs

//! Blowfish key schedules: the standard one and bcrypt's salted variant.
//!
//! Both first XOR the key into the P-array, then regenerate P and all four
//! S-boxes by repeatedly encrypting a running block with the partially updated
//! state. The salted variant additionally folds salt words into the running block
//! before every encryption.

use zeroize::Zeroize;

use super::{Blowfish, P_WORDS};

/// Read the next big-endian word from `data`, treating it as a ring.
///
/// The cursor wraps to 0 whenever it reaches `data.len()`, so keys and salts
/// shorter than the tables are reused from the start.
#[inline]
pub(crate) fn extract_word(data: &[u8], cursor: &mut usize) -> u32 {
    debug_assert!(!data.is_empty(), "key schedule input must not be empty");

    let mut word = 0u32;
    for _ in 0..4 {
        if *cursor >= data.len() {
            *cursor = 0;
        }
        word = (word << 8) | u32::from(data[*cursor]);
        *cursor += 1;
    }
    word
}

impl Blowfish {
    /// Standard Blowfish key setup on top of the current state.
    pub(crate) fn expand_key(&mut self, key: &[u8]) {
        self.mix_key(key);
        self.regenerate_tables(None);
    }

    /// bcrypt's salted key setup ("EksBlowfishSetup" step).
    pub(crate) fn salted_expand_key(&mut self, key: &[u8], salt: &[u8]) {
        self.mix_key(key);
        self.regenerate_tables(Some(salt));
    }

    fn mix_key(&mut self, key: &[u8]) {
        let mut cursor = 0;
        for subkey in self.p.iter_mut() {
            *subkey ^= extract_word(key, &mut cursor);
        }
    }

    /// Refill P, then S0..S3, from a zero-initialized running block.
    ///
    /// With a salt, one cursor keeps advancing across P and all S-boxes.
    fn regenerate_tables(&mut self, salt: Option<&[u8]>) {
        let mut cursor = 0;
        let mut block = (0u32, 0u32);

        for i in (0..P_WORDS).step_by(2) {
            block = self.next_block(block, salt, &mut cursor);
            (self.p[i], self.p[i + 1]) = block;
        }

        for table in 0..4 {
            for i in (0..256).step_by(2) {
                block = self.next_block(block, salt, &mut cursor);
                (self.s[table][i], self.s[table][i + 1]) = block;
            }
        }

        block.0.zeroize();
        block.1.zeroize();
    }

    #[inline(always)]
    fn next_block(
        &self,
        (mut left, mut right): (u32, u32),
        salt: Option<&[u8]>,
        cursor: &mut usize,
    ) -> (u32, u32) {
        if let Some(salt) = salt {
            left ^= extract_word(salt, cursor);
            right ^= extract_word(salt, cursor);
        }
        self.encrypt_block(left, right)
    }
}
