//! src/builders/bcrypt_pbkdf_builder.rs
//! bcrypt_pbkdf builder: salt, rounds and output length in one place

use zeroize::Zeroizing;

use crate::aliases::{DerivedKey, SaltBuffer};
use crate::consts::{DEFAULT_OUTPUT_LEN, DEFAULT_ROUNDS};
use crate::crypto::kdf::bcrypt_pbkdf::bcrypt_pbkdf;
use crate::error::BcryptPbkdfError;

#[cfg(feature = "rand")]
use crate::aliases::Salt16;
#[cfg(feature = "rand")]
use crate::consts::DEFAULT_SALT_SIZE;

/// bcrypt_pbkdf key derivation builder
///
/// Defaults: [`DEFAULT_ROUNDS`] rounds, [`DEFAULT_OUTPUT_LEN`] output bytes and,
/// with the `rand` feature, a fresh 16-byte random salt.
///
/// Parameters are not checked until [`derive`](Self::derive) runs, so an invalid
/// combination (e.g. zero rounds) surfaces as
/// [`BcryptPbkdfError::InvalidArgument`] there.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). Derivation borrows the builder
/// immutably, so one configured builder can serve many threads.
#[derive(Debug, Clone)]
pub struct BcryptPbkdfBuilder {
    rounds: u32,
    output_len: usize,
    salt: SaltBuffer,
}

impl BcryptPbkdfBuilder {
    /// Create builder with default parameters and a random salt
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn new() -> Self {
        use rand::RngCore;

        let mut salt: Salt16 = Zeroizing::new([0u8; DEFAULT_SALT_SIZE]);
        rand::rng().fill_bytes(&mut salt[..]);
        Self::from_salt(&salt[..])
    }

    /// Create builder with default parameters and a known salt
    /// (e.g. one read back from a key file).
    #[must_use]
    pub fn from_salt(salt: impl AsRef<[u8]>) -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            output_len: DEFAULT_OUTPUT_LEN,
            salt: Zeroizing::new(salt.as_ref().to_vec()),
        }
    }

    /// Replace the salt
    #[must_use]
    pub fn with_salt(mut self, salt: impl AsRef<[u8]>) -> Self {
        self.salt = Zeroizing::new(salt.as_ref().to_vec());
        self
    }

    /// Set the outer round count
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the number of bytes [`derive`](Self::derive) produces
    #[must_use]
    pub fn with_output_len(mut self, output_len: usize) -> Self {
        self.output_len = output_len;
        self
    }

    /// Current salt (for serialization next to the protected data)
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Current round count
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Current output length
    #[must_use]
    pub const fn output_len(&self) -> usize {
        self.output_len
    }

    /// Derive into a caller-provided buffer (**preferred**)
    ///
    /// The buffer length wins over the configured output length.
    #[inline]
    pub fn derive_into(&self, password: &[u8], output: &mut [u8]) -> Result<(), BcryptPbkdfError> {
        bcrypt_pbkdf(password, &self.salt, self.rounds, output)
    }

    /// Convenience: derive and return a fresh key of [`output_len`](Self::output_len) bytes
    pub fn derive(&self, password: &[u8]) -> Result<DerivedKey, BcryptPbkdfError> {
        crate::derive_bcrypt_pbkdf_key(password, &self.salt, self.rounds, self.output_len)
    }
}

#[cfg(feature = "rand")]
impl Default for BcryptPbkdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}
