//! # Constants
//!
//! Protocol constants of the bcrypt_pbkdf construction, plus the defaults used by
//! [`BcryptPbkdfBuilder`](crate::BcryptPbkdfBuilder).

/// Size of one bcrypt hash output, and therefore of one output block (32 bytes).
pub const BCRYPT_HASH_SIZE: usize = 32;

/// Size of a SHA-512 digest (64 bytes). Both the password and every per-block
/// salt are pre-hashed to this size before entering the cipher.
pub const SHA512_DIGEST_SIZE: usize = 64;

/// Number of salt/password key expansions per bcrypt hash, and number of ECB
/// passes over the plaintext.
///
/// Fixed by the construction. Only the outer `rounds` is tunable.
pub const BCRYPT_EXPANSION_ROUNDS: usize = 64;

/// Feistel rounds in one Blowfish block encryption.
pub const BLOWFISH_ROUNDS: usize = 16;

/// The 32-byte plaintext every bcrypt hash encrypts.
pub const BCRYPT_PLAINTEXT: &[u8; BCRYPT_HASH_SIZE] = b"OxychromaticBlowfishSwatDynamite";

/// Minimum allowed outer round count.
pub const MIN_ROUNDS: u32 = 1;

/// Default outer round count.
///
/// Matches the `ssh-keygen -a` default for new private keys.
pub const DEFAULT_ROUNDS: u32 = 16;

/// Default output length: 48 bytes, enough for an AES-256 key plus a 16-byte IV
/// (the layout OpenSSH derives for `aes256-ctr` protected keys).
pub const DEFAULT_OUTPUT_LEN: usize = 48;

/// Default salt size for randomly generated salts (16 bytes).
pub const DEFAULT_SALT_SIZE: usize = 16;
