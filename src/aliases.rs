//! # Secret Buffer Aliases
//!
//! Type aliases for every buffer that holds password-equivalent material.
//! All of them are [`zeroize::Zeroizing`] wrappers, so the contents are wiped
//! when the value is dropped, on both the success and the error path.
//!
//! ## Type Categories
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - fixed-size zeroizing stack buffer
//!
//! ### Semantic Fixed-Size Types
//! - [`Sha512Digest64`] - pre-hashed password or per-round salt digest
//! - [`BcryptHash32`] - one bcrypt hash output / per-block XOR accumulator
//! - [`Salt16`] - randomly generated default salt
//!
//! ### Dynamic Secrets
//! - [`DerivedKey`] - caller-visible derived key material
//! - [`SaltBuffer`] - arbitrary-length salt held by the builder

use zeroize::Zeroizing;

use crate::consts::{BCRYPT_HASH_SIZE, DEFAULT_SALT_SIZE, SHA512_DIGEST_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic zeroizing stack buffer
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = Zeroizing<[u8; N]>;

// Semantic sub-types, compile-time sized
pub type Sha512Digest64 = SpanBuffer<SHA512_DIGEST_SIZE>;
pub type BcryptHash32 = SpanBuffer<BCRYPT_HASH_SIZE>;
pub type Salt16 = SpanBuffer<DEFAULT_SALT_SIZE>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type DerivedKey = Zeroizing<Vec<u8>>;
pub type SaltBuffer = Zeroizing<Vec<u8>>;
