// src/crypto/mod.rs

//! Cryptographic building blocks of bcrypt_pbkdf.
//!
//! Only [`kdf`] is public; the cipher core, the bcrypt hash and the memory
//! helpers exist to serve it. See the crate root for re-exports.

pub(crate) mod bhash;
pub(crate) mod blowfish;
pub(crate) mod digest;
pub mod kdf;
pub(crate) mod memlock;
