//! # Key Derivation Functions (KDF)
//!
//! ## Modules
//!
//! - [`bcrypt_pbkdf`] - bcrypt_pbkdf, the KDF of OpenSSH's private-key format
//!
//! ## Usage
//!
//! Most callers want [`derive_bcrypt_pbkdf_key`](crate::derive_bcrypt_pbkdf_key)
//! or the [`BcryptPbkdfBuilder`](crate::BcryptPbkdfBuilder). Use
//! [`bcrypt_pbkdf`](crate::bcrypt_pbkdf) to write into a buffer you already own.

pub mod bcrypt_pbkdf;
