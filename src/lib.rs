// src/lib.rs

//! bcrypt_pbkdf: the password-based KDF behind OpenSSH's private-key format.
//!
//! ```no_run
//! let key = bcrypt_pbkdf_rs::derive_bcrypt_pbkdf_key(b"qwerty", b"16-byte-salt....", 16, 48)?;
//! assert_eq!(key.len(), 48);
//! # Ok::<(), bcrypt_pbkdf_rs::BcryptPbkdfError>(())
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod error;

// High-level API
pub use builders::BcryptPbkdfBuilder;
pub use crypto::kdf::bcrypt_pbkdf::{bcrypt_pbkdf, derive_bcrypt_pbkdf_key};
pub use error::BcryptPbkdfError;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{bcrypt_pbkdf_parallel, derive_batch};
