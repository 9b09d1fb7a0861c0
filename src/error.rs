//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, BcryptPbkdfError>`](BcryptPbkdfError).

use thiserror::Error;

/// The error type for all bcrypt_pbkdf operations.
///
/// Derivation is pure and deterministic, so neither variant is worth retrying:
/// the same inputs always produce the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BcryptPbkdfError {
    /// A caller-supplied parameter was rejected before any hashing started.
    ///
    /// Raised for:
    /// - an empty password
    /// - an empty salt
    /// - a round count of zero
    /// - an output length of zero, or one too large for the 32-bit block counter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal consistency check failed.
    ///
    /// Never produced by a correct build; for example an odd word count handed
    /// to the ECB encryption loop.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),
}
