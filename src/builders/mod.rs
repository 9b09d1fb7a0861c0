//! # Builders
//!
//! Builder patterns for configuring key derivation.
//!
//! ## Modules
//!
//! - [`bcrypt_pbkdf_builder`] - Builder for bcrypt_pbkdf key derivation
//!
//! ## Usage
//!
//! Builders provide a fluent API with sensible defaults (see [`crate::consts`])
//! and optional customization.

pub mod bcrypt_pbkdf_builder;

pub use bcrypt_pbkdf_builder::BcryptPbkdfBuilder;
