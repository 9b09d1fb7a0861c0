//! tests/common/mod.rs
//! Common constants shared across test files

/// Password of the reference vectors
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &[u8] = b"qwerty";

/// Salt of the reference vectors
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3, 4, 5, 6, 7, 8];

/// Round count of the reference vectors
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ROUNDS: u32 = 64;

/// Fast round count for property tests - performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const FAST_ROUNDS: u32 = 2;

/// Output lengths around the 32-byte block boundaries
#[allow(dead_code)] // Used across multiple test files
pub const TEST_OUTPUT_LENGTHS: &[usize] = &[1, 16, 31, 32, 33, 48, 63, 64, 65, 100];
