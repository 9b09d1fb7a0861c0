//! src/crypto/kdf/bcrypt_pbkdf.rs
//! bcrypt_pbkdf: PBKDF2-style stretching with bcrypt as the PRF and a strided
//! output layout.

use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use crate::aliases::{BcryptHash32, DerivedKey, Sha512Digest64};
use crate::consts::{BCRYPT_HASH_SIZE, MIN_ROUNDS, SHA512_DIGEST_SIZE};
use crate::crypto::bhash::bcrypt_hash;
use crate::crypto::blowfish::Blowfish;
use crate::crypto::digest::sha512_into;
use crate::crypto::memlock::LockedBox;
use crate::error::BcryptPbkdfError;

/// Derive `output.len()` bytes of key material into a caller-provided buffer.
///
/// - `password` and `salt` must be non-empty
/// - `rounds` is the outer stretch factor (≥ 1); runtime grows linearly with it
/// - `output` must be non-empty; every byte is overwritten
///
/// Arguments are validated before any hashing. On error `output` is left
/// untouched (validation) or zeroed (internal failure), never partially filled.
///
/// # Security
/// - Pre-hashed password, salt digests, accumulators and cipher state are
///   zeroized before returning, on every path
/// - With the `mlock` feature the cipher state and pre-hashed password are kept
///   out of swap while live
pub fn bcrypt_pbkdf(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    output: &mut [u8],
) -> Result<(), BcryptPbkdfError> {
    let block_count = validate_params(password, salt, rounds, output.len())?;
    debug!(rounds, output_len = output.len(), block_count, "bcrypt_pbkdf: deriving");

    if let Err(e) = derive_sequential(password, salt, rounds, block_count, output) {
        output.zeroize();
        return Err(e);
    }

    debug!(output_len = output.len(), "bcrypt_pbkdf: done");
    Ok(())
}

/// Derive a freshly allocated key of `output_len` bytes.
///
/// The returned [`DerivedKey`] is wiped when dropped.
pub fn derive_bcrypt_pbkdf_key(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    output_len: usize,
) -> Result<DerivedKey, BcryptPbkdfError> {
    // Validate before allocating so a bogus length never reaches the allocator.
    validate_params(password, salt, rounds, output_len)?;

    let mut key = Zeroizing::new(vec![0u8; output_len]);
    bcrypt_pbkdf(password, salt, rounds, &mut key)?;
    Ok(key)
}

fn derive_sequential(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    block_count: u32,
    output: &mut [u8],
) -> Result<(), BcryptPbkdfError> {
    let prehashed_password = prehash_password(password);

    // One cipher for every block; bcrypt_hash resets it on entry.
    let mut cipher = LockedBox::new(Blowfish::new());
    let mut accumulator: BcryptHash32 = Zeroizing::new([0u8; BCRYPT_HASH_SIZE]);

    for block_index in 0..block_count {
        derive_block(
            &mut cipher,
            &prehashed_password,
            salt,
            rounds,
            block_index,
            &mut accumulator,
        )?;
        scatter_block(&accumulator, block_index, block_count, output);
    }
    Ok(())
}

/// Check every precondition and return the number of 32-byte output blocks.
pub(crate) fn validate_params(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    output_len: usize,
) -> Result<u32, BcryptPbkdfError> {
    if password.is_empty() {
        return Err(invalid_argument("password must not be empty"));
    }
    if salt.is_empty() {
        return Err(invalid_argument("salt must not be empty"));
    }
    if rounds < MIN_ROUNDS {
        return Err(invalid_argument("rounds must be ≥1"));
    }
    if output_len == 0 {
        return Err(invalid_argument("output length must be ≥1"));
    }

    // The block counter is hashed as a big-endian u32 and is 1-based.
    u32::try_from(output_len.div_ceil(BCRYPT_HASH_SIZE))
        .map_err(|_| invalid_argument("output length exceeds the 32-bit block counter"))
}

fn invalid_argument(reason: &str) -> BcryptPbkdfError {
    debug!(reason, "bcrypt_pbkdf: rejected parameters");
    BcryptPbkdfError::InvalidArgument(reason.to_string())
}

/// SHA-512 of the password, in pinned and zeroized storage.
pub(crate) fn prehash_password(password: &[u8]) -> LockedBox<[u8; SHA512_DIGEST_SIZE]> {
    let mut prehashed = LockedBox::new([0u8; SHA512_DIGEST_SIZE]);
    sha512_into(&[password], &mut prehashed);
    prehashed
}

/// Compute the XOR-accumulated bcrypt stream for one output block.
///
/// `block_index` is 0-based; the counter mixed into the salt is `block_index + 1`.
pub(crate) fn derive_block(
    cipher: &mut Blowfish,
    prehashed_password: &[u8; SHA512_DIGEST_SIZE],
    salt: &[u8],
    rounds: u32,
    block_index: u32,
    accumulator: &mut [u8; BCRYPT_HASH_SIZE],
) -> Result<(), BcryptPbkdfError> {
    trace!(block_index, "bcrypt_pbkdf: block");

    let counter = (block_index + 1).to_be_bytes();
    let mut salt_digest: Sha512Digest64 = Zeroizing::new([0u8; SHA512_DIGEST_SIZE]);
    sha512_into(&[salt, &counter[..]], &mut salt_digest);

    let mut round_output: BcryptHash32 = Zeroizing::new([0u8; BCRYPT_HASH_SIZE]);
    bcrypt_hash(cipher, prehashed_password, &salt_digest, &mut round_output)?;
    accumulator.copy_from_slice(&round_output[..]);

    for _ in 1..rounds {
        // Re-salt with the previous bcrypt output only.
        sha512_into(&[&round_output[..]], &mut salt_digest);
        bcrypt_hash(cipher, prehashed_password, &salt_digest, &mut round_output)?;

        for (acc, byte) in accumulator.iter_mut().zip(round_output.iter()) {
            *acc ^= byte;
        }
    }
    Ok(())
}

/// Write one block's bytes to `output[i * block_count + block_index]`.
///
/// Blocks are interleaved, not concatenated; destinations past the end of
/// `output` are dropped.
pub(crate) fn scatter_block(
    accumulator: &[u8; BCRYPT_HASH_SIZE],
    block_index: u32,
    block_count: u32,
    output: &mut [u8],
) {
    let (block_index, stride) = (block_index as usize, block_count as usize);
    for (i, &byte) in accumulator.iter().enumerate() {
        let dest = i * stride + block_index;
        if dest >= output.len() {
            break;
        }
        output[dest] = byte;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_count_rounds_up() {
        assert_eq!(validate_params(b"p", b"s", 1, 1).unwrap(), 1);
        assert_eq!(validate_params(b"p", b"s", 1, 32).unwrap(), 1);
        assert_eq!(validate_params(b"p", b"s", 1, 33).unwrap(), 2);
        assert_eq!(validate_params(b"p", b"s", 1, 64).unwrap(), 2);
        assert_eq!(validate_params(b"p", b"s", 1, 1024).unwrap(), 32);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn block_counter_ceiling() {
        let max_len = BCRYPT_HASH_SIZE * u32::MAX as usize;
        assert_eq!(validate_params(b"p", b"s", 1, max_len).unwrap(), u32::MAX);

        let expected = BcryptPbkdfError::InvalidArgument(
            "output length exceeds the 32-bit block counter".into(),
        );
        assert_eq!(validate_params(b"p", b"s", 1, max_len + 1).unwrap_err(), expected);
        assert_eq!(validate_params(b"p", b"s", 1, usize::MAX).unwrap_err(), expected);
    }

    #[test]
    fn scatter_interleaves_blocks() {
        let mut output = [0u8; 5];
        let first: [u8; 32] = core::array::from_fn(|i| i as u8 * 2);
        let second: [u8; 32] = core::array::from_fn(|i| i as u8 * 2 + 1);

        // 5 bytes over 2 blocks: block 0 -> 0, 2, 4; block 1 -> 1, 3.
        scatter_block(&first, 0, 2, &mut output);
        scatter_block(&second, 1, 2, &mut output);
        assert_eq!(output, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn scatter_single_block_is_a_prefix_copy() {
        let mut output = [0u8; 20];
        let block: [u8; 32] = core::array::from_fn(|i| 100 + i as u8);
        scatter_block(&block, 0, 1, &mut output);
        assert_eq!(&output[..], &block[..20]);
    }

    #[test]
    fn validation_order_reports_first_problem() {
        let err = validate_params(b"", b"", 0, 0).unwrap_err();
        assert_eq!(
            err,
            BcryptPbkdfError::InvalidArgument("password must not be empty".into())
        );
    }
}
