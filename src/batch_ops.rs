//! Parallel derivation (feature `batch-ops`).
//!
//! Output blocks of one derivation are independent except for sharing the
//! pre-hashed password, so they can run on separate threads, each with its own
//! cipher state. Independent derivations parallelize trivially.

use rayon::prelude::*;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::aliases::BcryptHash32;
use crate::consts::BCRYPT_HASH_SIZE;
use crate::crypto::blowfish::Blowfish;
use crate::crypto::kdf::bcrypt_pbkdf::{
    bcrypt_pbkdf, derive_block, prehash_password, scatter_block, validate_params,
};
use crate::crypto::memlock::LockedBox;
use crate::error::BcryptPbkdfError;

/// [`bcrypt_pbkdf`] with output blocks computed concurrently on the rayon pool.
///
/// Produces byte-identical output. Only pays off when `output.len() > 32`.
pub fn bcrypt_pbkdf_parallel(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    output: &mut [u8],
) -> Result<(), BcryptPbkdfError> {
    let block_count = validate_params(password, salt, rounds, output.len())?;
    debug!(rounds, output_len = output.len(), block_count, "bcrypt_pbkdf: deriving in parallel");

    let prehashed_password = prehash_password(password);
    let blocks = (0..block_count)
        .into_par_iter()
        .map(|block_index| -> Result<BcryptHash32, BcryptPbkdfError> {
            let mut cipher = LockedBox::new(Blowfish::new());
            let mut accumulator: BcryptHash32 = Zeroizing::new([0u8; BCRYPT_HASH_SIZE]);
            derive_block(
                &mut cipher,
                &prehashed_password,
                salt,
                rounds,
                block_index,
                &mut accumulator,
            )?;
            Ok(accumulator)
        })
        .collect::<Result<Vec<BcryptHash32>, BcryptPbkdfError>>();

    let blocks = match blocks {
        Ok(blocks) => blocks,
        Err(e) => {
            output.zeroize();
            return Err(e);
        }
    };

    for (block_index, accumulator) in (0..block_count).zip(blocks.iter()) {
        scatter_block(accumulator, block_index, block_count, output);
    }
    Ok(())
}

/// Run many derivations sharing one password and round count.
///
/// Each job is a `(salt, output)` pair; outputs are filled in place. Stops at the
/// first error.
pub fn derive_batch<S, O>(
    password: &[u8],
    rounds: u32,
    jobs: &mut [(S, O)],
) -> Result<(), BcryptPbkdfError>
where
    S: AsRef<[u8]> + Send,
    O: AsMut<[u8]> + Send,
{
    jobs.par_iter_mut()
        .try_for_each(|(salt, output)| bcrypt_pbkdf(password, salt.as_ref(), rounds, output.as_mut()))
}
