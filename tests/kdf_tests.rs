//! tests/kdf_tests.rs
//! bcrypt_pbkdf properties: determinism, length contract, sensitivity, errors

mod common;

use bcrypt_pbkdf_rs::{bcrypt_pbkdf, derive_bcrypt_pbkdf_key, BcryptPbkdfError};
use common::{FAST_ROUNDS, TEST_OUTPUT_LENGTHS, TEST_PASSWORD, TEST_SALT};

fn derive(password: &[u8], salt: &[u8], rounds: u32, len: usize) -> Vec<u8> {
    derive_bcrypt_pbkdf_key(password, salt, rounds, len)
        .unwrap()
        .to_vec()
}

#[test]
fn deterministic() {
    let first = derive(TEST_PASSWORD, TEST_SALT, FAST_ROUNDS, 48);
    let second = derive(TEST_PASSWORD, TEST_SALT, FAST_ROUNDS, 48);
    assert_eq!(first, second);
}

#[test]
fn output_length_matches_request() {
    for &len in TEST_OUTPUT_LENGTHS {
        let key = derive_bcrypt_pbkdf_key(TEST_PASSWORD, TEST_SALT, 1, len).unwrap();
        assert_eq!(key.len(), len, "requested {len} bytes");
    }
}

#[test]
fn every_output_byte_is_written() {
    // Two different sentinel fills must be overwritten identically.
    for &len in TEST_OUTPUT_LENGTHS {
        let mut zeros = vec![0x00u8; len];
        let mut ones = vec![0xffu8; len];
        bcrypt_pbkdf(TEST_PASSWORD, TEST_SALT, 1, &mut zeros).unwrap();
        bcrypt_pbkdf(TEST_PASSWORD, TEST_SALT, 1, &mut ones).unwrap();
        assert_eq!(zeros, ones, "unwritten bytes at len {len}");
    }
}

#[test]
fn same_block_count_shares_layout() {
    // 33 and 64 bytes both use two blocks, so the shorter is a prefix.
    let short = derive(TEST_PASSWORD, TEST_SALT, 1, 33);
    let long = derive(TEST_PASSWORD, TEST_SALT, 1, 64);
    assert_eq!(&long[..33], &short[..]);
}

#[test]
fn single_block_lengths_share_prefix() {
    let full = derive(TEST_PASSWORD, TEST_SALT, 1, 32);
    for len in [1, 7, 16, 31] {
        assert_eq!(derive(TEST_PASSWORD, TEST_SALT, 1, len), &full[..len], "len {len}");
    }
}

#[test]
fn single_bit_password_change_changes_output() {
    let base = derive(TEST_PASSWORD, TEST_SALT, FAST_ROUNDS, 32);

    for byte in 0..TEST_PASSWORD.len() {
        let mut flipped = TEST_PASSWORD.to_vec();
        flipped[byte] ^= 0x01;
        assert_ne!(derive(&flipped, TEST_SALT, FAST_ROUNDS, 32), base, "byte {byte}");
    }
}

#[test]
fn single_bit_salt_change_changes_output() {
    let base = derive(TEST_PASSWORD, TEST_SALT, FAST_ROUNDS, 32);

    for bit in [0, 7, 64, 127] {
        let mut flipped = TEST_SALT.to_vec();
        flipped[bit / 8] ^= 1 << (bit % 8);
        assert_ne!(derive(TEST_PASSWORD, &flipped, FAST_ROUNDS, 32), base, "bit {bit}");
    }
}

#[test]
fn rounds_change_output() {
    let outputs: Vec<Vec<u8>> = (1..=4)
        .map(|rounds| derive(TEST_PASSWORD, TEST_SALT, rounds, 32))
        .collect();

    for i in 0..outputs.len() {
        for j in (i + 1)..outputs.len() {
            assert_ne!(outputs[i], outputs[j], "rounds {} vs {}", i + 1, j + 1);
        }
    }
}

#[test]
fn long_password_and_salt_accepted() {
    // Longer than the 72-byte bcrypt key limit; pre-hashing makes it irrelevant.
    let password = vec![b'a'; 1000];
    let salt = vec![0x5a; 500];

    let key = derive(&password, &salt, 1, 32);
    assert_eq!(key.len(), 32);

    let mut truncated = password.clone();
    truncated.truncate(72);
    assert_ne!(derive(&truncated, &salt, 1, 32), key);
}

#[test]
fn large_output_spans_many_blocks() {
    let key = derive(TEST_PASSWORD, TEST_SALT, 1, 1025);
    assert_eq!(key.len(), 1025);
    assert!(key.iter().any(|&b| b != 0));
}

#[test]
fn invalid_arguments_rejected() {
    let cases: &[(&[u8], &[u8], u32, usize, &str)] = &[
        (b"", TEST_SALT, 64, 32, "password must not be empty"),
        (TEST_PASSWORD, b"", 64, 32, "salt must not be empty"),
        (TEST_PASSWORD, TEST_SALT, 0, 32, "rounds must be ≥1"),
        (TEST_PASSWORD, TEST_SALT, 64, 0, "output length must be ≥1"),
    ];

    for &(password, salt, rounds, len, reason) in cases {
        let err = derive_bcrypt_pbkdf_key(password, salt, rounds, len).unwrap_err();
        assert_eq!(err, BcryptPbkdfError::InvalidArgument(reason.to_string()));
        assert_eq!(err.to_string(), format!("Invalid argument: {reason}"));
    }
}

#[test]
fn invalid_arguments_leave_output_untouched() {
    let sentinel = [0xa5u8; 32];

    let mut out = sentinel;
    assert!(bcrypt_pbkdf(b"", TEST_SALT, 64, &mut out).is_err());
    assert_eq!(out, sentinel);

    let mut out = sentinel;
    assert!(bcrypt_pbkdf(TEST_PASSWORD, b"", 64, &mut out).is_err());
    assert_eq!(out, sentinel);

    let mut out = sentinel;
    assert!(bcrypt_pbkdf(TEST_PASSWORD, TEST_SALT, 0, &mut out).is_err());
    assert_eq!(out, sentinel);

    let mut empty: [u8; 0] = [];
    assert!(matches!(
        bcrypt_pbkdf(TEST_PASSWORD, TEST_SALT, 64, &mut empty),
        Err(BcryptPbkdfError::InvalidArgument(_))
    ));
}

#[test]
fn outputs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BcryptPbkdfError>();
    assert_send_sync::<bcrypt_pbkdf_rs::aliases::DerivedKey>();
    assert_send_sync::<bcrypt_pbkdf_rs::BcryptPbkdfBuilder>();
}

#[test]
fn concurrent_calls_agree() {
    let expected = derive(TEST_PASSWORD, TEST_SALT, FAST_ROUNDS, 40);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| derive(TEST_PASSWORD, TEST_SALT, FAST_ROUNDS, 40)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
