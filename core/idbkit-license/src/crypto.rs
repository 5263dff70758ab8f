//! Detection and decryption of the stored user blob.
//!
//! Newer product generations store the license record wrapped in a fixed
//! 1024-bit public-key transform; older ones store it as plaintext. Both
//! functions here are pure transforms over byte buffers with no key
//! negotiation and no state.

use crate::error::{LicenseError, LicenseResult};
use num_bigint::BigUint;

/// Width of the user blob in bytes (1024 bits).
pub const USER_BLOB_LEN: usize = 0x80;

/// Public exponent of the vendor key pair.
const PUBLIC_EXPONENT: u32 = 0x13;

/// The Hex-Rays 1024-bit public modulus, big-endian.
///
/// Recovering plaintext with the PUBLIC exponent is the wrong direction for
/// real asymmetric crypto; it works because the blob is obfuscated rather
/// than confidentially encrypted. Nothing decoded from it is authenticated.
const HEXRAYS_PUBLIC_MODULUS: [u8; USER_BLOB_LEN] = [
    0x93, 0xAF, 0x7A, 0x8E, 0x3A, 0x6E, 0xB9, 0x3D, 0x1B, 0x4D, 0x1F, 0xB7,
    0xEC, 0x29, 0x29, 0x9D, 0x2B, 0xC8, 0xF3, 0xCE, 0x5F, 0x84, 0xBF, 0xE8,
    0x8E, 0x47, 0xDD, 0xBD, 0xD5, 0x55, 0x0C, 0x3C, 0xE3, 0xD2, 0xB1, 0x6A,
    0x2E, 0x2F, 0xBD, 0x0F, 0xBD, 0x91, 0x9E, 0x80, 0x38, 0xBB, 0x05, 0x75,
    0x2E, 0xC9, 0x2D, 0xD1, 0x49, 0x8C, 0xB2, 0x83, 0xAA, 0x08, 0x7A, 0x93,
    0x18, 0x4F, 0x1D, 0xD9, 0xDD, 0x5D, 0x5D, 0xF7, 0x85, 0x73, 0x22, 0xDF,
    0xCD, 0x70, 0x89, 0x0F, 0x81, 0x4B, 0x58, 0x44, 0x80, 0x71, 0xBB, 0xAB,
    0xB0, 0xFC, 0x8A, 0x78, 0x68, 0xB6, 0x2E, 0xB2, 0x9C, 0xC2, 0x66, 0x4C,
    0x8F, 0xE6, 0x1D, 0xFB, 0xC5, 0xDB, 0x0E, 0xE8, 0xBF, 0x6E, 0xCF, 0x0B,
    0x65, 0x25, 0x05, 0x14, 0x57, 0x6C, 0x43, 0x84, 0x58, 0x22, 0x11, 0x89,
    0x6E, 0x54, 0x78, 0xF9, 0x5C, 0x42, 0xFD, 0xED,
];

/// Reports whether a stored blob still looks encrypted.
///
/// Scans for the earliest run of four consecutive zero bytes: a decoded
/// record's name region produces such a run well before offset 0x80, while
/// modular-exponentiation output looks uniformly random, so an earliest run
/// at or past 0x80 marks ciphertext. A buffer with no qualifying run
/// anywhere classifies as plaintext.
///
/// This is a structural heuristic, not a proof; callers accept that
/// pathological inputs can misclassify. Never fails, no side effects.
#[must_use]
pub fn is_encrypted(buf: &[u8]) -> bool {
    buf.windows(4)
        .position(|run| run == [0, 0, 0, 0])
        .is_some_and(|idx| idx >= USER_BLOB_LEN)
}

/// Reverses the fixed public-key transform over the first 128 bytes.
///
/// The stored value is read as a 1024-bit LITTLE-endian integer, raised to
/// the public exponent modulo the vendor key, and serialized back as exactly
/// 128 BIG-endian bytes. The byte-order asymmetry between read and write is
/// a quirk of the on-disk format and must be preserved bit for bit.
///
/// Deterministic and total over well-formed input; bytes past the first 128
/// are ignored.
///
/// # Errors
///
/// Returns [`LicenseError::Length`] if `buf` holds fewer than 128 bytes.
pub fn decrypt_user_blob(buf: &[u8]) -> LicenseResult<[u8; USER_BLOB_LEN]> {
    if buf.len() < USER_BLOB_LEN {
        return Err(LicenseError::Length {
            expected: USER_BLOB_LEN,
            actual: buf.len(),
        });
    }

    let cipher = BigUint::from_bytes_le(&buf[..USER_BLOB_LEN]);
    let modulus = BigUint::from_bytes_be(&HEXRAYS_PUBLIC_MODULUS);
    let plain = cipher.modpow(&BigUint::from(PUBLIC_EXPONENT), &modulus);

    // Left-pad to the full width; the residue is < modulus < 2^1024.
    let bytes = plain.to_bytes_be();
    let mut out = [0u8; USER_BLOB_LEN];
    out[USER_BLOB_LEN - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}
