//! Shared helpers for license blob tests.

#![allow(dead_code)]

/// Offsets mirrored from the record layout.
pub const VERSION_OFFSET: usize = 0x03;
pub const CREATED_OFFSET: usize = 0x11;
pub const SECONDARY_OFFSET: usize = 0x19;
pub const ID_OFFSET: usize = 0x1D;
pub const NAME_OFFSET: usize = 0x23;

/// Width of the user blob.
pub const BLOB_LEN: usize = 0x80;

/// Builds a 128-byte plaintext user blob from record fields.
///
/// `name` is written at the name offset; the zeroed remainder of the buffer
/// supplies the NUL terminator. The name must leave room for it.
pub fn build_blob(version: u16, created: u32, secondary: u32, id: [u8; 6], name: &str) -> Vec<u8> {
    assert!(name.len() < BLOB_LEN - NAME_OFFSET, "name too long for the blob");

    let mut buf = vec![0u8; BLOB_LEN];
    buf[VERSION_OFFSET..VERSION_OFFSET + 2].copy_from_slice(&version.to_le_bytes());
    buf[CREATED_OFFSET..CREATED_OFFSET + 4].copy_from_slice(&created.to_le_bytes());
    buf[SECONDARY_OFFSET..SECONDARY_OFFSET + 4].copy_from_slice(&secondary.to_le_bytes());
    buf[ID_OFFSET..ID_OFFSET + 6].copy_from_slice(&id);
    buf[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name.as_bytes());
    buf
}

/// A canonical valid blob: ACME CORP, id `AB-CDEF-0123-45`, created
/// 2019-05-06T05:43:02Z, secondary absent (zero).
pub fn sample_blob() -> Vec<u8> {
    build_blob(
        2,
        1_557_121_382,
        0,
        [0xAB, 0xCD, 0xEF, 0x01, 0x23, 0x45],
        "ACME CORP",
    )
}

/// A buffer whose earliest four-zero run starts exactly at `idx`.
///
/// Filled with a nonzero byte everywhere else so no other run exists.
pub fn buffer_with_zero_run_at(idx: usize, len: usize) -> Vec<u8> {
    assert!(idx + 4 <= len);
    let mut buf = vec![0x5A; len];
    buf[idx..idx + 4].fill(0);
    buf
}

/// A buffer containing no four-zero run at all.
pub fn buffer_without_zero_run(len: usize) -> Vec<u8> {
    vec![0x5A; len]
}
