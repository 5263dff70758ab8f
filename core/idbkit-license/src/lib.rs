//! License record recovery for IDA databases.
//!
//! Every database the disassembler writes embeds a copy of the owning
//! user's license record, stored under the `$ original user` netnode.
//! Depending on the product generation the stored value is either the
//! 128-byte record itself or that record wrapped in a fixed 1024-bit
//! public-key transform. This crate classifies the stored blob, reverses
//! the transform when needed, and decodes the record into typed fields:
//!
//! - two UTC timestamps (creation plus a second, frequently-zero instant)
//! - the normalized license id (`XX-XXXX-XXXX-XX`)
//! - the owner name
//!
//! Opening the container and walking its netnode namespace belong to the
//! surrounding database layer, reached through [`NetnodeSource`]. The core
//! itself is pure and synchronous over in-memory byte buffers, so the full
//! pipeline may run concurrently from any number of threads.
//!
//! The transform is reversed with the vendor's PUBLIC exponent. That works
//! because the blob is obfuscated rather than confidentially encrypted; it
//! also means nothing here verifies that the recovered identity is
//! authentic.

mod crypto;
mod error;
pub mod netnode;
mod record;

pub use crypto::{decrypt_user_blob, is_encrypted, USER_BLOB_LEN};
pub use error::{LicenseError, LicenseResult};
pub use netnode::{fetch_license_record, NetnodeSource, USER_NETNODE};
pub use record::{decode_user_blob, LicenseRecord};

/// Recovers the license record from a raw stored blob.
///
/// Runs the full pipeline: classify, decrypt when the blob still looks
/// encrypted, then decode. Plaintext blobs longer than the record width are
/// truncated to 128 bytes first (the container may store trailing data);
/// shorter ones fail the decoder's length check.
///
/// # Errors
///
/// Propagates any [`LicenseError`] from the decryption or decoding stage.
pub fn recover_record(raw: &[u8]) -> LicenseResult<LicenseRecord> {
    if is_encrypted(raw) {
        tracing::debug!(len = raw.len(), "user blob classified as encrypted");
        let plaintext = decrypt_user_blob(raw)?;
        decode_user_blob(&plaintext)
    } else {
        tracing::debug!(len = raw.len(), "user blob classified as plaintext");
        decode_user_blob(&raw[..raw.len().min(USER_BLOB_LEN)])
    }
}
