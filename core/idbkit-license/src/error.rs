//! Error types for license blob recovery.

use thiserror::Error;

/// Errors raised while recovering or decoding a user blob.
///
/// All variants are deterministic, input-driven failures. They are raised at
/// the point of detection and propagate unmodified to the caller; no partial
/// record is ever returned.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Input buffer does not carry the expected number of bytes at a stage
    /// boundary (decryption needs at least 128, decoding exactly 128).
    #[error("invalid user blob length: expected {expected} bytes, got {actual}")]
    Length {
        /// Byte count the stage requires.
        expected: usize,
        /// Byte count actually supplied.
        actual: usize,
    },

    /// The blob carries a format version this decoder does not understand.
    #[error("user blob version {0} is not supported")]
    VersionUnsupported(u16),

    /// No NUL terminator found in the owner name region.
    #[error("owner name is missing its NUL terminator")]
    MalformedName,

    /// Owner name bytes are not valid UTF-8.
    #[error("owner name is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The surrounding database layer failed to produce the raw value.
    #[error("netnode read failed: {0}")]
    Netnode(String),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
