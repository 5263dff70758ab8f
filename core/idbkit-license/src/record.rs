//! Decoding of the 128-byte plaintext license record.
//!
//! Field layout (integers little-endian):
//!
//! | offset | width | field                          |
//! |--------|-------|--------------------------------|
//! | 0x03   | u16   | format version                 |
//! | 0x11   | u32   | creation time, epoch seconds   |
//! | 0x15   | u32   | reserved, skipped              |
//! | 0x19   | u32   | secondary time, epoch seconds  |
//! | 0x1D   | 6     | raw license id bytes           |
//! | 0x23   | ..    | owner name, NUL-terminated     |

use crate::crypto::USER_BLOB_LEN;
use crate::error::{LicenseError, LicenseResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Byte offset of the format version (u16).
const VERSION_OFFSET: usize = 0x03;
/// Byte offset of the creation timestamp (u32 epoch seconds).
const CREATED_OFFSET: usize = 0x11;
/// Byte offset of the secondary timestamp (u32 epoch seconds).
const SECONDARY_OFFSET: usize = 0x19;
/// Byte offset of the 6 raw license id bytes.
const ID_OFFSET: usize = 0x1D;
/// Byte offset where the NUL-terminated owner name begins.
const NAME_OFFSET: usize = 0x23;

/// The license record recovered from a database user blob.
///
/// Whether the embedded timestamps are genuinely UTC is not documented by
/// the on-disk format. They are interpreted as UTC here, matching how the
/// blob has always been read in practice; treat the zone as an open
/// question of the format rather than a guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// Timestamp the vendor wrote at creation time (database creation,
    /// most likely).
    pub created_at: DateTime<Utc>,
    /// A second vendor timestamp, frequently zero. Zero means
    /// absent/unknown and still decodes to the epoch instant.
    pub secondary_at: DateTime<Utc>,
    /// Normalized license identifier: `XX-XXXX-XXXX-XX`, uppercase hex.
    pub license_id: String,
    /// Name of the user and organization that owns the license.
    pub owner_name: String,
}

/// Decodes a 128-byte plaintext user blob into a [`LicenseRecord`].
///
/// # Errors
///
/// - [`LicenseError::Length`] unless `plaintext` is exactly 128 bytes.
/// - [`LicenseError::VersionUnsupported`] when the version field is 0.
/// - [`LicenseError::MalformedName`] when the name region carries no NUL.
/// - [`LicenseError::Encoding`] when the name bytes are not valid UTF-8.
///
/// All failures are terminal; no partial record is returned.
pub fn decode_user_blob(plaintext: &[u8]) -> LicenseResult<LicenseRecord> {
    if plaintext.len() != USER_BLOB_LEN {
        return Err(LicenseError::Length {
            expected: USER_BLOB_LEN,
            actual: plaintext.len(),
        });
    }

    let version = read_u16(plaintext, VERSION_OFFSET);
    if version == 0 {
        return Err(LicenseError::VersionUnsupported(version));
    }

    let created = read_u32(plaintext, CREATED_OFFSET);
    let secondary = read_u32(plaintext, SECONDARY_OFFSET);

    let id = &plaintext[ID_OFFSET..ID_OFFSET + 6];
    let license_id = format!(
        "{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}",
        id[0], id[1], id[2], id[3], id[4], id[5]
    );

    let name_region = &plaintext[NAME_OFFSET..];
    let nul = name_region
        .iter()
        .position(|&b| b == 0)
        .ok_or(LicenseError::MalformedName)?;
    let owner_name = std::str::from_utf8(&name_region[..nul])?.to_string();

    Ok(LicenseRecord {
        created_at: epoch_to_utc(created),
        secondary_at: epoch_to_utc(secondary),
        license_id,
        owner_name,
    })
}

fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

fn epoch_to_utc(secs: u32) -> DateTime<Utc> {
    // Every u32 second count lies inside chrono's representable range.
    DateTime::from_timestamp(i64::from(secs), 0)
        .expect("u32 epoch seconds are always representable")
}
