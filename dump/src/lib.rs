//! Input loading and record rendering for the dump tool.
//!
//! The binary consumes a previously exported netnode value as a file and
//! prints the recovered record. Loading and rendering live here so they can
//! be tested without going through the process boundary.

use std::path::Path;

use anyhow::{Context, Result};
use idbkit_license::LicenseRecord;

/// Timestamp rendering used by the plain output.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Reads a stored user blob from disk.
///
/// With `hex_input` set the file is treated as hex text (surrounding
/// whitespace ignored); otherwise its bytes are used as-is.
///
/// # Errors
///
/// Fails when the file cannot be read or the hex text does not decode.
pub fn load_blob(path: &Path, hex_input: bool) -> Result<Vec<u8>> {
    if hex_input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        hex::decode(text.trim())
            .with_context(|| format!("{} does not hold valid hex", path.display()))
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Renders the record one field per line, values aligned.
///
/// Timestamps print as UTC without zone conversion; whether the embedded
/// epochs are truly UTC is an open question of the format, and the `Z`
/// suffix reflects the long-standing assumption rather than a guarantee.
#[must_use]
pub fn render_plain(record: &LicenseRecord) -> String {
    format!(
        "owner:     {}\nlicense:   {}\ncreated:   {}\nsecondary: {}\n",
        record.owner_name,
        record.license_id,
        record.created_at.format(TIMESTAMP_FORMAT),
        record.secondary_at.format(TIMESTAMP_FORMAT),
    )
}

/// Renders the record as pretty-printed JSON.
///
/// # Errors
///
/// Fails when the record cannot be serialized.
pub fn render_json(record: &LicenseRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("failed to serialize the record")
}
