//! The collaborator seam towards the container database.
//!
//! Opening a database and walking its netnode namespace is the surrounding
//! database layer's job. That layer implements [`NetnodeSource`]; this crate
//! only consumes the raw bytes it hands back.

use crate::error::LicenseResult;
use crate::record::LicenseRecord;
use crate::recover_record;

/// Netnode under which the vendor stores the license blob (value slot 0).
pub const USER_NETNODE: &str = "$ original user";

/// Access to raw netnode values, implemented by the database layer.
pub trait NetnodeSource {
    /// Fetches the raw stored value for the given netnode key.
    ///
    /// Failures surface as [`crate::LicenseError::Netnode`] and propagate
    /// unmodified through the recovery pipeline.
    fn fetch_raw_value(&self, key: &str) -> LicenseResult<Vec<u8>>;
}

/// Fetches the user blob from `source` and recovers the license record.
///
/// # Errors
///
/// Propagates the source's fetch error and any decryption or decoding error
/// unmodified.
pub fn fetch_license_record(source: &impl NetnodeSource) -> LicenseResult<LicenseRecord> {
    let raw = source.fetch_raw_value(USER_NETNODE)?;
    recover_record(&raw)
}

/// An in-memory source for testing.
pub mod mock {
    use super::NetnodeSource;
    use crate::error::{LicenseError, LicenseResult};
    use std::collections::HashMap;

    /// A mock netnode store backed by a map.
    #[derive(Debug, Default)]
    pub struct MockNetnodes {
        values: HashMap<String, Vec<u8>>,
    }

    impl MockNetnodes {
        /// Creates an empty store.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Stores a raw value under `key`.
        pub fn insert(&mut self, key: impl Into<String>, value: Vec<u8>) {
            self.values.insert(key.into(), value);
        }
    }

    impl NetnodeSource for MockNetnodes {
        fn fetch_raw_value(&self, key: &str) -> LicenseResult<Vec<u8>> {
            self.values
                .get(key)
                .cloned()
                .ok_or_else(|| LicenseError::Netnode(format!("no netnode named {key:?}")))
        }
    }
}
