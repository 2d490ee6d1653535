use serde::Serialize;
use std::{fs, path::Path};
use tracing::info;

use super::classify::classify_phones;
use crate::error::{Result, SlicerError};
use crate::records::ContactRecord;

/// Aggregate counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SliceStats {
    pub contact_records: usize,
    pub property_records: usize,
    pub merged_records: usize,
    /// Mobile numbers across the whole contact table, before the join.
    pub total_mobile_phones: usize,
    /// Residential numbers across the whole contact table, before the join.
    pub total_residential_phones: usize,
    pub mobile_rows: usize,
    pub residential_rows: usize,
}

impl SliceStats {
    /// Count classified phones over every contact, matched or not.
    pub fn count_phones(&mut self, contacts: &[ContactRecord]) {
        for c in contacts {
            let b = classify_phones(c);
            self.total_mobile_phones += b.mobile.len();
            self.total_residential_phones += b.residential.len();
        }
    }

    pub fn log(&self) {
        info!(
            contacts = self.contact_records,
            properties = self.property_records,
            merged = self.merged_records,
            mobile_phones = self.total_mobile_phones,
            residential_phones = self.total_residential_phones,
            mobile_rows = self.mobile_rows,
            residential_rows = self.residential_rows,
            "slice stats"
        );
    }

    /// Persist as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let body = serde_json::to_string_pretty(self)?;
        fs::write(path, body).map_err(|source| SlicerError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
