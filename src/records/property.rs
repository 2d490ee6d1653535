use super::{
    PROPERTY_ACREAGE, PROPERTY_ADDRESS, PROPERTY_APN, PROPERTY_CITY, PROPERTY_COUNTY,
    PROPERTY_HYPERLINK, PROPERTY_KEY, PROPERTY_LATITUDE, PROPERTY_LONGITUDE, PROPERTY_STATE,
    PROPERTY_ZIP,
};
use crate::error::{MissingColumn, TableKind};
use crate::table::RawTable;

const REQUIRED: [&str; 11] = [
    PROPERTY_KEY,
    PROPERTY_LATITUDE,
    PROPERTY_LONGITUDE,
    PROPERTY_HYPERLINK,
    PROPERTY_ADDRESS,
    PROPERTY_CITY,
    PROPERTY_STATE,
    PROPERTY_ZIP,
    PROPERTY_APN,
    PROPERTY_COUNTY,
    PROPERTY_ACREAGE,
];

/// Column positions of a validated property table, plus its live header list.
#[derive(Debug, Clone)]
pub struct PropertySchema {
    /// Every property column, in input order. Drives the residential pass-through.
    pub headers: Vec<String>,
    idx: [usize; REQUIRED.len()],
}

impl PropertySchema {
    pub fn resolve(table: &RawTable, missing: &mut Vec<MissingColumn>) -> Option<Self> {
        let resolved: Option<Vec<usize>> = table
            .resolve_columns(TableKind::Properties, &REQUIRED, missing)
            .into_iter()
            .collect();
        let idx: [usize; REQUIRED.len()] = resolved?.try_into().ok()?;
        Some(Self {
            headers: table.headers.clone(),
            idx,
        })
    }

    pub fn parse_row(&self, row: &[String]) -> PropertyRecord {
        let cell = |n: usize| row.get(self.idx[n]).cloned().unwrap_or_default();
        let mut values = row.to_vec();
        values.resize(self.headers.len(), String::new());
        PropertyRecord {
            key: cell(0),
            latitude: cell(1),
            longitude: cell(2),
            hyperlink: cell(3),
            address: cell(4),
            city: cell(5),
            state: cell(6),
            zip: cell(7),
            apn: cell(8),
            county: cell(9),
            acreage: cell(10),
            values,
        }
    }

    pub fn parse_all(&self, table: &RawTable) -> Vec<PropertyRecord> {
        table.rows.iter().map(|r| self.parse_row(r)).collect()
    }
}

/// One Land Portal row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    /// Join key, exactly as read.
    pub key: String,
    pub latitude: String,
    pub longitude: String,
    /// Carried into the mobile output's `Email` column.
    pub hyperlink: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub apn: String,
    pub county: String,
    pub acreage: String,
    /// Full row, aligned with `PropertySchema::headers`.
    pub values: Vec<String>,
}
