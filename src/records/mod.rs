// src/records/mod.rs
//! Typed views over the two input tables.
//!
//! Column positions are resolved once per table (`ContactSchema`,
//! `PropertySchema`) and every row is then parsed positionally, so no
//! per-row lookups by column name happen after validation.

pub mod contact;
pub mod property;

pub use contact::{ContactRecord, ContactSchema, PhoneSlot};
pub use property::{PropertyRecord, PropertySchema};

use crate::error::{Result, SlicerError};
use crate::table::RawTable;

/// Number of (number, type) phone slots in a contact row.
pub const PHONE_SLOTS: usize = 7;

pub const CONTACT_KEY: &str = "Input Custom Field 1";
pub const CONTACT_FIRST_NAME: &str = "Matched First Name";
pub const CONTACT_LAST_NAME: &str = "Matched Last Name";

pub const PROPERTY_KEY: &str = "propertyID";
pub const PROPERTY_LATITUDE: &str = "Latitude";
pub const PROPERTY_LONGITUDE: &str = "Longitude";
pub const PROPERTY_HYPERLINK: &str = "Hyperlink";
pub const PROPERTY_ADDRESS: &str = "Parcel Full Address";
pub const PROPERTY_CITY: &str = "Parcel City";
pub const PROPERTY_STATE: &str = "Parcel State";
pub const PROPERTY_ZIP: &str = "Parcel Zip";
pub const PROPERTY_APN: &str = "APN";
pub const PROPERTY_COUNTY: &str = "Parcel County";
pub const PROPERTY_ACREAGE: &str = "Calc Acreage";

/// `Phone{slot}`, 1-based.
pub fn phone_column(slot: usize) -> String {
    format!("Phone{}", slot)
}

/// `Phone{slot} Type`, 1-based.
pub fn phone_type_column(slot: usize) -> String {
    format!("Phone{} Type", slot)
}

/// Validate both inputs and resolve their column layouts.
///
/// Every missing column from either table is reported in a single
/// `SlicerError::MissingColumns`; nothing is parsed unless both pass.
pub fn resolve_schemas(
    contacts: &RawTable,
    properties: &RawTable,
) -> Result<(ContactSchema, PropertySchema)> {
    let mut missing = Vec::new();
    let contact = ContactSchema::resolve(contacts, &mut missing);
    let property = PropertySchema::resolve(properties, &mut missing);

    match (contact, property) {
        (Some(c), Some(p)) if missing.is_empty() => Ok((c, p)),
        _ => Err(SlicerError::MissingColumns { missing }),
    }
}
