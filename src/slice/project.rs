// src/slice/project.rs
//! Row projection for the two outputs.
//!
//! Mobile ("RooR") rows have a fixed 13-column shape. Residential ("RM") rows
//! are four phones, a maps link, and then the property row passed through
//! verbatim, so their width follows the property table loaded at run time.
//!
//! Both outputs keep only the first N numbers of their bucket. Numbers past
//! the limit are dropped; that loss is the intended behavior of the fixed-width
//! formats the two channels import.

use tracing::debug;

use super::merge::MergedRecord;
use crate::table::OutputTable;

/// Phone columns in a mobile row.
pub const MOBILE_PHONE_SLOTS: usize = 3;

/// Phone columns in a residential row.
pub const RESIDENTIAL_PHONE_SLOTS: usize = 4;

pub const MOBILE_HEADERS: [&str; 13] = [
    "FirstName",
    "LastName",
    "Email",
    "PropertyAddress",
    "PropertyCity",
    "PropertyState",
    "PropertyZip",
    "Phone1",
    "Phone2",
    "Phone3",
    "APN",
    "PropertyCounty",
    "Acreage",
];

pub const RESIDENTIAL_PHONE_HEADERS: [&str; RESIDENTIAL_PHONE_SLOTS] =
    ["Phone1", "Phone2", "Phone3", "Phone4"];

pub const MAPS_URL_HEADER: &str = "Google Maps URL";

/// `http://maps.google.com/maps?z=16&t=m&q={lat},{lon}`; values are substituted as-is.
pub fn google_maps_url(latitude: &str, longitude: &str) -> String {
    format!(
        "http://maps.google.com/maps?z=16&t=m&q={},{}",
        latitude, longitude
    )
}

/// First `N` numbers of a bucket, empty strings for the rest.
fn take_slots<const N: usize>(numbers: &[String]) -> [String; N] {
    std::array::from_fn(|i| numbers.get(i).cloned().unwrap_or_default())
}

fn log_truncation(kind: &str, key: &str, have: usize, limit: usize) {
    if have > limit {
        debug!(key, kind, have, limit, "dropping phones beyond output width");
    }
}

/// Empty mobile output table.
pub fn mobile_table() -> OutputTable {
    OutputTable::with_headers(MOBILE_HEADERS)
}

/// Empty residential output table for the given property headers.
pub fn residential_table(property_headers: &[String]) -> OutputTable {
    let mut headers: Vec<String> = RESIDENTIAL_PHONE_HEADERS
        .iter()
        .map(|s| s.to_string())
        .collect();
    headers.push(MAPS_URL_HEADER.to_string());
    headers.extend(property_headers.iter().cloned());
    OutputTable {
        headers,
        rows: Vec::new(),
    }
}

/// Mobile row, in `MOBILE_HEADERS` order.
pub fn mobile_row(merged: &MergedRecord<'_>, mobile: &[String]) -> Vec<String> {
    let c = merged.contact;
    let p = merged.property;
    log_truncation("mobile", &c.key, mobile.len(), MOBILE_PHONE_SLOTS);
    let [phone1, phone2, phone3] = take_slots::<MOBILE_PHONE_SLOTS>(mobile);

    vec![
        c.first_name.clone(),
        c.last_name.clone(),
        p.hyperlink.clone(),
        p.address.clone(),
        p.city.clone(),
        p.state.clone(),
        p.zip.clone(),
        phone1,
        phone2,
        phone3,
        p.apn.clone(),
        p.county.clone(),
        p.acreage.clone(),
    ]
}

/// Residential row: phones, maps URL, then every property value in column order.
pub fn residential_row(merged: &MergedRecord<'_>, residential: &[String]) -> Vec<String> {
    let p = merged.property;
    log_truncation(
        "residential",
        &merged.contact.key,
        residential.len(),
        RESIDENTIAL_PHONE_SLOTS,
    );

    let mut row = Vec::with_capacity(RESIDENTIAL_PHONE_SLOTS + 1 + p.values.len());
    row.extend(take_slots::<RESIDENTIAL_PHONE_SLOTS>(residential));
    row.push(google_maps_url(&p.latitude, &p.longitude));
    row.extend(p.values.iter().cloned());
    row
}
