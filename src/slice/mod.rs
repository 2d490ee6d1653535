// src/slice/mod.rs
pub mod classify;
pub mod merge;
pub mod project;
pub mod stats;

pub use classify::{classify_phones, PhoneBuckets, PhoneType};
pub use merge::{inner_join, MergedRecord};
pub use stats::SliceStats;

use tracing::{info, trace};

use crate::error::Result;
use crate::records::resolve_schemas;
use crate::table::{OutputTable, RawTable};

/// Both output tables plus the run's statistics.
#[derive(Debug, Clone)]
pub struct SliceOutput {
    pub mobile: OutputTable,
    pub residential: OutputTable,
    pub stats: SliceStats,
}

/// Validate, join, classify and project.
///
/// Schema problems in either table fail the whole run before any row is
/// touched. Per-record oddities (blank phones, unknown types, odd coordinates,
/// overflowing buckets) never fail; they only shape that record's output.
#[tracing::instrument(level = "info", skip_all, fields(contacts = contacts.len(), properties = properties.len()))]
pub fn run(contacts: &RawTable, properties: &RawTable) -> Result<SliceOutput> {
    let (contact_schema, property_schema) = resolve_schemas(contacts, properties)?;

    let contact_records = contact_schema.parse_all(contacts);
    let property_records = property_schema.parse_all(properties);

    let mut stats = SliceStats {
        contact_records: contact_records.len(),
        property_records: property_records.len(),
        ..SliceStats::default()
    };
    stats.count_phones(&contact_records);

    let merged = inner_join(&contact_records, &property_records);
    stats.merged_records = merged.len();
    info!(merged = merged.len(), "joined contacts to properties");

    let mut mobile = project::mobile_table();
    let mut residential = project::residential_table(&property_schema.headers);

    for m in &merged {
        let buckets = classify_phones(m.contact);
        if buckets.is_empty() {
            trace!(key = %m.contact.key, "no mobile or residential phones");
            continue;
        }
        if !buckets.mobile.is_empty() {
            mobile.push(project::mobile_row(m, &buckets.mobile));
        }
        if !buckets.residential.is_empty() {
            residential.push(project::residential_row(m, &buckets.residential));
        }
    }

    stats.mobile_rows = mobile.len();
    stats.residential_rows = residential.len();

    Ok(SliceOutput {
        mobile,
        residential,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlicerError;
    use crate::records::{phone_column, phone_type_column, PHONE_SLOTS};
    use anyhow::Result;
    use std::io::Cursor;
    use std::path::Path;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,skipslicer=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn contact_header() -> String {
        let mut cols = vec![
            "Input Custom Field 1".to_string(),
            "Matched First Name".to_string(),
            "Matched Last Name".to_string(),
        ];
        for slot in 1..=PHONE_SLOTS {
            cols.push(phone_column(slot));
            cols.push(phone_type_column(slot));
        }
        cols.join(",")
    }

    /// One contact CSV line: key, names, then up to 7 (number, type) pairs.
    fn contact_line(key: &str, first: &str, phones: &[(&str, &str)]) -> String {
        let mut cells = vec![key.to_string(), first.to_string(), "Smith".to_string()];
        for slot in 0..PHONE_SLOTS {
            let (n, t) = phones.get(slot).copied().unwrap_or(("", ""));
            cells.push(n.to_string());
            cells.push(t.to_string());
        }
        cells.join(",")
    }

    const PROPERTY_HEADER: &str = "propertyID,Owner,Latitude,Longitude,Hyperlink,Parcel Full Address,Parcel City,Parcel State,Parcel Zip,APN,Parcel County,Calc Acreage,Zoning";

    fn property_line(key: &str, lat: &str, lon: &str) -> String {
        format!(
            "{key},Owner {key},{lat},{lon},https://lp.test/{key},\"{key} Bayou Rd, Apt 2\",Houma,LA,70360,APN-{key},Terrebonne,1.25,AG"
        )
    }

    fn table(header: &str, lines: &[String]) -> Result<RawTable> {
        let body = format!("{}\n{}\n", header, lines.join("\n"));
        Ok(RawTable::from_reader(Cursor::new(body), Path::new("<memory>"))?)
    }

    #[test]
    fn test_mixed_contact_lands_in_both_outputs() -> Result<()> {
        init_test_logging();
        let contacts = table(
            &contact_header(),
            &[contact_line(
                "1",
                "Ann",
                &[("555-0001", "Mobile"), ("555-0002", "Residential")],
            )],
        )?;
        let properties = table(PROPERTY_HEADER, &[property_line("1", "30.0", "-90.0")])?;

        let out = run(&contacts, &properties)?;

        assert_eq!(out.mobile.len(), 1);
        let m = &out.mobile.rows[0];
        assert_eq!(&m[7..10], &["555-0001", "", ""]);
        assert_eq!(m[2], "https://lp.test/1");

        assert_eq!(out.residential.len(), 1);
        let r = &out.residential.rows[0];
        assert_eq!(&r[..4], &["555-0002", "", "", ""]);
        assert_eq!(r[4], "http://maps.google.com/maps?z=16&t=m&q=30.0,-90.0");
        assert_eq!(r[5], "1");
        assert_eq!(r[10], "1 Bayou Rd, Apt 2");
        assert_eq!(r.last().map(String::as_str), Some("AG"));
        Ok(())
    }

    #[test]
    fn test_unmatched_and_pager_contacts_emit_nothing() -> Result<()> {
        let contacts = table(
            &contact_header(),
            &[
                contact_line("404", "Lost", &[("555-0001", "Mobile")]),
                contact_line(
                    "1",
                    "Pat",
                    &[("555-0003", "Pager"), ("555-0004", "Pager"), ("555-0005", "Pager")],
                ),
            ],
        )?;
        let properties = table(PROPERTY_HEADER, &[property_line("1", "30.0", "-90.0")])?;

        let out = run(&contacts, &properties)?;
        assert_eq!(out.stats.merged_records, 1);
        assert!(out.mobile.is_empty());
        assert!(out.residential.is_empty());
        // phones from the unmatched contact still count
        assert_eq!(out.stats.total_mobile_phones, 1);
        Ok(())
    }

    #[test]
    fn test_residential_header_tracks_property_columns() -> Result<()> {
        let contacts = table(
            &contact_header(),
            &[contact_line("1", "Ann", &[("555-0002", "residential")])],
        )?;
        let properties = table(PROPERTY_HEADER, &[property_line("1", "", "")])?;

        let out = run(&contacts, &properties)?;
        let mut expected: Vec<String> = ["Phone1", "Phone2", "Phone3", "Phone4", "Google Maps URL"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        expected.extend(PROPERTY_HEADER.split(',').map(str::to_string));
        assert_eq!(out.residential.headers, expected);
        assert_eq!(out.residential.rows[0].len(), expected.len());
        assert_eq!(
            out.residential.rows[0][4],
            "http://maps.google.com/maps?z=16&t=m&q=,"
        );
        Ok(())
    }

    #[test]
    fn test_stats_and_duplicate_keys() -> Result<()> {
        let contacts = table(
            &contact_header(),
            &[
                contact_line(
                    "1",
                    "Ann",
                    &[
                        ("m1", "Mobile"),
                        ("m2", "Mobile"),
                        ("m3", "Mobile"),
                        ("m4", "Mobile"),
                        ("r1", "Residential"),
                    ],
                ),
                contact_line("2", "Bo", &[("r2", "Residential")]),
            ],
        )?;
        let properties = table(
            PROPERTY_HEADER,
            &[
                property_line("1", "29.1", "-90.7"),
                property_line("1", "29.2", "-90.8"),
                property_line("3", "0", "0"),
            ],
        )?;

        let out = run(&contacts, &properties)?;
        assert_eq!(
            out.stats,
            SliceStats {
                contact_records: 2,
                property_records: 3,
                merged_records: 2,
                total_mobile_phones: 4,
                total_residential_phones: 2,
                mobile_rows: 2,
                residential_rows: 2,
            }
        );
        for row in &out.mobile.rows {
            assert_eq!(&row[7..10], &["m1", "m2", "m3"]);
        }
        Ok(())
    }

    #[test]
    fn test_missing_columns_abort_before_join() -> Result<()> {
        let contacts = table(&contact_header().replace(",Phone5 Type", ""), &[])?;
        let properties = table(&PROPERTY_HEADER.replace(",Hyperlink", ""), &[])?;

        let err = run(&contacts, &properties).unwrap_err();
        let SlicerError::MissingColumns { missing } = err else {
            panic!("expected schema error");
        };
        let cols: Vec<&str> = missing.iter().map(|m| m.column.as_str()).collect();
        assert_eq!(cols, vec!["Phone5 Type", "Hyperlink"]);
        Ok(())
    }

    #[test]
    fn test_run_is_deterministic() -> Result<()> {
        let contacts = table(
            &contact_header(),
            &[
                contact_line("1", "Ann", &[("1", "Mobile"), ("2", "Residential")]),
                contact_line("2", "Bo", &[("3", "MOBILE")]),
            ],
        )?;
        let properties = table(
            PROPERTY_HEADER,
            &[property_line("2", "1", "2"), property_line("1", "3", "4")],
        )?;

        let a = run(&contacts, &properties)?;
        let b = run(&contacts, &properties)?;
        for (x, y) in [(&a.mobile, &b.mobile), (&a.residential, &b.residential)] {
            let (mut bx, mut by) = (Vec::new(), Vec::new());
            x.write_csv(&mut bx)?;
            y.write_csv(&mut by)?;
            assert_eq!(bx, by);
        }
        Ok(())
    }
}
