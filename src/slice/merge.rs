use std::collections::HashMap;
use tracing::debug;

use crate::records::{ContactRecord, PropertyRecord};

/// A contact and a property sharing a join key.
#[derive(Debug, Clone, Copy)]
pub struct MergedRecord<'a> {
    pub contact: &'a ContactRecord,
    pub property: &'a PropertyRecord,
}

/// Inner join on exact key equality.
///
/// Every matching pair is emitted, so duplicate keys on either side multiply.
/// Output follows contact order, then property order within a key.
#[tracing::instrument(level = "debug", skip_all, fields(contacts = contacts.len(), properties = properties.len()))]
pub fn inner_join<'a>(
    contacts: &'a [ContactRecord],
    properties: &'a [PropertyRecord],
) -> Vec<MergedRecord<'a>> {
    let mut by_key: HashMap<&str, Vec<&PropertyRecord>> = HashMap::new();
    for p in properties {
        by_key.entry(p.key.as_str()).or_default().push(p);
    }

    let mut merged = Vec::new();
    let mut unmatched = 0usize;
    for contact in contacts {
        match by_key.get(contact.key.as_str()) {
            Some(matches) => merged.extend(matches.iter().map(|&property| MergedRecord {
                contact,
                property,
            })),
            None => unmatched += 1,
        }
    }

    debug!(merged = merged.len(), unmatched, "join complete");
    merged
}
