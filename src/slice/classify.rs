use tracing::trace;

use crate::records::ContactRecord;

/// The phone types that route a number to an output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhoneType {
    Mobile,
    Residential,
}

impl PhoneType {
    pub fn as_str(&self) -> &str {
        match self {
            PhoneType::Mobile => "Mobile",
            PhoneType::Residential => "Residential",
        }
    }

    /// The single place phone-type labels are normalized.
    /// Trimmed, case-insensitive, exact; every other label is `None`.
    pub fn classify(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "mobile" => Some(PhoneType::Mobile),
            "residential" => Some(PhoneType::Residential),
            _ => None,
        }
    }
}

/// Numbers of one contact, split by type, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneBuckets {
    pub mobile: Vec<String>,
    pub residential: Vec<String>,
}

impl PhoneBuckets {
    pub fn is_empty(&self) -> bool {
        self.mobile.is_empty() && self.residential.is_empty()
    }
}

/// Scan the contact's slots 1..7 and bucket every non-blank, recognized number.
pub fn classify_phones(contact: &ContactRecord) -> PhoneBuckets {
    let mut buckets = PhoneBuckets::default();
    for (i, slot) in contact.phones.iter().enumerate() {
        let Some(number) = slot.number.as_ref() else {
            continue;
        };
        match PhoneType::classify(&slot.raw_type) {
            Some(PhoneType::Mobile) => buckets.mobile.push(number.clone()),
            Some(PhoneType::Residential) => buckets.residential.push(number.clone()),
            None => trace!(
                key = %contact.key,
                slot = i + 1,
                phone_type = %slot.raw_type,
                "dropping unrecognized phone type"
            ),
        }
    }
    buckets
}
