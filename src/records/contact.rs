use super::{
    phone_column, phone_type_column, CONTACT_FIRST_NAME, CONTACT_KEY, CONTACT_LAST_NAME,
    PHONE_SLOTS,
};
use crate::error::{MissingColumn, TableKind};
use crate::table::{utils::canonical_phone, RawTable};

/// Column positions of a validated contact table.
#[derive(Debug, Clone)]
pub struct ContactSchema {
    key: usize,
    first_name: usize,
    last_name: usize,
    /// (number column, type column) per slot, slot 1 first.
    phones: [(usize, usize); PHONE_SLOTS],
}

impl ContactSchema {
    /// Returns `None` if any required column is absent; the absent ones are appended to `missing`.
    pub fn resolve(table: &RawTable, missing: &mut Vec<MissingColumn>) -> Option<Self> {
        let mut names: Vec<String> = vec![
            CONTACT_KEY.to_string(),
            CONTACT_FIRST_NAME.to_string(),
            CONTACT_LAST_NAME.to_string(),
        ];
        for slot in 1..=PHONE_SLOTS {
            names.push(phone_column(slot));
            names.push(phone_type_column(slot));
        }
        let names: Vec<&str> = names.iter().map(String::as_str).collect();

        let resolved: Option<Vec<usize>> = table
            .resolve_columns(TableKind::Contacts, &names, missing)
            .into_iter()
            .collect();
        let idx = resolved?;

        let mut phones = [(0, 0); PHONE_SLOTS];
        for (slot, pair) in phones.iter_mut().enumerate() {
            *pair = (idx[3 + 2 * slot], idx[4 + 2 * slot]);
        }

        Some(Self {
            key: idx[0],
            first_name: idx[1],
            last_name: idx[2],
            phones,
        })
    }

    pub fn parse_row(&self, row: &[String]) -> ContactRecord {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        let phones = self.phones.map(|(num, ty)| PhoneSlot {
            number: row.get(num).and_then(|v| canonical_phone(v)),
            raw_type: cell(ty),
        });
        ContactRecord {
            key: cell(self.key),
            first_name: cell(self.first_name),
            last_name: cell(self.last_name),
            phones,
        }
    }

    pub fn parse_all(&self, table: &RawTable) -> Vec<ContactRecord> {
        table.rows.iter().map(|r| self.parse_row(r)).collect()
    }
}

/// One (number, type) pair. `number` is `None` for a blank cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneSlot {
    pub number: Option<String>,
    pub raw_type: String,
}

/// One DirectSkip row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    /// Join key, exactly as read.
    pub key: String,
    pub first_name: String,
    pub last_name: String,
    pub phones: [PhoneSlot; PHONE_SLOTS],
}
