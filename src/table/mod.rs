// src/table/mod.rs
pub mod output;
pub mod utils;

pub use output::OutputTable;

use csv::ReaderBuilder;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::{debug, info};

use crate::error::{MissingColumn, Result, SlicerError, TableKind};

#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Column names from the header row, in file order.
    pub headers: Vec<String>,
    /// Each data row, padded to `headers.len()` fields.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Load a headered CSV file from disk.
    #[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SlicerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(BufReader::new(file), path)?;
        info!(
            rows = table.rows.len(),
            columns = table.headers.len(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse a headered CSV from any reader. `origin` is only used in errors.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let format_err = |source: csv::Error| SlicerError::Format {
            path: origin.to_path_buf(),
            source,
        };

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        // csv::Reader drops a leading UTF-8 BOM from the header record
        let headers: Vec<String> = rdr
            .headers()
            .map_err(format_err)?
            .iter()
            .map(str::to_string)
            .collect();

        let width = headers.len();
        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.map_err(format_err)?;
            if record.len() > width {
                return Err(SlicerError::RowTooLong {
                    path: origin.to_path_buf(),
                    row: idx + 1,
                    expected: width,
                    found: record.len(),
                });
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            if row.len() < width {
                debug!(row = idx + 1, found = row.len(), "padding short record");
                row.resize(width, String::new());
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Build a table directly from headers and rows; rows are padded or cut to width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, String::new());
                r
            })
            .collect();
        Self { headers, rows }
    }

    /// Position of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Resolve every name in `required`, recording each one that is absent into `missing`.
    pub fn resolve_columns(
        &self,
        table: TableKind,
        required: &[&str],
        missing: &mut Vec<MissingColumn>,
    ) -> Vec<Option<usize>> {
        required
            .iter()
            .map(|name| {
                let idx = self.column_index(name);
                if idx.is_none() {
                    missing.push(MissingColumn {
                        table,
                        column: name.to_string(),
                    });
                }
                idx
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
