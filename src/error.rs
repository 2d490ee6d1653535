//! Error handling for the slicer library.

use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Which input a required column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Contacts,
    Properties,
}

impl TableKind {
    pub fn as_str(&self) -> &str {
        match self {
            TableKind::Contacts => "DirectSkip",
            TableKind::Properties => "Land Portal",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required column absent from one of the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumn {
    pub table: TableKind,
    pub column: String,
}

impl fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} file missing column: '{}'", self.table, self.column)
    }
}

#[derive(Debug, Error)]
pub enum SlicerError {
    /// Schema error: reported before any join is attempted.
    #[error("missing required columns: {}", join_missing(.missing))]
    MissingColumns { missing: Vec<MissingColumn> },

    /// Format error: the file is not a readable CSV table.
    #[error("malformed CSV in {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Format error: a record carries more fields than the header declares.
    #[error("malformed CSV in {path}: record {row} has {found} fields, header has {expected}")]
    RowTooLong {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Writing an output file failed part-way.
    #[error("failed writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to serialize stats: {0}")]
    Stats(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

fn join_missing(missing: &[MissingColumn]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for slicer operations
pub type Result<T> = std::result::Result<T, SlicerError>;
