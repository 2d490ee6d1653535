use csv::WriterBuilder;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::config::SlicerConfig;
use crate::error::{Result, SlicerError};
use crate::slice::{PhoneType, SliceOutput};

/// An in-memory output table with an explicit header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl OutputTable {
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize header + rows as CSV into `writer`.
    pub fn write_csv<W: Write>(&self, writer: W) -> std::result::Result<(), csv::Error> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write to `path`, replacing any existing file.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| SlicerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_into(file, path)
    }

    /// Write as CSV into `writer`; `dest` names the target in errors.
    pub fn write_into<W: Write>(&self, writer: W, dest: &Path) -> Result<()> {
        self.write_csv(writer).map_err(|source| SlicerError::Write {
            path: dest.to_path_buf(),
            source,
        })
    }
}

/// Write both output tables under `out_dir`. Returns the paths actually written.
#[tracing::instrument(level = "info", skip(output, config), fields(out_dir = %out_dir.display()))]
pub fn write_outputs(
    output: &SliceOutput,
    out_dir: &Path,
    config: &SlicerConfig,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| SlicerError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let targets = [
        (
            &output.mobile,
            config.mobile_file_name.as_str(),
            PhoneType::Mobile,
        ),
        (
            &output.residential,
            config.residential_file_name.as_str(),
            PhoneType::Residential,
        ),
    ];

    let mut written = Vec::new();
    for (table, file_name, kind) in targets {
        if table.is_empty() && !config.write_empty_outputs {
            warn!(
                file = file_name,
                "no records with {} phone types; skipping",
                kind.as_str()
            );
            continue;
        }
        let path = out_dir.join(file_name);
        table.write_to_path(&path)?;
        info!(path = %path.display(), rows = table.len(), "wrote output");
        written.push(path);
    }
    Ok(written)
}
