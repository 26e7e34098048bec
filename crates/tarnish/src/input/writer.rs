//! CSV writer for datasets.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::{Result, TarnishError};

/// Writes datasets as delimited text with a header row.
///
/// Missing cells are written as empty fields and row order is preserved.
pub struct Writer {
    delimiter: u8,
}

impl Writer {
    /// Create a comma-delimited writer.
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Create a writer with a custom delimiter.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Write the dataset to a file, replacing any existing content.
    pub fn write_file(&self, dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| TarnishError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.write(dataset, file)
    }

    /// Write the dataset to any writer.
    pub fn write<W: Write>(&self, dataset: &Dataset, out: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(out);

        writer.write_record(dataset.column_names())?;
        for row in 0..dataset.row_count() {
            writer.write_record(dataset.row(row).map(|v| v.to_string()))?;
        }

        writer.flush().map_err(|e| TarnishError::Csv(e.into()))?;
        Ok(())
    }

    /// Render the dataset to a string.
    pub fn write_string(&self, dataset: &Dataset) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(dataset, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
