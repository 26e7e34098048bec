//! Folder-level corruption of CSV files.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, TarnishError};
use crate::input::{Parser, ParserConfig, SourceMetadata, Writer};
use crate::pipeline::{CorruptionPipeline, CorruptionReport};

/// Extension of the files picked up from an input folder.
const CSV_SUFFIX: &str = ".csv";

/// Suffix appended to the stem of each output file.
const OUTPUT_SUFFIX: &str = "_corrupted";

/// Outcome of corrupting one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// The file that was read.
    pub source: SourceMetadata,
    /// Where the corrupted copy was written.
    pub output: PathBuf,
    /// What each stage changed.
    pub report: CorruptionReport,
}

/// Outcome of corrupting a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// One entry per processed file, in processing order.
    pub files: Vec<FileOutcome>,
}

impl BatchSummary {
    /// Total cells changed across every file.
    pub fn cells_changed(&self) -> usize {
        self.files.iter().map(|f| f.report.cells_changed).sum()
    }

    /// Save the summary as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| TarnishError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = File::create(path).map_err(|e| TarnishError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Reads CSV files, runs the corruption pipeline and writes the results.
pub struct BatchProcessor {
    pipeline: CorruptionPipeline,
    parser: Parser,
    writer: Writer,
}

impl BatchProcessor {
    /// Create a processor with the default pipeline and comma-delimited I/O.
    pub fn new() -> Self {
        Self::with_pipeline(CorruptionPipeline::new())
    }

    /// Create a processor around a configured pipeline.
    pub fn with_pipeline(pipeline: CorruptionPipeline) -> Self {
        Self {
            pipeline,
            parser: Parser::new(),
            writer: Writer::new(),
        }
    }

    /// Read and write with a custom delimiter and quote.
    pub fn with_parser_config(mut self, config: ParserConfig) -> Self {
        self.writer = Writer::with_delimiter(config.delimiter);
        self.parser = Parser::with_config(config);
        self
    }

    /// Corrupt every `.csv` file in `input_dir` into `output_dir`.
    pub fn process_folder(
        &self,
        input_dir: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<BatchSummary> {
        self.process_folder_with(input_dir, output_dir, |_| {})
    }

    /// Like [`BatchProcessor::process_folder`], calling `on_file` with each
    /// input path before it is processed.
    pub fn process_folder_with(
        &self,
        input_dir: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
        mut on_file: impl FnMut(&Path),
    ) -> Result<BatchSummary> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        let inputs = csv_files(input_dir)?;

        fs::create_dir_all(output_dir).map_err(|e| TarnishError::Io {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

        // Each file gets its own generator derived from the pipeline's.
        let mut master = self.pipeline.config().rng();
        let mut files = Vec::with_capacity(inputs.len());

        for input in inputs {
            on_file(&input);
            let output = output_dir.join(output_file_name(&input));
            let mut rng = fastrand::Rng::with_seed(master.u64(..));
            files.push(self.process_file_with_rng(&input, &output, &mut rng)?);
        }

        Ok(BatchSummary {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            files,
        })
    }

    /// Corrupt a single file.
    pub fn process_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<FileOutcome> {
        let mut rng = self.pipeline.config().rng();
        self.process_file_with_rng(input.as_ref(), output.as_ref(), &mut rng)
    }

    fn process_file_with_rng(
        &self,
        input: &Path,
        output: &Path,
        rng: &mut fastrand::Rng,
    ) -> Result<FileOutcome> {
        let (dataset, source) = self.parser.parse_file(input)?;
        let corruption = self.pipeline.run_with_rng(&dataset, rng);
        self.writer.write_file(&corruption.dataset, output)?;

        info!(
            file = %source.file,
            rows = source.row_count,
            columns = source.column_count,
            cells_changed = corruption.report.cells_changed,
            output = %output.display(),
            "corrupted dataset"
        );

        Ok(FileOutcome {
            source,
            output: output.to_path_buf(),
            report: corruption.report,
        })
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Regular files in `dir` whose name ends in `.csv`, sorted by name.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(TarnishError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| TarnishError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TarnishError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        let is_csv = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(CSV_SUFFIX));

        if is_csv && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// `<name>.csv` becomes `<name>_corrupted.csv`.
pub fn output_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(CSV_SUFFIX).unwrap_or(&name);
    format!("{}{}{}", stem, OUTPUT_SUFFIX, CSV_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(Path::new("sales.csv")), "sales_corrupted.csv");
        assert_eq!(
            output_file_name(Path::new("/data/q1.csv.csv")),
            "q1.csv_corrupted.csv"
        );
        assert_eq!(output_file_name(Path::new("notes")), "notes_corrupted.csv");
    }

    #[test]
    fn test_csv_files_rejects_missing_dir() {
        let result = csv_files(Path::new("/definitely/not/a/real/dir"));
        assert!(matches!(result, Err(TarnishError::NotADirectory(_))));
    }
}
