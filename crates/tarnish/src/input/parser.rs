//! CSV reader producing typed datasets.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::dataset::{Column, Dataset, Value};
use crate::error::{Result, TarnishError};
use super::source::SourceMetadata;

/// Field spellings read as missing values.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

/// Parses delimited text files into datasets.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the dataset and its source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| TarnishError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| TarnishError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let dataset = self.parse_bytes(&contents)?;

        let source_metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            dataset.row_count(),
            dataset.column_count(),
        );

        Ok((dataset, source_metadata))
    }

    /// Parse in-memory bytes. The first record is the header.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if headers.is_empty() {
            return Err(TarnishError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); expected_cols];

        for result in reader.records() {
            let record = result?;
            // Short rows are padded with missing fields, long rows truncated.
            for (col, raw) in raw_columns.iter_mut().enumerate() {
                raw.push(record.get(col).unwrap_or("").to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(raw_columns)
            .map(|(name, raw)| Column::new(name, type_column(raw)))
            .collect();

        Dataset::new(columns)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a raw field represents a missing value.
pub fn is_null_value(value: &str) -> bool {
    NA_VALUES.contains(&value)
}

/// Type a column as a whole: integers if every present field is an
/// integer, floats if every present field is numeric, otherwise text.
fn type_column(raw: Vec<String>) -> Vec<Value> {
    let present = || raw.iter().filter(|v| !is_null_value(v));

    if present().all(|v| v.parse::<i64>().is_ok()) {
        raw.iter()
            .map(|v| match v.parse::<i64>() {
                Ok(i) if !is_null_value(v) => Value::Integer(i),
                _ => Value::Missing,
            })
            .collect()
    } else if present().all(|v| v.parse::<f64>().is_ok()) {
        raw.iter()
            .map(|v| match v.parse::<f64>() {
                // Any NaN spelling counts as missing; infinities are kept.
                Ok(f) if !is_null_value(v) && !f.is_nan() => Value::Float(f),
                _ => Value::Missing,
            })
            .collect()
    } else {
        raw.into_iter()
            .map(|v| {
                if is_null_value(&v) {
                    Value::Missing
                } else {
                    Value::Text(v)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ColumnKind;

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"name,age,score\nAlice,30,1.5\nBob,25,2";
        let dataset = parser.parse_bytes(data).unwrap();

        assert_eq!(dataset.column_names(), vec!["name", "age", "score"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.get(0, 0), Some(&Value::text("Alice")));
        assert_eq!(dataset.get(1, 1), Some(&Value::Integer(25)));
        assert_eq!(dataset.get(1, 2), Some(&Value::Float(2.0)));
    }

    #[test]
    fn test_numeric_strings_in_text_column_stay_text() {
        let parser = Parser::new();
        let dataset = parser.parse_bytes(b"code\n12\nabc\n").unwrap();

        assert_eq!(dataset.get(0, 0), Some(&Value::text("12")));
        assert_eq!(dataset.column(0).unwrap().kind(), ColumnKind::Text);
    }

    #[test]
    fn test_missing_fields() {
        let parser = Parser::new();
        let dataset = parser.parse_bytes(b"a,b\n1,\nNA,x\n3").unwrap();

        assert_eq!(dataset.row_count(), 3);
        assert_eq!(dataset.get(0, 1), Some(&Value::Missing));
        assert_eq!(dataset.get(1, 0), Some(&Value::Missing));
        assert_eq!(dataset.get(2, 1), Some(&Value::Missing));
        assert_eq!(dataset.column(0).unwrap().kind(), ColumnKind::Numeric);
    }

    #[test]
    fn test_nan_spellings_load_as_missing() {
        let parser = Parser::new();
        let dataset = parser.parse_bytes(b"x\n1.5\nNAN\n2.5\n+nan\nInf\n").unwrap();
        let column = dataset.column(0).unwrap();

        assert_eq!(
            column.values(),
            &[
                Value::Float(1.5),
                Value::Missing,
                Value::Float(2.5),
                Value::Missing,
                Value::Float(f64::INFINITY),
            ]
        );
        assert_eq!(column.missing_count(), 2);
        assert_eq!(dataset, dataset.clone());
    }

    #[test]
    fn test_header_only() {
        let parser = Parser::new();
        let dataset = parser.parse_bytes(b"a,b\n").unwrap();

        assert_eq!(dataset.row_count(), 0);
        assert_eq!(dataset.column_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let parser = Parser::new();
        assert!(matches!(
            parser.parse_bytes(b""),
            Err(TarnishError::EmptyData(_))
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: b';',
            ..Default::default()
        });
        let dataset = parser.parse_bytes(b"a;b\n1;x").unwrap();
        assert_eq!(dataset.column_count(), 2);
    }

    #[test]
    fn test_is_null_value() {
        assert!(is_null_value(""));
        assert!(is_null_value("NA"));
        assert!(is_null_value("n/a"));
        assert!(is_null_value("NULL"));
        assert!(is_null_value("nan"));
        assert!(!is_null_value("value"));
        assert!(!is_null_value("0"));
        assert!(!is_null_value("-"));
    }
}
