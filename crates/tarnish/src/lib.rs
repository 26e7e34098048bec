//! Tarnish: synthetic data-quality corruption for tabular test fixtures.
//!
//! Tarnish takes clean tabular data and produces a copy with realistic
//! defects, for exercising data-quality checks, cleaning pipelines and
//! validation logic.
//!
//! # Stages
//!
//! Applied in this order by [`CorruptionPipeline`]:
//!
//! - **Missing values**: independent per-cell blanking
//! - **Type errors**: `"invalid"` in numeric columns, numbers in text columns
//! - **Typos**: one character replaced by a random lowercase letter
//! - **Outliers**: numeric cells set to `mean + 10 * std`
//! - **Format inconsistencies**: upper/lower case, padding, `-` to `/`
//!
//! Every stage returns a new dataset of the same shape; the input is never
//! modified.
//!
//! # Example
//!
//! ```no_run
//! use tarnish::{CorruptionConfig, CorruptionPipeline, Parser, Writer};
//!
//! let (dataset, _source) = Parser::new().parse_file("orders.csv").unwrap();
//! let pipeline = CorruptionPipeline::with_config(CorruptionConfig::new().with_seed(42));
//! let corrupted = pipeline.corrupt(&dataset);
//!
//! Writer::new().write_file(&corrupted, "orders_corrupted.csv").unwrap();
//! ```

pub mod batch;
pub mod dataset;
pub mod error;
pub mod inject;
pub mod input;
pub mod pipeline;

pub use batch::{BatchProcessor, BatchSummary, FileOutcome};
pub use dataset::{Column, ColumnKind, Dataset, Shape, Value};
pub use error::{Result, TarnishError};
pub use inject::{
    FormatVariant, Probability, inject_format_inconsistency, inject_nulls, inject_outliers,
    inject_type_errors, inject_typos,
};
pub use input::{Parser, ParserConfig, SourceMetadata, Writer};
pub use pipeline::{
    Corruption, CorruptionConfig, CorruptionPipeline, CorruptionReport, Stage, StageReport,
    corrupt,
};
