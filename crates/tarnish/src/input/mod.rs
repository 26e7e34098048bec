//! Reading and writing delimited tabular files.

mod parser;
mod source;
mod writer;

pub use parser::{Parser, ParserConfig, is_null_value};
pub use source::SourceMetadata;
pub use writer::Writer;
