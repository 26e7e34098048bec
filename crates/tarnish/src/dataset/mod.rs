//! In-memory dataset model.

mod table;
mod value;

pub use table::{Column, Dataset, Shape};
pub use value::{ColumnKind, Value};
