//! Column-major tabular dataset.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TarnishError};

use super::value::{ColumnKind, Value};

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Column name from the header row.
    pub name: String,
    values: Vec<Value>,
}

impl Column {
    /// Create a column from its name and cells.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The column's cells in row order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Classify the column from its current cells.
    pub fn kind(&self) -> ColumnKind {
        ColumnKind::classify(&self.values)
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }
}

/// Row count plus ordered column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub columns: Vec<String>,
}

/// An ordered collection of equal-length named columns.
///
/// The row count and column set are fixed at construction. Transforms can
/// only rewrite cells in place through fixed-length slices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Create a dataset, rejecting columns of unequal length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(|c| c.values.len()).unwrap_or(0);

        if let Some(ragged) = columns.iter().find(|c| c.values.len() != row_count) {
            return Err(TarnishError::RaggedColumns {
                column: ragged.name.clone(),
                expected: row_count,
                found: ragged.values.len(),
            });
        }

        Ok(Self { columns, row_count })
    }

    /// Create a dataset with columns but no rows.
    pub fn empty(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            columns: names
                .into_iter()
                .map(|name| Column::new(name, Vec::new()))
                .collect(),
            row_count: 0,
        }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by position.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Get the first column with the given name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.columns.get(col).and_then(|c| c.values.get(row))
    }

    /// Iterate over one row's cells in column order.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than [`Dataset::row_count`].
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Value> {
        assert!(
            row < self.row_count,
            "row index {} out of range for dataset with {} rows",
            row,
            self.row_count
        );
        self.columns.iter().map(move |c| &c.values[row])
    }

    /// Row count and column names.
    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.row_count,
            columns: self.columns.iter().map(|c| c.name.clone()).collect(),
        }
    }

    /// Total number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }

    /// Mutable access to one column's cells. The slice length is fixed.
    pub(crate) fn values_mut(&mut self, col: usize) -> &mut [Value] {
        &mut self.columns[col].values
    }
}
