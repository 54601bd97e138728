//! Tables, rows, and the table builder.

use crate::column::{ColumnSpec, ColumnSpecBuilder};
use crate::config::{FixtureConfig, NegativeRowCountPolicy};
use crate::error::{FixtureError, Result};
use fixture_core::{CellValue, ColumnValueType};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::ops::Index;
use tracing::{debug, trace, warn};

// ============================================================================
// Row
// ============================================================================

/// One generated row: cells keyed by column name, in column order.
///
/// Only columns that have a generator get a cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    /// Set the value for a column, replacing any previous value.
    ///
    /// A new column is appended after the existing cells.
    pub(crate) fn set(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Get a value by column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over populated cells in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Index<&str> for Row {
    type Output = CellValue;

    /// Panics if the row has no value for `column`.
    fn index(&self, column: &str) -> &CellValue {
        match self.get(column) {
            Some(value) => value,
            None => panic!("row has no value for column '{column}'"),
        }
    }
}

// ============================================================================
// Table
// ============================================================================

/// One assembled tabular fixture: an ordered column schema and its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: Option<String>,
    columns: Vec<ColumnSpec>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given column schema.
    ///
    /// Fails with `DuplicateColumnName` if two columns share a name.
    pub(crate) fn new(columns: Vec<ColumnSpec>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(FixtureError::DuplicateColumnName(column.name().to_string()));
            }
        }

        Ok(Self {
            name: None,
            columns,
            rows: Vec::new(),
        })
    }

    /// Append a generated row. Cells are produced from this table's own
    /// columns, already converted to the column types.
    pub(crate) fn push_row(&mut self, row: Row) {
        debug_assert!(row
            .iter()
            .all(|(name, value)| self.column(name).is_some_and(|c| value.fits(c.column_type()))));
        self.rows.push(row);
    }

    /// Table name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Columns in schema order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Check if this table has a specific column.
    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// All column names in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// ============================================================================
// TableBuilder
// ============================================================================

/// Builder for [`Table`].
///
/// Columns are validated as they are added; rows are generated by
/// [`build`](Self::build), which may be called repeatedly.
///
/// ```rust
/// use table_fixtures::TableBuilder;
///
/// let table = TableBuilder::new()
///     .with_row_count(3)
///     .having_int_column_with_setter_named("Id", || 1)
///     .unwrap()
///     .having_string_column_named("Note")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(table.row_count(), 3);
/// assert_eq!(table.column_names(), vec!["Id", "Note"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    name: Option<String>,
    columns: Vec<ColumnSpec>,
    row_count: i64,
    config: FixtureConfig,
}

impl TableBuilder {
    /// Create an empty builder with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the table.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the number of rows to generate.
    pub fn with_row_count(mut self, row_count: i64) -> Self {
        self.row_count = row_count;
        self
    }

    /// Replace the builder config.
    pub fn with_config(mut self, config: FixtureConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a column configured on a fresh [`ColumnSpecBuilder`].
    ///
    /// Validation failures from the column builder are returned here.
    pub fn having_column<F>(mut self, configure: F) -> Result<Self>
    where
        F: FnOnce(ColumnSpecBuilder) -> ColumnSpecBuilder,
    {
        let spec = configure(ColumnSpecBuilder::new()).build()?;
        self.columns.push(spec);
        Ok(self)
    }

    /// Add a column of type `T` without a generator.
    pub fn having_column_named<T: ColumnValueType>(self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        self.having_column(|column| column.named(name).of_type::<T>())
    }

    /// Add a column of type `T` whose values come from `setter`.
    pub fn having_column_with_setter_named<T, F>(
        self,
        name: impl Into<String>,
        setter: F,
    ) -> Result<Self>
    where
        T: ColumnValueType + Into<CellValue>,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let name = name.into();
        self.having_column(|column| column.named(name).of_type::<T>().set_with(setter))
    }

    /// Add an integer column.
    pub fn having_int_column_named(self, name: impl Into<String>) -> Result<Self> {
        self.having_column_named::<i32>(name)
    }

    /// Add an integer column whose values come from `setter`.
    pub fn having_int_column_with_setter_named<F>(
        self,
        name: impl Into<String>,
        setter: F,
    ) -> Result<Self>
    where
        F: Fn() -> i32 + Send + Sync + 'static,
    {
        self.having_column_with_setter_named::<i32, _>(name, setter)
    }

    /// Add a string column.
    pub fn having_string_column_named(self, name: impl Into<String>) -> Result<Self> {
        self.having_column_named::<String>(name)
    }

    /// Add a string column whose values come from `setter`.
    pub fn having_string_column_with_setter_named<F, S>(
        self,
        name: impl Into<String>,
        setter: F,
    ) -> Result<Self>
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: Into<String>,
    {
        self.having_column_with_setter_named::<String, _>(name, move || setter().into())
    }

    /// Add a decimal column.
    pub fn having_decimal_column_named(self, name: impl Into<String>) -> Result<Self> {
        self.having_column_named::<Decimal>(name)
    }

    /// Add a decimal column whose values come from `setter`.
    pub fn having_decimal_column_with_setter_named<F>(
        self,
        name: impl Into<String>,
        setter: F,
    ) -> Result<Self>
    where
        F: Fn() -> Decimal + Send + Sync + 'static,
    {
        self.having_column_with_setter_named::<Decimal, _>(name, setter)
    }

    /// Columns added so far.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Row count after applying the negative-count policy.
    fn effective_row_count(&self) -> Result<usize> {
        if let Ok(row_count) = usize::try_from(self.row_count) {
            return Ok(row_count);
        }
        if self.row_count > 0 {
            return Err(FixtureError::RowCountTooLarge(self.row_count));
        }

        match self.config.negative_row_count {
            NegativeRowCountPolicy::Reject => Err(FixtureError::NegativeRowCount(self.row_count)),
            NegativeRowCountPolicy::Clamp => {
                warn!(
                    "Row count {} is negative, building no rows (policy: {})",
                    self.row_count, self.config.negative_row_count
                );
                Ok(0)
            }
        }
    }

    /// Build the table, generating every row.
    ///
    /// Each row invokes every present generator exactly once, in column
    /// order. A generator error stops the build.
    pub fn build(&self) -> Result<Table> {
        let row_count = self.effective_row_count()?;

        let mut table = Table::new(self.columns.clone())?;
        if let Some(name) = &self.name {
            table.set_name(name.clone());
        }

        debug!(
            "Building table {:?} with {} columns and {} rows",
            self.name,
            self.columns.len(),
            row_count
        );

        for index in 0..row_count {
            let mut row = Row::default();

            for column in &self.columns {
                let Some(generator) = column.generator() else {
                    continue;
                };
                let value = generator
                    .generate()
                    .map_err(|source| FixtureError::Generator {
                        column: column.name().to_string(),
                        source,
                    })?;
                row.set(column.name(), store_as(column, value)?);
            }

            trace!("Generated row {} with {} cells", index, row.len());
            table.push_row(row);
        }

        Ok(table)
    }
}

/// Convert a generated value to its column's type, widening integers where
/// no precision is lost.
fn store_as(column: &ColumnSpec, value: CellValue) -> Result<CellValue> {
    let actual = value.type_name();
    value
        .coerce_to(column.column_type())
        .ok_or_else(|| FixtureError::TypeMismatch {
            column: column.name().to_string(),
            expected: column.column_type(),
            actual,
        })
}

impl TryFrom<TableBuilder> for Table {
    type Error = FixtureError;

    fn try_from(builder: TableBuilder) -> Result<Self> {
        builder.build()
    }
}
