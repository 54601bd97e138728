//! Table sets and the table set builder.

use crate::config::FixtureConfig;
use crate::error::{FixtureError, Result};
use crate::table::{Table, TableBuilder};
use std::collections::HashSet;
use std::ops::Index;
use tracing::debug;

/// Prefix for names given to unnamed tables.
const DEFAULT_TABLE_PREFIX: &str = "Table";

/// An ordered collection of independently built tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSet {
    tables: Vec<Table>,
}

impl TableSet {
    /// Tables in the order they were added.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the set has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name() == Some(name))
    }

    /// Iterate over the tables in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }
}

impl Index<usize> for TableSet {
    type Output = Table;

    fn index(&self, index: usize) -> &Table {
        &self.tables[index]
    }
}

impl IntoIterator for TableSet {
    type Item = Table;
    type IntoIter = std::vec::IntoIter<Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}

impl<'a> IntoIterator for &'a TableSet {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

/// Builder for [`TableSet`].
///
/// Table builders are kept unbuilt until [`build`](Self::build), so every
/// build of the set regenerates every table.
///
/// ```rust
/// use table_fixtures::TableSetBuilder;
///
/// let set = TableSetBuilder::new()
///     .having_table(|t| t.having_string_column_named("SomeString"))
///     .unwrap()
///     .having_table(|t| t.named("Numbers").having_int_column_named("SomeNumber"))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set[0].name(), Some("Table1"));
/// assert!(set.table("Numbers").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableSetBuilder {
    tables: Vec<TableBuilder>,
    config: FixtureConfig,
}

impl TableSetBuilder {
    /// Create an empty builder with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the config handed to table builders created afterwards.
    pub fn with_config(mut self, config: FixtureConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a table configured on a fresh [`TableBuilder`].
    ///
    /// The configured builder is stored unbuilt; column validation errors
    /// raised inside `configure` are returned here.
    pub fn having_table<F>(mut self, configure: F) -> Result<Self>
    where
        F: FnOnce(TableBuilder) -> Result<TableBuilder>,
    {
        let table = configure(TableBuilder::new().with_config(self.config.clone()))?;
        self.tables.push(table);
        Ok(self)
    }

    /// Table builders added so far.
    pub fn tables(&self) -> &[TableBuilder] {
        &self.tables
    }

    /// Build every table in order.
    ///
    /// The first failing table stops the build. Unnamed tables receive the
    /// next free `TableN` name; two tables sharing an explicit name fail
    /// with `DuplicateTableName`.
    pub fn build(&self) -> Result<TableSet> {
        let mut tables = self
            .tables
            .iter()
            .map(TableBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        let mut taken = HashSet::with_capacity(tables.len());
        for name in tables.iter().filter_map(Table::name) {
            if !taken.insert(name.to_string()) {
                return Err(FixtureError::DuplicateTableName(name.to_string()));
            }
        }

        let mut next_index = 1;
        for table in tables.iter_mut().filter(|t| t.name().is_none()) {
            let name = loop {
                let candidate = format!("{DEFAULT_TABLE_PREFIX}{next_index}");
                next_index += 1;
                if taken.insert(candidate.clone()) {
                    break candidate;
                }
            };
            table.set_name(name);
        }

        debug!("Built table set with {} tables", tables.len());

        Ok(TableSet { tables })
    }
}

impl TryFrom<TableSetBuilder> for TableSet {
    type Error = FixtureError;

    fn try_from(builder: TableSetBuilder) -> Result<Self> {
        builder.build()
    }
}
