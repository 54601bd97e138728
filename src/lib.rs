//! Table Fixtures
//!
//! Fluent builders for in-memory tabular test fixtures.
//!
//! # Builders
//!
//! - [`ColumnSpecBuilder`] - name, type, and optional value generator of one column
//! - [`TableBuilder`] - ordered columns plus a row count; generates the rows
//! - [`TableSetBuilder`] - ordered collection of independently configured tables
//!
//! Control flows down the chain while configuring, and built values flow back
//! up when `build()` is called:
//!
//! ```text
//! TableSetBuilder ──configures──▶ TableBuilder ──configures──▶ ColumnSpecBuilder
//!        │                              │                              │
//!        ▼                              ▼                              ▼
//!    TableSet   ◀──────────────────   Table   ◀──────────────────  ColumnSpec
//! ```
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use table_fixtures::{CellValue, TableSetBuilder};
//!
//! let set = TableSetBuilder::new()
//!     .having_table(|t| {
//!         t.named("orders")
//!             .with_row_count(2)
//!             .having_int_column_with_setter_named("quantity", || 3)?
//!             .having_decimal_column_with_setter_named("price", || Decimal::new(350, 2))
//!     })?
//!     .build()?;
//!
//! let orders = set.table("orders").unwrap();
//! assert_eq!(orders.row_count(), 2);
//! assert_eq!(orders.rows()[0]["quantity"], CellValue::Int(3));
//! # Ok::<(), table_fixtures::FixtureError>(())
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod table;
pub mod table_set;

// Re-exports for convenience
pub use column::{ColumnSpec, ColumnSpecBuilder, Generator};
pub use config::{FixtureConfig, NegativeRowCountPolicy};
pub use error::{FixtureError, Result};
pub use fixture_core::{CellValue, ColumnType, ColumnValueType};
pub use table::{Row, Table, TableBuilder};
pub use table_set::{TableSet, TableSetBuilder};
