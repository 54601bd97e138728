//! Core types for the table-fixtures workspace.
//!
//! This crate provides the foundational types shared by the fixture builders:
//!
//! - [`ColumnType`] - Runtime type tag stored on every column
//! - [`ColumnValueType`] - Maps Rust types onto a `ColumnType`
//! - [`CellValue`] - Dynamically typed value held in one cell
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{CellValue, ColumnType, ColumnValueType};
//!
//! let value = CellValue::from(42);
//! assert_eq!(value.column_type(), Some(<i32 as ColumnValueType>::COLUMN_TYPE));
//! assert!(value.fits(ColumnType::Int));
//! ```

pub mod types;
pub mod values;

// Re-exports for convenience
pub use types::{ColumnType, ColumnValueType, UnknownColumnType};
pub use values::CellValue;
