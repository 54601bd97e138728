//! Column type tags for table fixtures.
//!
//! This module defines `ColumnType`, the runtime tag stored on every column,
//! and `ColumnValueType`, which maps Rust types onto those tags so a column
//! can be declared with `of_type::<i32>()` and still be inspected at build time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Runtime type tag describing every value in a column.
///
/// # YAML Format
///
/// Types are written as their snake_case names:
/// ```yaml
/// type: int
/// type: text
/// type: decimal
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Boolean value
    Bool,

    /// 32-bit signed integer
    Int,

    /// 64-bit signed integer
    #[serde(alias = "bigint")]
    BigInt,

    /// 64-bit IEEE 754 floating point
    Double,

    /// Exact base-10 decimal (scale is preserved)
    Decimal,

    /// UTF-8 string
    #[serde(alias = "string")]
    Text,

    /// Timestamp in UTC
    #[serde(alias = "datetime")]
    DateTime,

    /// UUID (128-bit)
    Uuid,
}

impl ColumnType {
    /// All column types, in declaration order.
    pub const ALL: [ColumnType; 8] = [
        ColumnType::Bool,
        ColumnType::Int,
        ColumnType::BigInt,
        ColumnType::Double,
        ColumnType::Decimal,
        ColumnType::Text,
        ColumnType::DateTime,
        ColumnType::Uuid,
    ];

    /// Stable snake_case name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::BigInt => "big_int",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Text => "text",
            Self::DateTime => "date_time",
            Self::Uuid => "uuid",
        }
    }

    /// Whether every value of this type converts losslessly into `target`.
    pub fn widens_to(&self, target: ColumnType) -> bool {
        matches!(
            (*self, target),
            (Self::Int, ColumnType::BigInt)
                | (Self::Int, ColumnType::Double)
                | (Self::Int, ColumnType::Decimal)
                | (Self::BigInt, ColumnType::Decimal)
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown column type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column type: {0}")]
pub struct UnknownColumnType(pub String);

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Ok(Self::Bool),
            "int" | "integer" => Ok(Self::Int),
            "big_int" | "bigint" => Ok(Self::BigInt),
            "double" | "float" => Ok(Self::Double),
            "decimal" => Ok(Self::Decimal),
            "text" | "string" => Ok(Self::Text),
            "date_time" | "datetime" => Ok(Self::DateTime),
            "uuid" => Ok(Self::Uuid),
            _ => Err(UnknownColumnType(s.to_string())),
        }
    }
}

/// Rust types that can back a fixture column.
///
/// Implemented for the native type of each `ColumnType` variant so that
/// builders can accept a type parameter and record its tag.
pub trait ColumnValueType {
    /// The tag recorded for columns of this type.
    const COLUMN_TYPE: ColumnType;
}

macro_rules! impl_column_value_type {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl ColumnValueType for $ty {
                const COLUMN_TYPE: ColumnType = ColumnType::$tag;
            }
        )*
    };
}

impl_column_value_type! {
    bool => Bool,
    i32 => Int,
    i64 => BigInt,
    f64 => Double,
    Decimal => Decimal,
    String => Text,
    &str => Text,
    DateTime<Utc> => DateTime,
    Uuid => Uuid,
}
