//! Cell values for table fixtures.
//!
//! `CellValue` is the dynamically typed value a generator hands back for one
//! cell. Each non-null variant corresponds to exactly one `ColumnType`.

use crate::types::ColumnType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Int(i32),

    /// 64-bit signed integer
    BigInt(i64),

    /// 64-bit floating point
    Double(f64),

    /// Exact decimal, scale preserved
    Decimal(Decimal),

    /// String value
    Text(String),

    /// Date/time in UTC
    DateTime(DateTime<Utc>),

    /// UUID value
    Uuid(Uuid),

    /// Null value, accepted by every column
    Null,
}

impl CellValue {
    /// The column type this value belongs to, or `None` for `Null`.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Self::Bool(_) => Some(ColumnType::Bool),
            Self::Int(_) => Some(ColumnType::Int),
            Self::BigInt(_) => Some(ColumnType::BigInt),
            Self::Double(_) => Some(ColumnType::Double),
            Self::Decimal(_) => Some(ColumnType::Decimal),
            Self::Text(_) => Some(ColumnType::Text),
            Self::DateTime(_) => Some(ColumnType::DateTime),
            Self::Uuid(_) => Some(ColumnType::Uuid),
            Self::Null => None,
        }
    }

    /// Whether this value can be stored in a column of `column_type`,
    /// either as-is or after a lossless widening.
    pub fn fits(&self, column_type: ColumnType) -> bool {
        self.column_type()
            .is_none_or(|own_type| own_type == column_type || own_type.widens_to(column_type))
    }

    /// Convert this value for storage in a column of `column_type`.
    ///
    /// `Null` and values of the column's own type pass through unchanged.
    /// Integers widen to `big_int`, `double` and `decimal`; big integers
    /// widen to `decimal`. Returns `None` for anything else.
    pub fn coerce_to(self, column_type: ColumnType) -> Option<CellValue> {
        match (self, column_type) {
            (Self::Int(i), ColumnType::BigInt) => Some(Self::BigInt(i64::from(i))),
            (Self::Int(i), ColumnType::Double) => Some(Self::Double(f64::from(i))),
            (Self::Int(i), ColumnType::Decimal) => Some(Self::Decimal(Decimal::from(i))),
            (Self::BigInt(i), ColumnType::Decimal) => Some(Self::Decimal(Decimal::from(i))),
            (value, column_type) if value.column_type().is_none_or(|t| t == column_type) => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short description of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        self.column_type().map_or("null", |t| t.as_str())
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::BigInt(i) => Some(*i),
            Self::Int(i) => Some(*i as i64),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a decimal.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::BigInt(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(s) => f.write_str(s),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Null => f.write_str("NULL"),
        }
    }
}

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_native! {
    bool => Bool,
    i32 => Int,
    i64 => BigInt,
    f64 => Double,
    Decimal => Decimal,
    String => Text,
    DateTime<Utc> => DateTime,
    Uuid => Uuid,
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
