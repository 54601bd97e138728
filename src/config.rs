//! Configuration for fixture builders.

use serde::{Deserialize, Serialize};

/// How `TableBuilder::build` treats a negative row count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeRowCountPolicy {
    /// Build zero rows and log a warning.
    #[default]
    Clamp,
    /// Fail with `FixtureError::NegativeRowCount`.
    Reject,
}

impl std::fmt::Display for NegativeRowCountPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NegativeRowCountPolicy::Clamp => write!(f, "clamp"),
            NegativeRowCountPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Options shared by `TableBuilder` and `TableSetBuilder`.
///
/// Every field has a default, so the config can be embedded in a larger
/// test configuration file and left partially (or entirely) empty.
///
/// ```yaml
/// negative_row_count: reject
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Policy applied to negative row counts.
    pub negative_row_count: NegativeRowCountPolicy,
}

impl FixtureConfig {
    /// Config that rejects negative row counts.
    pub fn strict() -> Self {
        Self {
            negative_row_count: NegativeRowCountPolicy::Reject,
        }
    }
}
