//! Column definitions and their builder.

use crate::error::{FixtureError, Result};
use fixture_core::{CellValue, ColumnType, ColumnValueType};
use std::fmt;
use std::sync::Arc;

type GeneratorFn = dyn Fn() -> anyhow::Result<CellValue> + Send + Sync;

/// Zero-argument value generator, invoked once per row.
///
/// Clones share the same closure, so a stateful generator (a counter, a
/// seeded RNG behind a mutex) keeps advancing across every table built
/// from the same column definition.
#[derive(Clone)]
pub struct Generator(Arc<GeneratorFn>);

impl Generator {
    /// Wrap an infallible closure.
    pub fn new<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        Self(Arc::new(move || Ok(f().into())))
    }

    /// Wrap a closure that may fail.
    pub fn fallible<F, V>(f: F) -> Self
    where
        F: Fn() -> anyhow::Result<V> + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        Self(Arc::new(move || f().map(Into::into)))
    }

    /// Produce the next value.
    pub fn generate(&self) -> anyhow::Result<CellValue> {
        (self.0)()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Generator(..)")
    }
}

/// Frozen description of one table column.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    name: String,
    column_type: ColumnType,
    generator: Option<Generator>,
}

impl ColumnSpec {
    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type of every value in the column.
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// The value generator, if one was set.
    pub fn generator(&self) -> Option<&Generator> {
        self.generator.as_ref()
    }

    /// Whether rows will receive a generated value for this column.
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }
}

/// Generators are opaque; two specs are equal when their name, type, and
/// generator presence agree.
impl PartialEq for ColumnSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.column_type == other.column_type
            && self.has_generator() == other.has_generator()
    }
}

/// Builder for [`ColumnSpec`].
///
/// Every setter overwrites the previous value. Validation happens in
/// [`build`](Self::build), which may be called any number of times.
///
/// ```rust
/// use table_fixtures::ColumnSpecBuilder;
///
/// let spec = ColumnSpecBuilder::new()
///     .named("Id")
///     .of_type::<i32>()
///     .set_with(|| 7)
///     .build()
///     .unwrap();
/// assert_eq!(spec.name(), "Id");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnSpecBuilder {
    name: Option<String>,
    column_type: Option<ColumnType>,
    generator: Option<Generator>,
}

impl ColumnSpecBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the column type from a Rust type.
    pub fn of_type<T: ColumnValueType>(self) -> Self {
        self.of_column_type(T::COLUMN_TYPE)
    }

    /// Set the column type from an explicit tag.
    pub fn of_column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    /// Set the value generator.
    pub fn set_with<F, V>(mut self, f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        self.generator = Some(Generator::new(f));
        self
    }

    /// Set a value generator that may fail.
    pub fn try_set_with<F, V>(mut self, f: F) -> Self
    where
        F: Fn() -> anyhow::Result<V> + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        self.generator = Some(Generator::fallible(f));
        self
    }

    /// Validate and freeze the column definition.
    ///
    /// The type is checked before the name, so a builder missing both
    /// reports `MissingType`.
    pub fn build(&self) -> Result<ColumnSpec> {
        let column_type = self.column_type.ok_or(FixtureError::MissingType)?;

        let name = match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => return Err(FixtureError::MissingName),
        };

        Ok(ColumnSpec {
            name,
            column_type,
            generator: self.generator.clone(),
        })
    }
}

impl TryFrom<ColumnSpecBuilder> for ColumnSpec {
    type Error = FixtureError;

    fn try_from(builder: ColumnSpecBuilder) -> Result<Self> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn test_missing_type_is_reported() {
        let err = ColumnSpecBuilder::new().named("ColumnName").build().unwrap_err();
        assert!(matches!(err, FixtureError::MissingType));
        assert_eq!(
            err.to_string(),
            "DataType must be provided for the Column definition"
        );
    }

    #[test]
    fn test_missing_name_is_reported() {
        let err = ColumnSpecBuilder::new().of_type::<String>().build().unwrap_err();
        assert!(matches!(err, FixtureError::MissingName));
        assert_eq!(
            err.to_string(),
            "Name must be provided for the Column definition"
        );
    }

    #[test]
    fn test_type_is_checked_before_name() {
        let err = ColumnSpecBuilder::new().build().unwrap_err();
        assert!(matches!(err, FixtureError::MissingType));
    }

    #[test]
    fn test_blank_names_are_rejected() {
        for name in ["", "   ", "\t\n"] {
            let err = ColumnSpecBuilder::new()
                .named(name)
                .of_type::<i32>()
                .build()
                .unwrap_err();
            assert!(matches!(err, FixtureError::MissingName), "name {name:?}");
        }
    }

    #[test]
    fn test_valid_column_definition() {
        let spec = ColumnSpecBuilder::new()
            .named("ColumnName")
            .of_type::<String>()
            .set_with(|| "ColumnValue")
            .build()
            .unwrap();

        assert_eq!(spec.name(), "ColumnName");
        assert_eq!(spec.column_type(), ColumnType::Text);
        let value = spec.generator().unwrap().generate().unwrap();
        assert_eq!(value, CellValue::Text("ColumnValue".to_string()));
    }

    #[test]
    fn test_no_generator_by_default() {
        let spec = ColumnSpecBuilder::new()
            .named("Amount")
            .of_column_type(ColumnType::Decimal)
            .build()
            .unwrap();
        assert_eq!(spec.column_type(), ColumnType::Decimal);
        assert!(!spec.has_generator());
    }

    #[test]
    fn test_last_write_wins() {
        let spec = ColumnSpecBuilder::new()
            .named("First")
            .of_type::<i32>()
            .set_with(|| 1)
            .named("Second")
            .of_type::<i64>()
            .set_with(|| 2_i64)
            .build()
            .unwrap();

        assert_eq!(spec.name(), "Second");
        assert_eq!(spec.column_type(), ColumnType::BigInt);
        assert_eq!(
            spec.generator().unwrap().generate().unwrap(),
            CellValue::BigInt(2)
        );
    }

    #[test]
    fn test_build_is_repeatable() {
        let builder = ColumnSpecBuilder::new().named("N").of_type::<bool>();
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);

        // Later edits are seen by later builds
        let third = builder.named("M").build().unwrap();
        assert_eq!(third.name(), "M");
    }

    #[test]
    fn test_clones_share_generator_state() {
        let counter = Arc::new(AtomicI32::new(0));
        let shared = Arc::clone(&counter);
        let builder = ColumnSpecBuilder::new()
            .named("Seq")
            .of_type::<i32>()
            .set_with(move || shared.fetch_add(1, Ordering::SeqCst));

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first.generator().unwrap().generate().unwrap(), CellValue::Int(0));
        assert_eq!(second.generator().unwrap().generate().unwrap(), CellValue::Int(1));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_fallible_generator() {
        let spec = ColumnSpecBuilder::new()
            .named("Code")
            .of_type::<String>()
            .try_set_with(|| -> anyhow::Result<String> { anyhow::bail!("no codes left") })
            .build()
            .unwrap();

        let err = spec.generator().unwrap().generate().unwrap_err();
        assert_eq!(err.to_string(), "no codes left");
    }

    #[test]
    fn test_try_from_builder() {
        let spec = ColumnSpec::try_from(ColumnSpecBuilder::new().named("X").of_type::<f64>());
        assert_eq!(spec.unwrap().column_type(), ColumnType::Double);

        let err = ColumnSpec::try_from(ColumnSpecBuilder::new()).unwrap_err();
        assert!(matches!(err, FixtureError::MissingType));
    }
}
