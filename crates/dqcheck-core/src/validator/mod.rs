//! Fluent, deferred column validation.
//!
//! A [`Validator`] borrows a [`Table`], queues checks against the column
//! selected by the last [`Validator::column`] call, and runs them on
//! [`Validator::run`].
//!
//! ```ignore
//! let mut validator = Validator::new(&table);
//! let results = validator
//!     .column("age")?
//!     .is_not_null()
//!     .is_positive()
//!     .column("email")?
//!     .matches(r".+@.+\..+")?
//!     .run()?;
//! ```

pub mod check;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, instrument};

use crate::errors::DqError;
use crate::results::ValidationResult;
use crate::rules::RegexMatch;
use crate::tables::Table;
use crate::types::Value;

pub use check::{CheckKind, CheckSpec};

pub struct Validator<'t> {
    table: &'t Table,
    checks: Vec<CheckSpec>,
    current_column: Option<String>,
}

impl<'t> Validator<'t> {
    pub fn new(table: &'t Table) -> Self {
        Self {
            table,
            checks: Vec::new(),
            current_column: None,
        }
    }

    /// Select the column subsequent checks bind to.
    ///
    /// # Errors
    ///
    /// * `DqError::ColumnNotFound` - `name` is not a column of the table
    pub fn column(&mut self, name: &str) -> Result<&mut Self, DqError> {
        if !self.table.contains(name) {
            return Err(DqError::ColumnNotFound(name.to_string()));
        }
        self.current_column = Some(name.to_string());
        Ok(self)
    }

    pub fn current_column(&self) -> Option<&str> {
        self.current_column.as_deref()
    }

    /// Queued checks, in registration order.
    pub fn checks(&self) -> &[CheckSpec] {
        &self.checks
    }

    fn add_check(&mut self, kind: CheckKind) -> &mut Self {
        self.checks.push(CheckSpec {
            kind,
            column: self.current_column.clone(),
        });
        self
    }

    /// No missing values.
    pub fn is_not_null(&mut self) -> &mut Self {
        self.add_check(CheckKind::NotNull)
    }

    /// No repeated non-missing value.
    pub fn is_unique(&mut self) -> &mut Self {
        self.add_check(CheckKind::Unique)
    }

    /// Non-missing values are > 0.
    pub fn is_positive(&mut self) -> &mut Self {
        self.add_check(CheckKind::Positive)
    }

    /// Non-missing values are >= `minimum`.
    pub fn min_value(&mut self, minimum: impl Into<f64>) -> &mut Self {
        self.add_check(CheckKind::MinValue(minimum.into()))
    }

    /// Non-missing values are <= `maximum`.
    pub fn max_value(&mut self, maximum: impl Into<f64>) -> &mut Self {
        self.add_check(CheckKind::MaxValue(maximum.into()))
    }

    /// Non-missing values belong to `allowed`.
    pub fn is_in<I, V>(&mut self, allowed: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let members = allowed.into_iter().map(Into::into).collect();
        self.add_check(CheckKind::IsIn(members))
    }

    /// Non-missing values match `pattern` from their first character.
    ///
    /// # Errors
    ///
    /// * `DqError::InvalidPattern` - `pattern` is not a valid regex
    pub fn matches(&mut self, pattern: &str) -> Result<&mut Self, DqError> {
        RegexMatch::new(pattern)?;
        Ok(self.add_check(CheckKind::Matches(pattern.to_string())))
    }

    /// Execute every queued check, in registration order.
    ///
    /// Each call re-reads the table; nothing is cached between runs.
    ///
    /// # Errors
    ///
    /// * `DqError::NoColumnSelected` - a check was queued before `column`
    #[instrument(skip(self), fields(checks = self.checks.len()))]
    pub fn run(&self) -> Result<Vec<ValidationResult>, DqError> {
        let mut columns = HashMap::new();
        let mut results = Vec::with_capacity(self.checks.len());

        for spec in &self.checks {
            let name = spec
                .column
                .as_deref()
                .ok_or_else(|| DqError::NoColumnSelected {
                    check: spec.name().to_string(),
                })?;
            let column = match columns.entry(name) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(self.table.column(name)?),
            };

            let result = spec.kind.compile()?.validate(column)?;
            debug!(
                check = %result.check_name,
                column = %name,
                passed = result.passed,
                failing = result.failing_count,
                "Executed check"
            );
            results.push(result);
        }

        Ok(results)
    }
}
