use arrow::error::ArrowError;
use arrow_array::{Array, BooleanArray, Float64Array};
use arrow_ord::cmp::{gt, lt, lt_eq};

use crate::errors::DqError;
use crate::results::{MAX_EXAMPLES, ValidationResult};
use crate::rules::ColumnCheck;
use crate::tables::Column;

/// Bound a numeric column must respect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericBound {
    /// Strictly greater than zero.
    Positive,
    /// Greater than or equal to the value.
    Min(f64),
    /// Less than or equal to the value.
    Max(f64),
}

/// Fails on values that break a [`NumericBound`].
///
/// Missing values never count as violations. Non-numeric columns produce a
/// failed result instead of an error so a chain keeps running.
#[derive(Debug, Clone)]
pub struct RangeCheck {
    bound: NumericBound,
}

impl RangeCheck {
    pub fn new(bound: NumericBound) -> Self {
        Self { bound }
    }

    pub fn positive() -> Self {
        Self::new(NumericBound::Positive)
    }

    pub fn min(minimum: f64) -> Self {
        Self::new(NumericBound::Min(minimum))
    }

    pub fn max(maximum: f64) -> Self {
        Self::new(NumericBound::Max(maximum))
    }

    /// Mask of violating rows; nulls propagate and are read as passing.
    fn violations(&self, numbers: &Float64Array) -> Result<BooleanArray, ArrowError> {
        match self.bound {
            NumericBound::Positive => lt_eq(numbers, &Float64Array::new_scalar(0.0)),
            NumericBound::Min(minimum) => lt(numbers, &Float64Array::new_scalar(minimum)),
            NumericBound::Max(maximum) => gt(numbers, &Float64Array::new_scalar(maximum)),
        }
    }

    fn message(&self, failing: usize) -> String {
        match (self.bound, failing) {
            (NumericBound::Positive, 0) => "All values positive".to_string(),
            (NumericBound::Positive, n) => format!("Found {} non-positive values", n),
            (NumericBound::Min(m), 0) => format!("All values >= {}", m),
            (NumericBound::Min(m), n) => format!("Found {} values below {}", n, m),
            (NumericBound::Max(m), 0) => format!("All values <= {}", m),
            (NumericBound::Max(m), n) => format!("Found {} values above {}", n, m),
        }
    }
}

impl ColumnCheck for RangeCheck {
    fn name(&self) -> &'static str {
        match self.bound {
            NumericBound::Positive => "is_positive",
            NumericBound::Min(_) => "min_value",
            NumericBound::Max(_) => "max_value",
        }
    }

    fn validate(&self, column: &Column<'_>) -> Result<ValidationResult, DqError> {
        let Some(numbers) = column.numbers() else {
            return Ok(ValidationResult::not_applicable(
                self.name(),
                column.name(),
                format!("Column '{}' is not numeric", column.name()),
            ));
        };

        let mask = self.violations(&numbers)?;
        let failing = mask.true_count();
        let examples = (0..mask.len())
            .filter(|&i| mask.is_valid(i) && mask.value(i))
            .take(MAX_EXAMPLES)
            .map(|i| column.value(i))
            .collect();

        Ok(ValidationResult::from_failures(
            self.name(),
            column.name(),
            failing,
            self.message(failing),
            examples,
        ))
    }
}
