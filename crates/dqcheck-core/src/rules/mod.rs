pub mod generic;
pub mod numeric;
pub mod string;

pub use generic::{IsInCheck, NullCheck, UnicityCheck};
pub use numeric::{NumericBound, RangeCheck};
pub use string::RegexMatch;

use crate::errors::DqError;
use crate::results::ValidationResult;
use crate::tables::Column;

/// A single check evaluated against one column.
pub trait ColumnCheck {
    /// Returns the name reported on the result.
    fn name(&self) -> &'static str;
    /// Scans `column` and reports the outcome. Data-quality findings are
    /// returned as failed results, never as errors.
    fn validate(&self, column: &Column<'_>) -> Result<ValidationResult, DqError>;
}
