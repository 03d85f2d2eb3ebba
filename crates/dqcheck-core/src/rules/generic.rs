use std::collections::{HashMap, HashSet};

use crate::errors::DqError;
use crate::results::{MAX_EXAMPLES, ValidationResult};
use crate::rules::ColumnCheck;
use crate::tables::Column;
use crate::types::Value;
use crate::utils::hasher::{ValueKey, Xxh3Builder};

/// Fails on any missing value. Examples are row indices.
#[derive(Debug, Clone, Default)]
pub struct NullCheck {}

impl NullCheck {
    pub fn new() -> Self {
        Self {}
    }
}

impl ColumnCheck for NullCheck {
    fn name(&self) -> &'static str {
        "is_not_null"
    }

    fn validate(&self, column: &Column<'_>) -> Result<ValidationResult, DqError> {
        let failing = column.missing_count();
        let examples = (0..column.len())
            .filter(|&i| column.is_missing(i))
            .take(MAX_EXAMPLES)
            .map(Value::from)
            .collect();
        let message = if failing > 0 {
            format!("Found {} null values", failing)
        } else {
            "No null values".to_string()
        };
        Ok(ValidationResult::from_failures(
            self.name(),
            column.name(),
            failing,
            message,
            examples,
        ))
    }
}

/// Fails when a value appears more than once.
///
/// Missing values form one group, so two missing rows are duplicates. Every
/// row of a duplicate group counts as failing. Examples hold one value per
/// duplicate group, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct UnicityCheck {}

struct Occurrences {
    first: usize,
    count: usize,
}

impl UnicityCheck {
    pub fn new() -> Self {
        Self {}
    }
}

impl ColumnCheck for UnicityCheck {
    fn name(&self) -> &'static str {
        "is_unique"
    }

    fn validate(&self, column: &Column<'_>) -> Result<ValidationResult, DqError> {
        // `None` keys the missing group
        let mut groups: HashMap<Option<ValueKey>, Occurrences, Xxh3Builder> =
            HashMap::with_hasher(Xxh3Builder);
        for (i, value) in column.values().enumerate() {
            groups
                .entry(ValueKey::from_value(&value))
                .or_insert(Occurrences { first: i, count: 0 })
                .count += 1;
        }

        let mut duplicated: Vec<&Occurrences> = groups.values().filter(|o| o.count > 1).collect();
        duplicated.sort_by_key(|o| o.first);
        let failing = duplicated.iter().map(|o| o.count).sum();
        let examples = duplicated
            .iter()
            .take(MAX_EXAMPLES)
            .map(|o| column.value(o.first))
            .collect();

        let message = if failing > 0 {
            format!("Found {} duplicate values", failing)
        } else {
            "All values unique".to_string()
        };
        Ok(ValidationResult::from_failures(
            self.name(),
            column.name(),
            failing,
            message,
            examples,
        ))
    }
}

/// Fails on non-missing values outside an allowed set.
///
/// Examples are distinct offending values.
#[derive(Debug, Clone)]
pub struct IsInCheck {
    members: HashSet<ValueKey, Xxh3Builder>,
}

impl IsInCheck {
    pub fn new(members: &[Value]) -> Self {
        let mut hashset = HashSet::with_hasher(Xxh3Builder);
        hashset.extend(members.iter().filter_map(ValueKey::from_value));
        Self { members: hashset }
    }
}

impl ColumnCheck for IsInCheck {
    fn name(&self) -> &'static str {
        "is_in"
    }

    fn validate(&self, column: &Column<'_>) -> Result<ValidationResult, DqError> {
        let mut failing = 0;
        let mut offenders: HashSet<ValueKey, Xxh3Builder> = HashSet::with_hasher(Xxh3Builder);
        let mut examples = Vec::new();
        for value in column.values() {
            let Some(key) = ValueKey::from_value(&value) else {
                continue;
            };
            if self.members.contains(&key) {
                continue;
            }
            failing += 1;
            if offenders.insert(key) && examples.len() < MAX_EXAMPLES {
                examples.push(value);
            }
        }

        let message = if failing > 0 {
            format!("Found {} values not in allowed list", failing)
        } else {
            "All values valid".to_string()
        };
        Ok(ValidationResult::from_failures(
            self.name(),
            column.name(),
            failing,
            message,
            examples,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Table;
    use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray, UInt64Array};
    use std::sync::Arc;

    fn single(array: ArrayRef) -> Table {
        Table::try_new(vec![("col", array)]).unwrap()
    }

    #[test]
    fn test_null_check_reports_row_indices() {
        let table = single(Arc::new(StringArray::from(vec![
            Some("a"),
            None,
            Some("c"),
            None,
        ])));
        let result = NullCheck::new()
            .validate(&table.column("col").unwrap())
            .unwrap();
        assert!(!result.passed);
        assert_eq!(result.failing_count, 2);
        assert_eq!(result.failing_examples, vec![Value::Integer(1), Value::Integer(3)]);
        assert_eq!(result.message, "Found 2 null values");
    }

    #[test]
    fn test_null_check_happy() {
        let table = single(Arc::new(Int64Array::from(vec![1, 2, 3])));
        let result = NullCheck::new()
            .validate(&table.column("col").unwrap())
            .unwrap();
        assert!(result.passed);
        assert_eq!(result.failing_count, 0);
        assert_eq!(result.message, "No null values");
    }

    #[test]
    fn test_unicity_with_duplicates() {
        let table = single(Arc::new(Int64Array::from(vec![1, 2, 2, 3])));
        let result = UnicityCheck::new()
            .validate(&table.column("col").unwrap())
            .unwrap();
        assert!(!result.passed);
        assert_eq!(result.failing_count, 2);
        assert_eq!(result.failing_examples, vec![Value::Integer(2)]);
    }

    #[test]
    fn test_unicity_groups_in_first_appearance_order() {
        let table = single(Arc::new(StringArray::from(vec![
            "b", "a", "b", "c", "a", "b",
        ])));
        let result = UnicityCheck::new()
            .validate(&table.column("col").unwrap())
            .unwrap();
        assert_eq!(result.failing_count, 5);
        assert_eq!(
            result.failing_examples,
            vec![Value::from("b"), Value::from("a")]
        );
    }

    #[test]
    fn test_unicity_repeated_nulls_are_duplicates() {
        let table = single(Arc::new(StringArray::from(vec![Some("a"), None, None])));
        let result = UnicityCheck::new()
            .validate(&table.column("col").unwrap())
            .unwrap();
        assert!(!result.passed);
        assert_eq!(result.failing_count, 2);
        assert_eq!(result.failing_examples, vec![Value::Null]);
    }

    #[test]
    fn test_unicity_nan_and_null_share_a_group() {
        let table = single(Arc::new(Float64Array::from(vec![
            Some(1.0),
            None,
            Some(f64::NAN),
            Some(2.0),
        ])));
        let result = UnicityCheck::new()
            .validate(&table.column("col").unwrap())
            .unwrap();
        assert_eq!(result.failing_count, 2);
    }

    #[test]
    fn test_unicity_single_null_passes() {
        let table = single(Arc::new(Int64Array::from(vec![Some(1), None, Some(2)])));
        let result = UnicityCheck::new()
            .validate(&table.column("col").unwrap())
            .unwrap();
        assert!(result.passed);
    }

    #[test]
    fn test_unicity_large_integers_stay_distinct() {
        let base = 1i64 << 53;
        let table = single(Arc::new(Int64Array::from(vec![base, base + 1, i64::MAX])));
        let result = UnicityCheck::new()
            .validate(&table.column("col").unwrap())
            .unwrap();
        assert!(result.passed);
        assert_eq!(result.failing_count, 0);
    }

    #[test]
    fn test_unicity_unsigned_max_values() {
        let table = single(Arc::new(UInt64Array::from(vec![u64::MAX, u64::MAX - 1, u64::MAX])));
        let result = UnicityCheck::new()
            .validate(&table.column("col").unwrap())
            .unwrap();
        assert_eq!(result.failing_count, 2);
        assert_eq!(result.failing_examples, vec![Value::Unsigned(u64::MAX)]);
    }

    #[test]
    fn test_is_in_distinct_offenders() {
        let table = single(Arc::new(StringArray::from(vec![
            Some("apple"),
            Some("orange"),
            None,
            Some("orange"),
            Some(""),
        ])));
        let rule = IsInCheck::new(&[Value::from("apple"), Value::from("banana")]);
        let result = rule.validate(&table.column("col").unwrap()).unwrap();
        assert!(!result.passed);
        assert_eq!(result.failing_count, 3);
        assert_eq!(
            result.failing_examples,
            vec![Value::from("orange"), Value::from("")]
        );
    }

    #[test]
    fn test_is_in_case_sensitive() {
        let table = single(Arc::new(StringArray::from(vec!["apple", "Apple"])));
        let rule = IsInCheck::new(&[Value::from("apple")]);
        let result = rule.validate(&table.column("col").unwrap()).unwrap();
        assert_eq!(result.failing_count, 1);
    }

    #[test]
    fn test_is_in_large_integers_compare_exactly() {
        let base = 1i64 << 53;
        let table = single(Arc::new(Int64Array::from(vec![base, base + 1])));
        let rule = IsInCheck::new(&[Value::Integer(base)]);
        let result = rule.validate(&table.column("col").unwrap()).unwrap();
        assert!(!result.passed);
        assert_eq!(result.failing_count, 1);
        assert_eq!(result.failing_examples, vec![Value::Integer(base + 1)]);
    }

    #[test]
    fn test_is_in_numbers_compare_by_value() {
        let table = single(Arc::new(Int64Array::from(vec![1, 2, 3])));
        let rule = IsInCheck::new(&[Value::Float(1.0), Value::Integer(2)]);
        let result = rule.validate(&table.column("col").unwrap()).unwrap();
        assert_eq!(result.failing_count, 1);
        assert_eq!(result.failing_examples, vec![Value::Integer(3)]);
    }
}
