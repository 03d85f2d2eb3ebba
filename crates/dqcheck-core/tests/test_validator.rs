use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray, UInt64Array};
use dqcheck_core::{DqError, Table, Validator, Value};

fn sample_table() -> Table {
    Table::try_new(vec![
        (
            "id",
            Arc::new(Int64Array::from(vec![1, 2, 3, 4, 5])) as ArrayRef,
        ),
        (
            "name",
            Arc::new(StringArray::from(vec![
                Some("Alice"),
                Some("Bob"),
                Some("Charlie"),
                None,
                Some("Eve"),
            ])) as ArrayRef,
        ),
        (
            "age",
            Arc::new(Int64Array::from(vec![25, -5, 30, 35, 150])) as ArrayRef,
        ),
        (
            "email",
            Arc::new(StringArray::from(vec![
                "alice@example.com",
                "bob@test.com",
                "invalid",
                "diana@example.com",
                "eve@example.com",
            ])) as ArrayRef,
        ),
        (
            "status",
            Arc::new(StringArray::from(vec![
                "active", "inactive", "active", "pending", "unknown",
            ])) as ArrayRef,
        ),
    ])
    .unwrap()
}

#[test]
fn test_is_not_null_passes_when_no_nulls() {
    let table = sample_table();
    let result = Validator::new(&table)
        .column("id")
        .unwrap()
        .is_not_null()
        .run()
        .unwrap()
        .remove(0);
    assert!(result.passed);
    assert_eq!(result.failing_count, 0);
}

#[test]
fn test_is_not_null_fails_when_nulls_present() {
    let table = sample_table();
    let result = Validator::new(&table)
        .column("name")
        .unwrap()
        .is_not_null()
        .run()
        .unwrap()
        .remove(0);
    assert!(!result.passed);
    assert_eq!(result.failing_count, 1);
    assert_eq!(result.failing_examples, vec![Value::Integer(3)]);
}

#[test]
fn test_is_positive_passes_when_all_positive() {
    let table = sample_table();
    let result = Validator::new(&table)
        .column("id")
        .unwrap()
        .is_positive()
        .run()
        .unwrap()
        .remove(0);
    assert!(result.passed);
}

#[test]
fn test_is_positive_fails_when_negative_present() {
    let table = sample_table();
    let result = Validator::new(&table)
        .column("age")
        .unwrap()
        .is_positive()
        .run()
        .unwrap()
        .remove(0);
    assert!(!result.passed);
    assert!(result.failing_examples.contains(&Value::Integer(-5)));
}

#[test]
fn test_is_positive_ignores_missing_values() {
    let table = Table::try_new(vec![(
        "score",
        Arc::new(Float64Array::from(vec![Some(1.0), None, Some(f64::NAN)])) as ArrayRef,
    )])
    .unwrap();
    let result = Validator::new(&table)
        .column("score")
        .unwrap()
        .is_positive()
        .run()
        .unwrap()
        .remove(0);
    assert!(result.passed);
}

#[test]
fn test_is_in_passes_when_all_valid() {
    let table = sample_table();
    let result = Validator::new(&table)
        .column("status")
        .unwrap()
        .is_in(["active", "inactive", "pending", "unknown"])
        .run()
        .unwrap()
        .remove(0);
    assert!(result.passed);
}

#[test]
fn test_is_in_fails_when_invalid_present() {
    let table = sample_table();
    let result = Validator::new(&table)
        .column("status")
        .unwrap()
        .is_in(["active", "inactive"])
        .run()
        .unwrap()
        .remove(0);
    assert!(!result.passed);
    assert_eq!(result.failing_count, 2);
    assert_eq!(
        result.failing_examples,
        vec![Value::from("pending"), Value::from("unknown")]
    );
}

#[test]
fn test_matches_passes_when_all_match() {
    let table = Table::try_new(vec![(
        "code",
        Arc::new(StringArray::from(vec!["ABC123", "DEF456", "GHI789"])) as ArrayRef,
    )])
    .unwrap();
    let result = Validator::new(&table)
        .column("code")
        .unwrap()
        .matches(r"^[A-Z]{3}\d{3}$")
        .unwrap()
        .run()
        .unwrap()
        .remove(0);
    assert!(result.passed);
}

#[test]
fn test_matches_fails_when_no_match() {
    let table = sample_table();
    let result = Validator::new(&table)
        .column("email")
        .unwrap()
        .matches(r".+@.+\..+")
        .unwrap()
        .run()
        .unwrap()
        .remove(0);
    assert!(!result.passed);
    assert!(result.failing_examples.contains(&Value::from("invalid")));
}

#[test]
fn test_min_value() {
    let table = sample_table();
    let results = Validator::new(&table)
        .column("age")
        .unwrap()
        .min_value(-10)
        .min_value(0)
        .run()
        .unwrap();
    assert!(results[0].passed);
    assert!(!results[1].passed);
    assert_eq!(results[1].failing_examples, vec![Value::Integer(-5)]);
}

#[test]
fn test_max_value() {
    let table = sample_table();
    let results = Validator::new(&table)
        .column("age")
        .unwrap()
        .max_value(200)
        .max_value(100)
        .run()
        .unwrap();
    assert!(results[0].passed);
    assert!(!results[1].passed);
    assert_eq!(results[1].message, "Found 1 values above 100");
}

#[test]
fn test_min_max_ignore_missing_values() {
    let table = Table::try_new(vec![(
        "score",
        Arc::new(Float64Array::from(vec![Some(5.0), None])) as ArrayRef,
    )])
    .unwrap();
    let results = Validator::new(&table)
        .column("score")
        .unwrap()
        .min_value(1)
        .max_value(10)
        .run()
        .unwrap();
    assert!(results.iter().all(|r| r.passed));
}

#[test]
fn test_is_unique_passes_when_unique() {
    let table = sample_table();
    let result = Validator::new(&table)
        .column("id")
        .unwrap()
        .is_unique()
        .run()
        .unwrap()
        .remove(0);
    assert!(result.passed);
}

#[test]
fn test_is_unique_fails_when_duplicates() {
    let table = Table::try_new(vec![(
        "value",
        Arc::new(Int64Array::from(vec![1, 2, 2, 3])) as ArrayRef,
    )])
    .unwrap();
    let result = Validator::new(&table)
        .column("value")
        .unwrap()
        .is_unique()
        .run()
        .unwrap()
        .remove(0);
    assert!(!result.passed);
    assert_eq!(result.failing_count, 2);
    assert_eq!(result.failing_examples, vec![Value::Integer(2)]);
}

#[test]
fn test_numeric_rules_on_text_column_do_not_abort() {
    let table = sample_table();
    let results = Validator::new(&table)
        .column("name")
        .unwrap()
        .is_positive()
        .min_value(0)
        .max_value(1)
        .is_not_null()
        .run()
        .unwrap();
    assert_eq!(results.len(), 4);
    for result in &results[..3] {
        assert!(!result.passed);
        assert_eq!(result.message, "Column 'name' is not numeric");
    }
    assert_eq!(results[3].check_name, "is_not_null");
}

#[test]
fn test_multiple_checks_on_same_column() {
    let table = sample_table();
    let results = Validator::new(&table)
        .column("age")
        .unwrap()
        .is_not_null()
        .is_positive()
        .max_value(120)
        .run()
        .unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[0].passed); // is_not_null
    assert!(!results[1].passed); // is_positive (has -5)
    assert!(!results[2].passed); // max_value (has 150)
}

#[test]
fn test_multiple_columns() {
    let table = sample_table();
    let results = Validator::new(&table)
        .column("id")
        .unwrap()
        .is_not_null()
        .is_positive()
        .column("name")
        .unwrap()
        .is_not_null()
        .run()
        .unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].column.as_deref(), Some("id"));
    assert_eq!(results[1].column.as_deref(), Some("id"));
    assert_eq!(results[2].column.as_deref(), Some("name"));
    let names: Vec<_> = results.iter().map(|r| r.check_name.as_str()).collect();
    assert_eq!(names, vec!["is_not_null", "is_positive", "is_not_null"]);
}

#[test]
fn test_unknown_column_is_a_usage_error() {
    let table = sample_table();
    let mut validator = Validator::new(&table);
    let err = validator.column("nope").err().unwrap();
    assert!(matches!(err, DqError::ColumnNotFound(ref c) if c == "nope"));
    assert!(validator.checks().is_empty());
}

#[test]
fn test_empty_validator_runs_nothing() {
    let table = sample_table();
    assert!(Validator::new(&table).run().unwrap().is_empty());
}

#[test]
fn test_is_unique_counts_repeated_nulls() {
    let table = Table::try_new(vec![(
        "code",
        Arc::new(StringArray::from(vec![Some("a"), None, None])) as ArrayRef,
    )])
    .unwrap();
    let result = Validator::new(&table)
        .column("code")
        .unwrap()
        .is_unique()
        .run()
        .unwrap()
        .remove(0);
    assert!(!result.passed);
    assert_eq!(result.failing_count, 2);
    assert_eq!(result.failing_examples, vec![Value::Null]);
}

#[test]
fn test_large_ids_are_not_merged() {
    let base = 1i64 << 53;
    let table = Table::try_new(vec![(
        "id",
        Arc::new(Int64Array::from(vec![base, base + 1])) as ArrayRef,
    )])
    .unwrap();
    let results = Validator::new(&table)
        .column("id")
        .unwrap()
        .is_unique()
        .is_in([base])
        .run()
        .unwrap();
    assert!(results[0].passed);
    assert!(!results[1].passed);
    assert_eq!(results[1].failing_examples, vec![Value::Integer(base + 1)]);
}

#[test]
fn test_unsigned_max_is_not_missing() {
    let table = Table::try_new(vec![(
        "id",
        Arc::new(UInt64Array::from(vec![u64::MAX, 1])) as ArrayRef,
    )])
    .unwrap();
    let results = Validator::new(&table)
        .column("id")
        .unwrap()
        .is_not_null()
        .is_positive()
        .run()
        .unwrap();
    assert!(results[0].passed);
    assert_eq!(results[0].failing_count, 0);
    assert!(results[1].passed);
}
