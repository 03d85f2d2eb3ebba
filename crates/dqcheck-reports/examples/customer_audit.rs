//! Profile and validate a small customer table with known quality issues.
//!
//! Run with:
//! ```bash
//! cargo run -p dqcheck-reports --example customer_audit
//! ```

use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use dqcheck_core::{Profiler, Table, Validator};
use dqcheck_reports::{ConsoleReporter, JsonReporter, Reporter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = Table::try_new(vec![
        // duplicate id
        ("customer_id", Arc::new(Int64Array::from(vec![1, 2, 3, 4, 5, 5])) as ArrayRef),
        (
            "name",
            Arc::new(StringArray::from(vec![
                Some("Alice Smith"),
                Some("Bob Jones"),
                None,
                Some("Diana Prince"),
                Some("Eve Wilson"),
                Some("Frank Miller"),
            ])) as ArrayRef,
        ),
        // negative and unrealistic ages
        ("age", Arc::new(Int64Array::from(vec![25, -5, 30, 35, 150, 42])) as ArrayRef),
        (
            "email",
            Arc::new(StringArray::from(vec![
                "alice@example.com",
                "bob@test.com",
                "not-an-email",
                "diana@example.com",
                "eve@example.com",
                "frank@example.com",
            ])) as ArrayRef,
        ),
        (
            "status",
            Arc::new(StringArray::from(vec![
                "active", "inactive", "active", "pending", "unknown", "active",
            ])) as ArrayRef,
        ),
    ])?;

    let console = ConsoleReporter::new();

    let profiler = Profiler::new(&table);
    let summary = profiler.summary()?;
    let profiles = profiler.profile_all()?;
    println!("{}", console.report_profile(&profiles, Some(&summary))?);
    println!("{}", console.report_partition(&profiler.partition_recommendations("status")?)?);

    let mut validator = Validator::new(&table);
    validator
        .column("customer_id")?
        .is_not_null()
        .is_unique()
        .is_positive()
        .column("name")?
        .is_not_null()
        .column("age")?
        .is_not_null()
        .is_positive()
        .min_value(0)
        .max_value(120)
        .column("email")?
        .is_not_null()
        .matches(r".+@.+\..+")?
        .column("status")?
        .is_in(["active", "inactive", "pending"]);
    let results = validator.run()?;

    println!("{}", console.report_validation(&results)?);

    println!("\nJSON Output:");
    println!("{}", "-".repeat(60));
    println!("{}", JsonReporter::default().report_validation(&results)?);
    Ok(())
}
