use std::fmt::Write;

use dqcheck_core::{ColumnProfile, PartitionReport, TableSummary, ValidationResult, ValidationTally};
use prettytable::{Cell, Row, Table as PrettyTable, format};

use crate::utils::numbers::{format_bytes, format_numbers};
use crate::{ReportError, Reporter};

const WIDTH: usize = 60;
/// Failing examples shown per result.
const SHOWN_EXAMPLES: usize = 3;

/// Human-readable text output.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter {}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn render_validation(&self, results: &[ValidationResult]) -> String {
        let tally = ValidationTally::from_results(results);
        let heavy = "=".repeat(WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", heavy);
        let _ = writeln!(out, "VALIDATION RESULTS");
        let _ = writeln!(out, "{}", heavy);

        for result in results {
            let status = if result.passed { "✓ PASS" } else { "✗ FAIL" };
            let col_info = result
                .column
                .as_ref()
                .map(|c| format!("[{}] ", c))
                .unwrap_or_default();
            let _ = writeln!(out, "\n{} {}{}", status, col_info, result.check_name);
            let _ = writeln!(out, "       {}", result.message);

            if !result.passed && !result.failing_examples.is_empty() {
                let examples: Vec<String> = result
                    .failing_examples
                    .iter()
                    .take(SHOWN_EXAMPLES)
                    .map(|v| v.to_string())
                    .collect();
                let _ = writeln!(out, "       Examples: {}", examples.join(", "));
            }
        }

        let _ = writeln!(out, "\n{}", "-".repeat(WIDTH));
        let _ = writeln!(
            out,
            "SUMMARY: {} passed, {} failed, {} total",
            tally.passed, tally.failed, tally.total
        );
        let _ = writeln!(out, "{}", heavy);
        out
    }

    pub fn render_profile(&self, profiles: &[ColumnProfile], summary: Option<&TableSummary>) -> String {
        let heavy = "=".repeat(WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", heavy);
        let _ = writeln!(out, "DATA PROFILE");
        let _ = writeln!(out, "{}", heavy);

        if let Some(summary) = summary {
            let _ = writeln!(
                out,
                "\nTable: {} rows × {} columns",
                format_numbers(summary.row_count),
                summary.column_count
            );
            let _ = writeln!(out, "Memory usage: {}", format_bytes(summary.memory_usage_bytes));
            let _ = writeln!(out, "Total nulls: {}", summary.total_null_count);
        }

        if !profiles.is_empty() {
            let _ = writeln!(out, "\n{}", profile_table(profiles));
        }
        let _ = writeln!(out, "{}", heavy);
        out
    }
}

fn profile_table(profiles: &[ColumnProfile]) -> String {
    let mut table = PrettyTable::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(
        [
            "Column", "Type", "Non-null", "Null %", "Unique", "Min", "Max", "Mean", "Median",
            "Std", "Length",
        ]
        .iter()
        .map(|h| Cell::new(h))
        .collect(),
    ));

    for profile in profiles {
        let numeric = profile.numeric.as_ref();
        let stat = |pick: fn(&dqcheck_core::NumericStats) -> Option<f64>| {
            numeric
                .and_then(pick)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        let length = profile
            .text
            .as_ref()
            .map(|t| format!("{}-{} (avg {})", t.min_length, t.max_length, t.avg_length))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(Row::new(vec![
            Cell::new(&profile.column),
            Cell::new(&format!("{} ({})", profile.kind, profile.data_type)),
            Cell::new(&format!("{} / {}", profile.non_null_count(), profile.count)),
            Cell::new(&format!("{}%", profile.null_percentage)),
            Cell::new(&profile.unique_count.to_string()),
            Cell::new(&stat(|s| s.min)),
            Cell::new(&stat(|s| s.max)),
            Cell::new(&stat(|s| s.mean)),
            Cell::new(&stat(|s| s.median)),
            Cell::new(&stat(|s| s.std)),
            Cell::new(&length),
        ]));
    }

    table.to_string()
}

impl Reporter for ConsoleReporter {
    fn report_validation(&self, results: &[ValidationResult]) -> Result<String, ReportError> {
        Ok(self.render_validation(results))
    }

    fn report_profile(
        &self,
        profiles: &[ColumnProfile],
        summary: Option<&TableSummary>,
    ) -> Result<String, ReportError> {
        Ok(self.render_profile(profiles, summary))
    }

    fn report_partition(&self, report: &PartitionReport) -> Result<String, ReportError> {
        Ok(report.to_string())
    }
}
