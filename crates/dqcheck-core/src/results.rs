use crate::types::Value;

/// Maximum number of failing examples kept on a result.
pub const MAX_EXAMPLES: usize = 5;

/// Outcome of a single queued check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub check_name: String,
    pub column: Option<String>,
    pub passed: bool,
    pub message: String,
    pub failing_count: usize,
    pub failing_examples: Vec<Value>,
}

impl ValidationResult {
    /// A result that passes or fails on `failing_count`.
    pub fn from_failures(
        check_name: &str,
        column: &str,
        failing_count: usize,
        message: String,
        mut failing_examples: Vec<Value>,
    ) -> Self {
        failing_examples.truncate(MAX_EXAMPLES);
        Self {
            check_name: check_name.to_string(),
            column: Some(column.to_string()),
            passed: failing_count == 0,
            message,
            failing_count,
            failing_examples,
        }
    }

    /// A failed result with no counted rows, used when a check cannot apply.
    pub fn not_applicable(check_name: &str, column: &str, message: String) -> Self {
        Self {
            check_name: check_name.to_string(),
            column: Some(column.to_string()),
            passed: false,
            message,
            failing_count: 0,
            failing_examples: Vec::new(),
        }
    }
}

/// Pass/fail tally over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationTally {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl ValidationTally {
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }

    pub fn success(&self) -> bool {
        self.failed == 0
    }
}
