use regex::Regex;

use crate::errors::DqError;
use crate::results::{MAX_EXAMPLES, ValidationResult};
use crate::rules::ColumnCheck;
use crate::tables::Column;

/// Fails on non-missing values whose text form has no match starting at
/// the first character. The pattern is not anchored at the end.
#[derive(Debug, Clone)]
pub struct RegexMatch {
    regex: Regex,
}

impl RegexMatch {
    pub fn new(pattern: &str) -> Result<Self, DqError> {
        let regex = Regex::new(pattern).map_err(|e| DqError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Leftmost-first search: a match at offset 0 exists iff the leftmost
    /// match starts there.
    pub fn matches_at_start(&self, text: &str) -> bool {
        self.regex.find(text).is_some_and(|m| m.start() == 0)
    }
}

impl ColumnCheck for RegexMatch {
    fn name(&self) -> &'static str {
        "matches"
    }

    fn validate(&self, column: &Column<'_>) -> Result<ValidationResult, DqError> {
        let mut failing = 0;
        let mut examples = Vec::new();
        for value in column.values().filter(|v| !v.is_null()) {
            if self.matches_at_start(&value.text_form()) {
                continue;
            }
            failing += 1;
            if examples.len() < MAX_EXAMPLES {
                examples.push(value);
            }
        }

        let message = if failing > 0 {
            format!("Found {} values not matching pattern", failing)
        } else {
            "All values match pattern".to_string()
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
