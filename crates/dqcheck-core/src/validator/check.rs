use crate::errors::DqError;
use crate::rules::{ColumnCheck, IsInCheck, NullCheck, RangeCheck, RegexMatch, UnicityCheck};
use crate::types::Value;

/// Check kinds the validator can queue, with their parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckKind {
    NotNull,
    Unique,
    Positive,
    MinValue(f64),
    MaxValue(f64),
    IsIn(Vec<Value>),
    Matches(String),
}

impl CheckKind {
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::NotNull => "is_not_null",
            CheckKind::Unique => "is_unique",
            CheckKind::Positive => "is_positive",
            CheckKind::MinValue(_) => "min_value",
            CheckKind::MaxValue(_) => "max_value",
            CheckKind::IsIn(_) => "is_in",
            CheckKind::Matches(_) => "matches",
        }
    }

    /// Build the executable rule for this kind.
    pub fn compile(&self) -> Result<Box<dyn ColumnCheck>, DqError> {
        let rule: Box<dyn ColumnCheck> = match self {
            CheckKind::NotNull => Box::new(NullCheck::new()),
            CheckKind::Unique => Box::new(UnicityCheck::new()),
            CheckKind::Positive => Box::new(RangeCheck::positive()),
            CheckKind::MinValue(minimum) => Box::new(RangeCheck::min(*minimum)),
            CheckKind::MaxValue(maximum) => Box::new(RangeCheck::max(*maximum)),
            CheckKind::IsIn(members) => Box::new(IsInCheck::new(members)),
            CheckKind::Matches(pattern) => Box::new(RegexMatch::new(pattern)?),
        };
        Ok(rule)
    }
}

/// A queued check: what to run and the column selected when it was queued.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckSpec {
    pub kind: CheckKind,
    pub column: Option<String>,
}

impl CheckSpec {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}
