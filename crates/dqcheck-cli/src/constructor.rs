use dqcheck_core::{DqError, Table, Validator, Value};

use crate::errors::{CliError, ConfigError};
use crate::parser::{Config, RuleConfig};

/// Queue every configured rule on a validator bound to `table`.
pub fn construct_validator<'t>(
    table: &'t Table,
    config: &Config,
) -> Result<Validator<'t>, CliError> {
    if config.column.is_empty() {
        return Err(ConfigError::Empty.into());
    }

    let mut validator = Validator::new(table);
    for column in &config.column {
        validator.column(&column.name).map_err(|e| match e {
            DqError::ColumnNotFound(column_name) => {
                CliError::from(ConfigError::UnknownColumn { column_name })
            }
            other => other.into(),
        })?;
        for rule in &column.rules {
            apply_rule(&mut validator, &column.name, rule)?;
        }
    }
    Ok(validator)
}

fn apply_rule(
    validator: &mut Validator<'_>,
    column_name: &str,
    rule: &RuleConfig,
) -> Result<(), ConfigError> {
    match rule {
        RuleConfig::IsNotNull => {
            validator.is_not_null();
        }
        RuleConfig::IsUnique => {
            validator.is_unique();
        }
        RuleConfig::IsPositive => {
            validator.is_positive();
        }
        RuleConfig::MinValue { value } => {
            validator.min_value(*value);
        }
        RuleConfig::MaxValue { value } => {
            validator.max_value(*value);
        }
        RuleConfig::IsIn { values } => {
            if values.is_empty() {
                return Err(ConfigError::RuleError {
                    rule_name: rule.name().to_string(),
                    column_name: column_name.to_string(),
                    message: "'values' must not be empty".to_string(),
                });
            }
            validator.is_in(values.iter().map(Value::from));
        }
        RuleConfig::Matches { pattern } => {
            validator
                .matches(pattern)
                .map_err(|e| ConfigError::RuleError {
                    rule_name: rule.name().to_string(),
                    column_name: column_name.to_string(),
                    message: e.to_string(),
                })?;
        }
    }
    Ok(())
}
