use dqcheck_core::Value;
use serde::Deserialize;

/// Rule file layout:
///
/// ```toml
/// [[column]]
/// name = "age"
/// rules = [{ check = "is_not_null" }, { check = "min_value", value = 0 }]
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub column: Vec<ColumnConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum RuleConfig {
    IsNotNull,
    IsUnique,
    IsPositive,
    MinValue { value: f64 },
    MaxValue { value: f64 },
    IsIn { values: Vec<AllowedValue> },
    Matches { pattern: String },
}

impl RuleConfig {
    pub fn name(&self) -> &'static str {
        match self {
            RuleConfig::IsNotNull => "is_not_null",
            RuleConfig::IsUnique => "is_unique",
            RuleConfig::IsPositive => "is_positive",
            RuleConfig::MinValue { .. } => "min_value",
            RuleConfig::MaxValue { .. } => "max_value",
            RuleConfig::IsIn { .. } => "is_in",
            RuleConfig::Matches { .. } => "matches",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AllowedValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&AllowedValue> for Value {
    fn from(v: &AllowedValue) -> Self {
        match v {
            AllowedValue::Boolean(b) => Value::Boolean(*b),
            AllowedValue::Integer(i) => Value::Integer(*i),
            AllowedValue::Float(f) => Value::Float(*f),
            AllowedValue::Text(s) => Value::Text(s.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules() {
        let config: Config = toml::from_str(
            r#"
            [[column]]
            name = "age"
            rules = [
                { check = "is_not_null" },
                { check = "min_value", value = 0 },
                { check = "max_value", value = 120.5 },
            ]

            [[column]]
            name = "status"
            rules = [
                { check = "is_in", values = ["active", "inactive", 3, true] },
                { check = "matches", pattern = "^[a-z]+$" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(config.column.len(), 2);
        assert_eq!(config.column[0].name, "age");
        assert_eq!(config.column[0].rules[0], RuleConfig::IsNotNull);
        assert_eq!(config.column[0].rules[1], RuleConfig::MinValue { value: 0.0 });
        assert_eq!(config.column[0].rules[2].name(), "max_value");
        assert_eq!(
            config.column[1].rules[0],
            RuleConfig::IsIn {
                values: vec![
                    AllowedValue::Text("active".to_string()),
                    AllowedValue::Text("inactive".to_string()),
                    AllowedValue::Integer(3),
                    AllowedValue::Boolean(true),
                ]
            }
        );
    }

    #[test]
    fn test_column_without_rules() {
        let config: Config = toml::from_str("[[column]]\nname = \"id\"\n").unwrap();
        assert!(config.column[0].rules.is_empty());
    }

    #[test]
    fn test_unknown_check_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [[column]]
            name = "id"
            rules = [{ check = "is_awesome" }]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_parameter_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [[column]]
            name = "id"
            rules = [{ check = "min_value" }]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_allowed_value_conversion() {
        assert_eq!(Value::from(&AllowedValue::Integer(1)), Value::Integer(1));
        assert_eq!(
            Value::from(&AllowedValue::Text("a".into())),
            Value::Text("a".into())
        );
    }
}
