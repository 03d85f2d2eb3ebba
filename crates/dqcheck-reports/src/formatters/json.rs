use dqcheck_core::{
    ColumnProfile, NumericStats, PartitionReport, TableSummary, TextStats, ValidationResult,
    ValidationTally, Value,
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{ReportError, Reporter};

/// Machine-readable output with a configurable indent width.
#[derive(Debug, Clone)]
pub struct JsonReporter {
    pub indent: usize,
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

#[derive(Serialize)]
struct SummaryDoc {
    total: usize,
    passed: usize,
    failed: usize,
    success: bool,
}

#[derive(Serialize)]
struct ResultDoc<'a> {
    check_name: &'a str,
    column: Option<&'a str>,
    passed: bool,
    message: &'a str,
    failing_count: usize,
    failing_examples: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct ValidationDoc<'a> {
    summary: SummaryDoc,
    results: Vec<ResultDoc<'a>>,
}

#[derive(Serialize)]
struct TableSummaryDoc<'a> {
    row_count: usize,
    column_count: usize,
    columns: &'a [String],
    memory_usage_bytes: usize,
    total_null_count: usize,
}

#[derive(Serialize)]
struct NumericDoc {
    min: Option<f64>,
    max: Option<f64>,
    mean: Option<f64>,
    median: Option<f64>,
    std: Option<f64>,
}

#[derive(Serialize)]
struct TextDoc {
    min_length: usize,
    max_length: usize,
    avg_length: f64,
}

#[derive(Serialize)]
struct ColumnDoc<'a> {
    column: &'a str,
    dtype: &'a str,
    kind: &'static str,
    count: usize,
    null_count: usize,
    null_percentage: f64,
    unique_count: usize,
    #[serde(flatten)]
    numeric: Option<NumericDoc>,
    #[serde(flatten)]
    text: Option<TextDoc>,
}

#[derive(Serialize)]
struct ProfileDoc<'a> {
    summary: Option<TableSummaryDoc<'a>>,
    columns: Vec<ColumnDoc<'a>>,
}

#[derive(Serialize)]
struct AssessmentDoc {
    null_count: usize,
    null_percentage: f64,
    cardinality: usize,
    total_entries: usize,
    top_share: f64,
    skew_factor: f64,
    skew_score: i32,
    cardinality_score: i32,
    score: i32,
}

#[derive(Serialize)]
struct PartitionDoc<'a> {
    column: &'a str,
    dtype: &'a str,
    kind: &'static str,
    recommended: bool,
    assessment: Option<AssessmentDoc>,
}

impl From<&NumericStats> for NumericDoc {
    fn from(s: &NumericStats) -> Self {
        Self {
            min: s.min,
            max: s.max,
            mean: s.mean,
            median: s.median,
            std: s.std,
        }
    }
}

impl From<&TextStats> for TextDoc {
    fn from(s: &TextStats) -> Self {
        Self {
            min_length: s.min_length,
            max_length: s.max_length,
            avg_length: s.avg_length,
        }
    }
}

fn json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Unsigned(u) => serde_json::Value::from(*u),
        // non-finite floats have no JSON form and become null
        Value::Float(v) => serde_json::Number::from_f64(*v)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Text(s) => serde_json::Value::String(s.clone()),
    }
}

impl JsonReporter {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    fn to_json<T: Serialize>(&self, doc: &T) -> Result<String, ReportError> {
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        doc.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl Reporter for JsonReporter {
    fn report_validation(&self, results: &[ValidationResult]) -> Result<String, ReportError> {
        let tally = ValidationTally::from_results(results);
        let doc = ValidationDoc {
            summary: SummaryDoc {
                total: tally.total,
                passed: tally.passed,
                failed: tally.failed,
                success: tally.success(),
            },
            results: results
                .iter()
                .map(|r| ResultDoc {
                    check_name: &r.check_name,
                    column: r.column.as_deref(),
                    passed: r.passed,
                    message: &r.message,
                    failing_count: r.failing_count,
                    failing_examples: r.failing_examples.iter().map(json_value).collect(),
                })
                .collect(),
        };
        self.to_json(&doc)
    }

    fn report_profile(
        &self,
        profiles: &[ColumnProfile],
        summary: Option<&TableSummary>,
    ) -> Result<String, ReportError> {
        let doc = ProfileDoc {
            summary: summary.map(|s| TableSummaryDoc {
                row_count: s.row_count,
                column_count: s.column_count,
                columns: &s.columns,
                memory_usage_bytes: s.memory_usage_bytes,
                total_null_count: s.total_null_count,
            }),
            columns: profiles
                .iter()
                .map(|p| ColumnDoc {
                    column: &p.column,
                    dtype: &p.data_type,
                    kind: p.kind.as_str(),
                    count: p.count,
                    null_count: p.null_count,
                    null_percentage: p.null_percentage,
                    unique_count: p.unique_count,
                    numeric: p.numeric.as_ref().map(NumericDoc::from),
                    text: p.text.as_ref().map(TextDoc::from),
                })
                .collect(),
        };
        self.to_json(&doc)
    }

    fn report_partition(&self, report: &PartitionReport) -> Result<String, ReportError> {
        let doc = PartitionDoc {
            column: &report.column,
            dtype: &report.data_type,
            kind: report.kind.as_str(),
            recommended: report.is_recommended(),
            assessment: report.assessment.as_ref().map(|a| AssessmentDoc {
                null_count: a.null_count,
                null_percentage: a.null_percentage,
                cardinality: a.cardinality,
                total_entries: a.total_entries,
                top_share: a.top_share,
                skew_factor: a.skew_factor,
                skew_score: a.skew.score(),
                cardinality_score: a.cardinality_level.score(),
                score: a.score(),
            }),
        };
        self.to_json(&doc)
    }
}
