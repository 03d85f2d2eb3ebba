//! Partitioning advisory based on value skew and cardinality.

use std::collections::HashMap;
use std::fmt;

use crate::tables::{Column, ColumnKind};
use crate::utils::hasher::{ValueKey, Xxh3Builder};
use crate::utils::rounding::percentage;

const SKEW_HIGH: f64 = 5.0;
const SKEW_MODERATE: f64 = 2.0;
const CARDINALITY_MEDIUM: usize = 100;
const CARDINALITY_HIGH: usize = 1000;

/// Best reachable score.
pub const MAX_SCORE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkewLevel {
    High,
    Moderate,
    Low,
    /// No non-missing value to measure.
    Empty,
}

impl SkewLevel {
    pub fn from_factor(skew_factor: f64) -> Self {
        if skew_factor > SKEW_HIGH {
            SkewLevel::High
        } else if skew_factor > SKEW_MODERATE {
            SkewLevel::Moderate
        } else {
            SkewLevel::Low
        }
    }

    pub fn score(&self) -> i32 {
        match self {
            SkewLevel::High => -1,
            SkewLevel::Moderate => 0,
            SkewLevel::Low => 1,
            SkewLevel::Empty => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityLevel {
    Low,
    Medium,
    High,
}

impl CardinalityLevel {
    pub fn from_count(cardinality: usize) -> Self {
        if cardinality < CARDINALITY_MEDIUM {
            CardinalityLevel::Low
        } else if cardinality < CARDINALITY_HIGH {
            CardinalityLevel::Medium
        } else {
            CardinalityLevel::High
        }
    }

    /// Medium cardinality partitions best.
    pub fn score(&self) -> i32 {
        match self {
            CardinalityLevel::Low => 0,
            CardinalityLevel::Medium => 1,
            CardinalityLevel::High => -1,
        }
    }
}

/// Observations and scores for a partitionable column.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionAssessment {
    pub null_count: usize,
    pub null_percentage: f64,
    pub cardinality: usize,
    pub total_entries: usize,
    /// Share of non-missing rows held by the most frequent value.
    pub top_share: f64,
    /// `top_share` divided by the mean share `1 / cardinality`.
    pub skew_factor: f64,
    pub skew: SkewLevel,
    pub cardinality_level: CardinalityLevel,
}

impl PartitionAssessment {
    pub fn from_column(column: &Column<'_>) -> Self {
        let mut distribution: HashMap<ValueKey, usize, Xxh3Builder> =
            HashMap::with_hasher(Xxh3Builder);
        for value in column.values() {
            if let Some(key) = ValueKey::from_value(&value) {
                *distribution.entry(key).or_insert(0) += 1;
            }
        }

        let total_entries = column.len();
        let null_count = column.missing_count();
        let non_null: usize = distribution.values().sum();
        let cardinality = distribution.len();
        let top = distribution.values().copied().max().unwrap_or(0);

        let (top_share, skew_factor) = if non_null == 0 {
            (0.0, 0.0)
        } else {
            let top_share = top as f64 / non_null as f64;
            (top_share, top_share * cardinality as f64)
        };

        Self {
            null_count,
            null_percentage: percentage(null_count, total_entries),
            cardinality,
            total_entries,
            top_share,
            skew_factor,
            skew: if non_null == 0 {
                SkewLevel::Empty
            } else {
                SkewLevel::from_factor(skew_factor)
            },
            cardinality_level: CardinalityLevel::from_count(cardinality),
        }
    }

    pub fn score(&self) -> i32 {
        self.skew.score() + self.cardinality_level.score()
    }
}

/// Result of `Profiler::partition_recommendations`.
///
/// `assessment` is `None` when the column kind is not partitionable.
/// `Display` renders the human-readable advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionReport {
    pub column: String,
    pub data_type: String,
    pub kind: ColumnKind,
    pub assessment: Option<PartitionAssessment>,
}

impl PartitionReport {
    pub fn from_column(column: &Column<'_>) -> Self {
        let assessment = column
            .kind()
            .is_partitionable()
            .then(|| PartitionAssessment::from_column(column));
        Self {
            column: column.name().to_string(),
            data_type: column.data_type().to_string(),
            kind: column.kind(),
            assessment,
        }
    }

    pub fn is_recommended(&self) -> bool {
        self.assessment.as_ref().is_some_and(|a| a.score() > 0)
    }
}

impl fmt::Display for PartitionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = &self.column;
        let Some(a) = &self.assessment else {
            return writeln!(
                f,
                "Column '{}' is of type '{}'. Not recommended for partitioning.",
                col, self.data_type
            );
        };
        let rule = "=".repeat(40);

        writeln!(f, "Column '{}' is of type '{}'.", col, self.data_type)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Observations:")?;
        if a.null_count > 0 {
            writeln!(
                f,
                "WARNING: Null values in '{}' column: {} ({}%)",
                col, a.null_count, a.null_percentage
            )?;
            writeln!(
                f,
                "Consider handling nulls before partitioning, NULL values can cause data skew over time."
            )?;
        }
        writeln!(f, "Unique entries in '{}' column: {}", col, a.cardinality)?;
        writeln!(f, "Total entries in table: {}", a.total_entries)?;
        writeln!(
            f,
            "Biggest entry proportion in '{}' column: {:.2}%",
            col,
            a.top_share * 100.0
        )?;
        writeln!(
            f,
            "Skew factor of '{}' column: {:.2}. 1.0 means no skew. 2.0 means the biggest entry is twice the average.",
            col, a.skew_factor
        )?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Recommendation:")?;
        let skew_line = match a.skew {
            SkewLevel::High => "is highly skewed",
            SkewLevel::Moderate => "is moderately skewed",
            SkewLevel::Low => "has low skew",
            SkewLevel::Empty => "has no non-missing values to measure skew",
        };
        writeln!(
            f,
            "The '{}' column {}. Score {:+}",
            col,
            skew_line,
            a.skew.score()
        )?;
        let cardinality_line = match a.cardinality_level {
            CardinalityLevel::Low => "low",
            CardinalityLevel::Medium => "medium",
            CardinalityLevel::High => "high",
        };
        writeln!(
            f,
            "This column has {} cardinality. Score {:+}",
            cardinality_line,
            a.cardinality_level.score()
        )?;
        writeln!(
            f,
            "Column '{}' recommended score: {} / {}. Higher is better.",
            col,
            a.score(),
            MAX_SCORE
        )?;
        writeln!(f, "{}", rule)
    }
}
