//! Numeric and text statistics backing [`ColumnProfile`](super::ColumnProfile).

use arrow::array::{Float64Array, StringArray};

use crate::utils::rounding::round_to;

/// Statistics of a numeric column, each rounded to two decimals.
///
/// Every field is `None` when the column holds no non-missing value.
/// `std` is the sample standard deviation and needs at least two values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std: Option<f64>,
}

/// Character-length statistics over the non-missing values of a text column.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    pub min_length: usize,
    pub max_length: usize,
    pub avg_length: f64,
}

/// Running count, mean, variance and extrema.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    /// Welford's algorithm for running mean and variance
    #[inline]
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if self.count == 1 {
            self.min = value;
            self.max = value;
        } else {
            if value < self.min {
                self.min = value;
            }
            if value > self.max {
                self.max = value;
            }
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    /// Standard deviation using sample variance (N-1)
    pub fn std_dev(&self) -> Option<f64> {
        (self.count > 1).then(|| (self.m2 / (self.count - 1) as f64).sqrt())
    }
}

impl NumericStats {
    pub fn from_array(numbers: &Float64Array) -> Self {
        let mut acc = Accumulator::default();
        let mut values: Vec<f64> = numbers.iter().flatten().collect();
        values.iter().for_each(|&v| acc.update(v));
        values.sort_by(f64::total_cmp);

        let round = |v: Option<f64>| v.map(|v| round_to(v, 2));
        Self {
            min: round(acc.min()),
            max: round(acc.max()),
            mean: round(acc.mean()),
            median: round(median(&values)),
            std: round(acc.std_dev()),
        }
    }
}

/// Median of already sorted values.
fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    match n {
        0 => None,
        n if n % 2 == 1 => Some(sorted[n / 2]),
        n => Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0),
    }
}

impl TextStats {
    /// `None` when every value is missing.
    pub fn from_array(strings: &StringArray) -> Option<Self> {
        let lengths: Vec<usize> = strings.iter().flatten().map(|s| s.chars().count()).collect();
        let min_length = *lengths.iter().min()?;
        let max_length = *lengths.iter().max()?;
        let total: usize = lengths.iter().sum();
        Some(Self {
            min_length,
            max_length,
            avg_length: round_to(total as f64 / lengths.len() as f64, 2),
        })
    }
}
