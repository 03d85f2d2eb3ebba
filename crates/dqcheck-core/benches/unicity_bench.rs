use arrow::array::{ArrayRef, StringArray};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dqcheck_core::Table;
use dqcheck_core::rules::{ColumnCheck, UnicityCheck};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::sync::Arc;

/// Build a single-column table where `unique_pct` of the rows are distinct.
///
/// * `build_table(1000, 1.0)` - 1000 unique values
/// * `build_table(1000, 0.5)` - 500 unique values, each repeated twice
fn build_table(size: usize, unique_pct: f64) -> Table {
    let num_unique = ((size as f64) * unique_pct).max(1.0) as usize;
    let values: Vec<String> = (0..size)
        .map(|i| format!("{:032}", i % num_unique))
        .collect();
    let array: ArrayRef = Arc::new(StringArray::from(values));
    Table::try_new(vec![("value", array)]).unwrap()
}

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

// Worst case: every value lands in its own group
static TABLES_100PCT_UNIQUE: Lazy<Vec<(usize, Table)>> =
    Lazy::new(|| SIZES.iter().map(|&s| (s, build_table(s, 1.0))).collect());

// Moderate duplication
static TABLES_50PCT_UNIQUE: Lazy<Vec<(usize, Table)>> =
    Lazy::new(|| SIZES.iter().map(|&s| (s, build_table(s, 0.5))).collect());

fn bench_group(c: &mut Criterion, name: &str, tables: &[(usize, Table)]) {
    let mut group = c.benchmark_group(name);
    let rule = UnicityCheck::new();

    for (size, table) in tables.iter() {
        group.throughput(criterion::Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), table, |b, table| {
            b.iter(|| {
                let column = table.column("value").unwrap();
                let result = rule.validate(&column).unwrap();
                black_box(result.failing_count);
            });
        });
    }

    group.finish();
}

fn bench_unicity_100pct_unique(c: &mut Criterion) {
    bench_group(c, "unicity_100pct_unique", &TABLES_100PCT_UNIQUE);
}

fn bench_unicity_50pct_unique(c: &mut Criterion) {
    bench_group(c, "unicity_50pct_unique", &TABLES_50PCT_UNIQUE);
}

criterion_group!(
    benches,
    bench_unicity_100pct_unique,
    bench_unicity_50pct_unique
);
criterion_main!(benches);
