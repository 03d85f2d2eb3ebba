mod constructor;
mod errors;
mod loader;
mod parser;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dqcheck_core::{Profiler, ValidationTally};
use dqcheck_reports::{ConsoleReporter, JsonReporter, Reporter};
use parser::Config;
use tracing_subscriber::EnvFilter;

use crate::constructor::construct_validator;
use crate::loader::load_table;

/// Output format for reports
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Print results to standard output (human-readable)
    Stdout,
    /// Output results in JSON format
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "dqcheck",
    version,
    about = "dqcheck - Data quality profiling and validation for CSV/Parquet files",
    long_about = "dqcheck profiles a tabular file and validates its columns against rules \
                  declared in a TOML file.\n\n\
                  Example usage:\n  \
                  dqcheck --input users.csv --config rules.toml --output stdout\n  \
                  dqcheck --input users.parquet --profile --partition country"
)]
struct Args {
    /// Path to the CSV or Parquet file to check
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Path to the TOML file that defines validation rules
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format for reports
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputFormat,

    /// Print the table summary and per-column profiles
    #[arg(short, long)]
    profile: bool,

    /// Print partitioning advice for a column (repeatable)
    #[arg(long, value_name = "COLUMN")]
    partition: Vec<String>,

    /// Enable debug logging and detailed error output
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether every validation check passed.
fn run(args: Args) -> Result<bool> {
    let table = load_table(&args.input)
        .with_context(|| format!("Failed to load input file: {}", args.input.display()))?;

    let reporter: Box<dyn Reporter> = match args.output {
        OutputFormat::Stdout => Box::new(ConsoleReporter::new()),
        OutputFormat::Json => Box::new(JsonReporter::default()),
    };

    // profiling is the default action when nothing else is requested
    let profile = args.profile || (args.config.is_none() && args.partition.is_empty());
    if profile {
        let profiler = Profiler::new(&table);
        let profiles = profiler.profile_all().context("Failed to profile table")?;
        let summary = profiler.summary().context("Failed to summarize table")?;
        println!("{}", reporter.report_profile(&profiles, Some(&summary))?);
    }

    for column in &args.partition {
        let report = Profiler::new(&table)
            .partition_recommendations(column)
            .with_context(|| format!("Failed to assess column '{}'", column))?;
        println!("{}", reporter.report_partition(&report)?);
    }

    let Some(config_path) = args.config else {
        return Ok(true);
    };
    let config_str = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: Config = toml::from_str(config_str.as_str())
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    let validator = construct_validator(&table, &config)
        .with_context(|| format!("Invalid rules in {}", config_path.display()))?;
    let results = validator.run().context("Validation failed")?;
    println!("{}", reporter.report_validation(&results)?);

    Ok(ValidationTally::from_results(&results).success())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let debug = args.debug;
    init_tracing(debug);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            if debug {
                eprintln!("Error: {:?}", err);
            } else {
                eprintln!("Error: {:#}", err);
                eprintln!("\nHint: Run with --debug flag for detailed error output");
            }
            ExitCode::FAILURE
        }
    }
}
