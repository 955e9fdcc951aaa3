// src/cli/handlers.rs
//! Command handlers. Each invocation generates its own category data and
//! shares nothing with other invocations.

use super::args::{Cli, Commands, OutputFormat};
use crate::aggregate;
use crate::config::Config;
use crate::exit::TallyExit;
use crate::generate::{seed_from_clock, RecordSource, SeededSource};
use crate::intersect;
use crate::reporting::{self, LogData, ReportOptions};
use crate::store::CategorySet;
use crate::types::{Category, Field};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tracing::info;

/// Per-invocation state: resolved config plus freshly generated data.
pub struct Session {
    pub config: Config,
    pub format: OutputFormat,
    pub seed: u64,
    pub data: CategorySet,
}

impl Session {
    /// Generates the category data for this run.
    ///
    /// # Errors
    /// Returns error if the generator settings are unusable.
    pub fn start(config: Config, seed: Option<u64>, format: OutputFormat) -> Result<Self> {
        let seed = seed
            .or(Some(config.generator.seed).filter(|s| *s != 0))
            .unwrap_or_else(seed_from_clock);
        let mut source = SeededSource::new(config.generator.settings(), seed)
            .context("cannot build record generator")?;
        info!(seed, "generating resolved, unresolved and backlog lists");
        let data = source.generate();
        Ok(Self { config, format, seed, data })
    }

    fn field(&self, raw: Option<&str>) -> Result<Field> {
        match raw {
            Some(name) => Ok(name.parse()?),
            None => Ok(self.config.aggregation.field),
        }
    }
}

/// Runs the parsed command.
///
/// # Errors
/// Returns the first failure from the selected handler.
pub fn dispatch(cli: &Cli, config: Config) -> Result<TallyExit> {
    let session = Session::start(config, cli.seed, cli.format)?;
    match &cli.command {
        Commands::Lists => handle_lists(&session),
        Commands::Intersections => handle_intersections(&session),
        Commands::Counts { category, field } => {
            handle_counts(&session, category, field.as_deref())
        }
        Commands::Count { value, category, field } => {
            handle_count(&session, value, category, field.as_deref())
        }
        Commands::Report { field, raw } => handle_report(&session, field.as_deref(), *raw),
    }
}

/// Prints the generated lists.
///
/// # Errors
/// Returns error if output fails.
pub fn handle_lists(session: &Session) -> Result<TallyExit> {
    match session.format {
        OutputFormat::Json => reporting::print_json(&session.data)?,
        OutputFormat::Text => {
            let opts = ReportOptions {
                empty: session.config.report.empty,
                ..ReportOptions::default()
            };
            println!("{}", reporting::build_report(&session.data, &opts)?);
        }
    }
    Ok(TallyExit::Success)
}

/// Prints the pairwise shared-code counts.
///
/// # Errors
/// Returns error if a category is missing or output fails.
pub fn handle_intersections(session: &Session) -> Result<TallyExit> {
    info!("computing intersection counts between resolved, unresolved and backlog lists");
    let result = intersect::intersect_counts(&session.data)?;
    match session.format {
        OutputFormat::Json => reporting::print_json(&result)?,
        OutputFormat::Text => reporting::print_intersections(&result),
    }
    Ok(TallyExit::Success)
}

/// Prints `{value: count}` for one category.
///
/// # Errors
/// Returns error for unknown categories or unsupported fields.
pub fn handle_counts(session: &Session, category: &str, field: Option<&str>) -> Result<TallyExit> {
    let category: Category = category.parse()?;
    let field = session.field(field)?;
    let counts = aggregate::counts(session.data.get(category)?, field);

    match session.format {
        OutputFormat::Json => println!("{}", reporting::counts_json(category, &counts)?),
        OutputFormat::Text => reporting::print_counts(category, field, &counts),
    }
    Ok(TallyExit::Success)
}

/// Prints the count of a single value.
///
/// # Errors
/// Returns `ValueNotFound` (wrapped) if the value never occurs.
pub fn handle_count(
    session: &Session,
    value: &str,
    category: &str,
    field: Option<&str>,
) -> Result<TallyExit> {
    let category: Category = category.parse()?;
    let field = session.field(field)?;
    let value = field.parse_value(value)?;
    let count = aggregate::count_of(session.data.get(category)?, field, &value)?;

    match session.format {
        OutputFormat::Json => {
            let mut out = BTreeMap::new();
            out.insert(category.as_str(), count);
            reporting::print_json(&out)?;
        }
        OutputFormat::Text => reporting::print_count(category, field, &value, count),
    }
    Ok(TallyExit::Success)
}

/// Renders every category as a grid table and logs it.
///
/// # Errors
/// Returns `EmptyDataset` (wrapped) for an empty category under the `error` policy.
pub fn handle_report(session: &Session, field: Option<&str>, raw: bool) -> Result<TallyExit> {
    let field = if raw { None } else { Some(session.field(field)?) };
    let aggregator = session.config.aggregator();

    if session.format == OutputFormat::Json {
        let mut out = BTreeMap::new();
        for (category, records) in session.data.iter() {
            let value = match field {
                Some(f) => serde_json::to_value(aggregator.aggregate(records, f))?,
                None => serde_json::to_value(records)?,
            };
            out.insert(category.as_str(), value);
        }
        reporting::print_json(&out)?;
        return Ok(TallyExit::Success);
    }

    let opts = ReportOptions {
        field,
        aggregator,
        empty: session.config.report.empty,
    };
    reporting::log_info(LogData::Categories(&session.data), &opts)?;
    Ok(TallyExit::Success)
}
