//! Report assembly and console output.
//!
//! Multi-table reports are built from a [`CategorySet`], one grid table per
//! category, optionally aggregated by a field first. Reports are diagnostics:
//! they go to the log (via `tracing`) or to stdout, never to a machine-readable
//! contract. Machine-readable output goes through [`print_json`].

use crate::aggregate::Aggregator;
use crate::error::Result;
use crate::store::CategorySet;
use crate::table::{self, EmptyPolicy};
use crate::types::{Category, Field, GroupValue, IntersectionResult};
use colored::Colorize;
use std::collections::BTreeMap;
use tracing::info;

/// Logged in place of a report when there is nothing to log.
pub const EMPTY_NOTICE: &str = "log_info called with empty data";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Aggregate each category by this field before rendering; raw records otherwise.
    pub field: Option<Field>,
    pub aggregator: Aggregator,
    pub empty: EmptyPolicy,
}

/// Renders one table per category, separated by blank lines.
///
/// # Errors
/// Returns `EmptyDataset` for an empty category under `EmptyPolicy::Error`.
pub fn build_report(set: &CategorySet, opts: &ReportOptions) -> Result<String> {
    let mut tables = Vec::new();
    for (category, records) in set.iter() {
        let rows = match opts.field {
            Some(field) => table::rows_of(&opts.aggregator.aggregate(records, field)),
            None => table::rows_of(records),
        };
        tables.push(table::render_with(opts.empty, category.as_str(), &rows)?);
    }
    Ok(tables.join("\n"))
}

/// Input accepted by [`log_info`].
#[derive(Debug, Clone, Copy)]
pub enum LogData<'a> {
    /// Nothing to log; emits [`EMPTY_NOTICE`].
    Empty,
    /// A plain message, logged as-is.
    Message(&'a str),
    /// One grid table per category, shaped by [`ReportOptions`].
    Categories(&'a CategorySet),
}

/// Logs a message or a multi-table report as a single INFO event.
///
/// Empty messages and empty category sets log [`EMPTY_NOTICE`] instead.
///
/// # Errors
/// Propagates [`build_report`] failures; nothing is logged in that case.
pub fn log_info(data: LogData<'_>, opts: &ReportOptions) -> Result<()> {
    match data {
        LogData::Message(message) if !message.is_empty() => {
            info!(target: "tally::report", "{message}");
        }
        LogData::Categories(set) if !set.is_empty() => {
            let report = build_report(set, opts)?;
            info!(target: "tally::report", "\n{report}");
        }
        LogData::Empty | LogData::Message(_) | LogData::Categories(_) => {
            info!(target: "tally::report", "{EMPTY_NOTICE}");
        }
    }
    Ok(())
}

/// Prints pairwise intersection counts.
pub fn print_intersections(result: &IntersectionResult) {
    println!("{}", "SHARED CODES".cyan().bold());
    for (pair, count) in result.iter() {
        let (a, b) = pair.categories();
        println!("  {:<10} x {:<10} {}", a.as_str(), b.as_str(), format_count(count));
    }
}

/// Prints a `{value: count}` map for one category.
pub fn print_counts(category: Category, field: Field, counts: &BTreeMap<GroupValue, usize>) {
    println!(
        "{} {} by {}",
        "COUNTS".cyan().bold(),
        category.as_str().bold(),
        field.as_str()
    );
    if counts.is_empty() {
        println!("  {}", table::NO_DATA.dimmed());
        return;
    }
    let width = counts
        .keys()
        .map(|v| v.to_string().chars().count())
        .max()
        .unwrap_or(0);
    for (value, count) in counts {
        let label = value.to_string();
        println!("  {label:<width$}  {}", format_count(*count));
    }
}

/// Prints the count of one value.
pub fn print_count(category: Category, field: Field, value: &GroupValue, count: usize) {
    println!(
        "{} {} {} = {value}: {}",
        "COUNT".cyan().bold(),
        category.as_str().bold(),
        field.as_str(),
        format_count(count)
    );
}

fn format_count(n: usize) -> String {
    if n == 0 {
        n.to_string().dimmed().to_string()
    } else {
        n.to_string().green().to_string()
    }
}

/// `{category: {value: count}}` with values in their natural order
/// (numeric for codes).
///
/// # Errors
/// Returns error if serialization fails.
pub fn counts_json(
    category: Category,
    counts: &BTreeMap<GroupValue, usize>,
) -> anyhow::Result<String> {
    let mut out = BTreeMap::new();
    out.insert(category.as_str(), counts);
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
