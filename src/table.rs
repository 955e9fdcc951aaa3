// src/table.rs
//! Grid-style text tables.
//!
//! ```text
//! List : resolved
//! ===============
//! +------+------+-------+
//! | code | text | count |
//! +======+======+=======+
//! |    1 | x    |     2 |
//! +------+------+-------+
//! ```
//!
//! Column headers come from the first row; numeric columns are right-aligned.

use crate::error::{Result, TallyError};
use crate::types::{AggregatedRow, Record};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Line emitted in place of a table when there are no rows and the
/// placeholder policy is active.
pub const NO_DATA: &str = "(no data)";

/// What to do when asked to render zero rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPolicy {
    /// Fail with `EmptyDataset`.
    #[default]
    Error,
    /// Emit the title block followed by [`NO_DATA`].
    Placeholder,
}

/// An ordered key/value row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<(String, String)>,
}

impl TableRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cell(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.cells.push((key.into(), value.to_string()));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Conversion into a table row, keys in display order.
pub trait ToTableRow {
    fn to_table_row(&self) -> TableRow;
}

impl ToTableRow for Record {
    fn to_table_row(&self) -> TableRow {
        TableRow::new()
            .cell("index", self.index)
            .cell("code", self.code)
            .cell("text", &self.text)
            .cell("operator_name", &self.operator_name)
    }
}

impl ToTableRow for AggregatedRow {
    fn to_table_row(&self) -> TableRow {
        match self {
            Self::Code { code, text, count } => TableRow::new()
                .cell("code", code)
                .cell("text", text)
                .cell("count", count),
            Self::Operator { operator_name, count } => TableRow::new()
                .cell("operator_name", operator_name)
                .cell("count", count),
        }
    }
}

/// Converts a slice of rows.
#[must_use]
pub fn rows_of<T: ToTableRow>(items: &[T]) -> Vec<TableRow> {
    items.iter().map(ToTableRow::to_table_row).collect()
}

/// Renders a titled grid table.
///
/// # Errors
/// Returns `EmptyDataset` when `rows` is empty.
pub fn render(table_name: &str, rows: &[TableRow]) -> Result<String> {
    let Some(first) = rows.first() else {
        return Err(TallyError::EmptyDataset(table_name.to_string()));
    };
    let headers: Vec<&str> = first.keys().collect();
    let body: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| headers.iter().map(|h| row.get(h).unwrap_or("")).collect())
        .collect();

    let mut out = title(table_name);
    out.push_str(&grid(&headers, &body));
    Ok(out)
}

/// Renders according to `policy`; never fails under `Placeholder`.
///
/// # Errors
/// Returns `EmptyDataset` for empty `rows` under `EmptyPolicy::Error`.
pub fn render_with(policy: EmptyPolicy, table_name: &str, rows: &[TableRow]) -> Result<String> {
    match policy {
        EmptyPolicy::Error => render(table_name, rows),
        EmptyPolicy::Placeholder => Ok(render_or_placeholder(table_name, rows)),
    }
}

/// Renders the table, or the title block plus [`NO_DATA`] for empty input.
#[must_use]
pub fn render_or_placeholder(table_name: &str, rows: &[TableRow]) -> String {
    render(table_name, rows).unwrap_or_else(|_| format!("{}{NO_DATA}\n", title(table_name)))
}

fn title(table_name: &str) -> String {
    let line = format!("List : {table_name}");
    let underline = "=".repeat(line.chars().count());
    format!("{line}\n{underline}\n")
}

fn grid(headers: &[&str], body: &[Vec<&str>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .filter_map(|row| row.get(i))
                .map(|v| v.chars().count())
                .fold(h.chars().count(), usize::max)
        })
        .collect();
    let numeric: Vec<bool> = (0..headers.len())
        .map(|i| is_numeric_column(body, i))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{}", border(&widths, '-'));
    let _ = writeln!(out, "{}", line(headers, &widths, &numeric));
    let _ = writeln!(out, "{}", border(&widths, '='));
    for row in body {
        let _ = writeln!(out, "{}", line(row, &widths, &numeric));
        let _ = writeln!(out, "{}", border(&widths, '-'));
    }
    out
}

fn border(widths: &[usize], fill: char) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.extend(std::iter::repeat(fill).take(w + 2));
        s.push('+');
    }
    s
}

fn line(cells: &[&str], widths: &[usize], numeric: &[bool]) -> String {
    let mut s = String::from("|");
    for (i, &w) in widths.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        let right = numeric.get(i).copied().unwrap_or(false);
        if right {
            let _ = write!(s, " {cell:>w$} |");
        } else {
            let _ = write!(s, " {cell:<w$} |");
        }
    }
    s
}

fn is_numeric_column(body: &[Vec<&str>], col: usize) -> bool {
    let mut values = body
        .iter()
        .filter_map(|row| row.get(col))
        .filter(|v| !v.is_empty())
        .peekable();
    values.peek().is_some() && values.all(|v| v.parse::<f64>().is_ok())
}
