// src/aggregate.rs
//! Grouping of record collections by a field.
//!
//! Every row carries the occurrence count of its grouping value, computed over
//! the whole input before any row is collapsed. How rows collapse is governed
//! by [`DedupMode`]:
//!
//! - `Variants`: rows collapse only when every retained attribute is equal, so
//!   one grouping value can appear once per distinct accompanying text.
//! - `Strict`: exactly one row per grouping value; the first record seen for a
//!   value supplies the accompanying attributes.

use crate::error::{Result, TallyError};
use crate::types::{AggregatedRow, Field, GroupValue, Record};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupMode {
    #[default]
    Variants,
    Strict,
}

/// Groups records by a field using a fixed [`DedupMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    mode: DedupMode,
}

impl Aggregator {
    #[must_use]
    pub fn new(mode: DedupMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> DedupMode {
        self.mode
    }

    /// Aggregates `records` by `field`, sorted ascending by grouping value.
    ///
    /// The input is only borrowed; rows are built from projected copies.
    #[must_use]
    pub fn aggregate(&self, records: &[Record], field: Field) -> Vec<AggregatedRow> {
        let tally = counts(records, field);
        let count_for = |r: &Record| tally.get(&field.value_of(r)).copied().unwrap_or(0);

        let rows: Vec<AggregatedRow> = match self.mode {
            DedupMode::Variants => records
                .iter()
                .map(|r| AggregatedRow::project(r, field, count_for(r)))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            DedupMode::Strict => {
                let mut by_value: BTreeMap<GroupValue, AggregatedRow> = BTreeMap::new();
                for r in records {
                    by_value
                        .entry(field.value_of(r))
                        .or_insert_with(|| AggregatedRow::project(r, field, count_for(r)));
                }
                by_value.into_values().collect()
            }
        };

        debug!(
            field = field.as_str(),
            mode = ?self.mode,
            records = records.len(),
            rows = rows.len(),
            "aggregated"
        );
        rows
    }

    /// Same as [`Aggregator::aggregate`] with the field given by name.
    ///
    /// # Errors
    /// Returns `UnsupportedField` if `field` is not `code` or `operator_name`.
    pub fn aggregate_by_name(&self, records: &[Record], field: &str) -> Result<Vec<AggregatedRow>> {
        let field: Field = field.parse()?;
        Ok(self.aggregate(records, field))
    }
}

/// Aggregates with the default (`Variants`) dedup mode.
#[must_use]
pub fn aggregate(records: &[Record], field: Field) -> Vec<AggregatedRow> {
    Aggregator::default().aggregate(records, field)
}

/// Occurrence count of every distinct value of `field`.
#[must_use]
pub fn counts(records: &[Record], field: Field) -> BTreeMap<GroupValue, usize> {
    let mut tally: BTreeMap<GroupValue, usize> = BTreeMap::new();
    for r in records {
        *tally.entry(field.value_of(r)).or_insert(0) += 1;
    }
    tally
}

/// Occurrence count of a single value.
///
/// # Errors
/// Returns `ValueNotFound` if no record carries `value`.
pub fn count_of(records: &[Record], field: Field, value: &GroupValue) -> Result<usize> {
    let n = records
        .iter()
        .filter(|r| field.value_of(r) == *value)
        .count();
    if n == 0 {
        return Err(TallyError::ValueNotFound {
            field: field.as_str().to_string(),
            value: value.to_string(),
        });
    }
    Ok(n)
}
