// src/generate.rs
//! Dummy record generation.
//!
//! The aggregation core never produces its own records; callers inject a
//! [`RecordSource`]. [`SeededSource`] draws from a seeded `StdRng`, so the
//! same seed always yields the same data set.

use crate::error::{Result, TallyError};
use crate::store::CategorySet;
use crate::types::{Category, Record};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Supplies the three category collections.
pub trait RecordSource {
    fn generate(&mut self) -> CategorySet;
}

/// Upper bound on `records_per_category`; keeps index ranges and
/// allocations well inside `usize`.
pub const MAX_RECORDS_PER_CATEGORY: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub records_per_category: usize,
    pub code_count: u32,
    pub operators: Vec<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            records_per_category: 50,
            code_count: 50,
            operators: default_operators(),
        }
    }
}

#[must_use]
pub fn default_operators() -> Vec<String> {
    vec!["OPERATOR A".into(), "OPERATOR B".into(), "OPERATOR C".into()]
}

impl GeneratorSettings {
    /// # Errors
    /// Returns `Config` if no codes or no operators are available to draw from,
    /// or if `records_per_category` exceeds [`MAX_RECORDS_PER_CATEGORY`].
    pub fn validate(&self) -> Result<()> {
        if self.records_per_category > MAX_RECORDS_PER_CATEGORY {
            return Err(TallyError::Config(format!(
                "generator.records_per_category must be at most {MAX_RECORDS_PER_CATEGORY}"
            )));
        }
        if self.code_count == 0 {
            return Err(TallyError::Config("generator.code_count must be at least 1".into()));
        }
        if self.operators.is_empty() {
            return Err(TallyError::Config("generator.operators must not be empty".into()));
        }
        Ok(())
    }
}

/// Description text attached to every record of a category.
#[must_use]
pub fn category_text(category: Category) -> &'static str {
    match category {
        Category::Resolved => "Error ABC occurred, that is `resolved`",
        Category::Unresolved => "Error DEF occurred, that is `unresolved`",
        Category::Backlog => "Error XYZ occurred, that is in the `backlog`",
    }
}

/// A seed derived from the wall clock, for runs that did not ask for one.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Seeded generator reproducing the fixed three-category layout.
#[derive(Debug, Clone)]
pub struct SeededSource {
    settings: GeneratorSettings,
    seed: u64,
    rng: StdRng,
}

impl SeededSource {
    /// # Errors
    /// Returns `Config` if `settings` leave nothing to draw from.
    pub fn new(settings: GeneratorSettings, seed: u64) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn category(&mut self, category: Category) -> Vec<Record> {
        let n = self.settings.records_per_category;
        let start = category.ordinal() * n;
        let text = category_text(category);
        (start..start + n)
            .map(|index| Record {
                index,
                code: self.rng.random_range(0..self.settings.code_count),
                text: text.to_string(),
                operator_name: self
                    .settings
                    .operators
                    .choose(&mut self.rng)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect()
    }
}

impl RecordSource for SeededSource {
    fn generate(&mut self) -> CategorySet {
        let mut set = CategorySet::new();
        for category in Category::ALL {
            let records = self.category(category);
            set.insert(category, records);
        }
        debug!(seed = self.seed, total = set.total_records(), "generated categories");
        set
    }
}
