use crate::aggregate::DedupMode;
use crate::generate::{default_operators, GeneratorSettings};
use crate::table::EmptyPolicy;
use crate::types::Field;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationConfig {
    #[serde(default)]
    pub dedup: DedupMode,
    #[serde(default = "default_field")]
    pub field: Field,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            dedup: DedupMode::default(),
            field: default_field(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub empty: EmptyPolicy,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { empty: EmptyPolicy::default(), color: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    // 0 means "derive from the clock"
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_records")]
    pub records_per_category: usize,
    #[serde(default = "default_code_count")]
    pub code_count: u32,
    #[serde(default = "default_operators")]
    pub operators: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            records_per_category: default_records(),
            code_count: default_code_count(),
            operators: default_operators(),
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            records_per_category: self.records_per_category,
            code_count: self.code_count,
            operators: self.operators.clone(),
        }
    }
}

const fn default_true() -> bool { true }
const fn default_field() -> Field { Field::Code }
const fn default_records() -> usize { 50 }
const fn default_code_count() -> u32 { 50 }

/// On-disk shape of `tally.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TallyToml {
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub aggregation: AggregationConfig,
    pub report: ReportConfig,
    pub generator: GeneratorConfig,
}
