// src/config/mod.rs
pub mod types;

pub use self::types::{AggregationConfig, Config, GeneratorConfig, ReportConfig, TallyToml};

use crate::aggregate::Aggregator;
use crate::error::{Result, TallyError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "tally.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and loads `tally.toml` from the working directory.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    /// Applies `tally.toml` if present. A broken file is reported and ignored.
    pub fn load_local_config(&mut self) {
        if let Err(e) = self.load_from(Path::new(CONFIG_FILE)) {
            warn!("ignoring {CONFIG_FILE}: {e}");
        }
    }

    /// Applies the file at `path`. A missing file leaves the config untouched.
    ///
    /// # Errors
    /// Returns `Io` if the file exists but cannot be read, or `Config` if it is
    /// malformed or fails validation.
    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(());
        }
        let content = fs::read_to_string(path).map_err(|source| TallyError::Io {
            source,
            path: PathBuf::from(path),
        })?;
        self.parse_toml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(())
    }

    /// Parses TOML content and replaces the file-backed sections.
    ///
    /// # Errors
    /// Returns `Config` on syntax errors, unknown enum values, or invalid settings.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed: TallyToml = toml::from_str(content)?;
        let candidate = Self {
            aggregation: parsed.aggregation,
            report: parsed.report,
            generator: parsed.generator,
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// # Errors
    /// Returns `Config` if any value parsed correctly but is unusable.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config = Self::new();
        config.parse_toml(content)?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `Config` if the generator has nothing to draw from.
    pub fn validate(&self) -> Result<()> {
        self.generator.settings().validate()
    }

    /// Aggregator configured with the chosen dedup mode.
    #[must_use]
    pub fn aggregator(&self) -> Aggregator {
        Aggregator::new(self.aggregation.dedup)
    }

    /// Serializes the file-backed sections back to TOML.
    ///
    /// # Errors
    /// Returns `Config` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        let file = TallyToml {
            aggregation: self.aggregation.clone(),
            report: self.report.clone(),
            generator: self.generator.clone(),
        };
        toml::to_string_pretty(&file).map_err(|e| TallyError::Config(e.to_string()))
    }
}
