//! Dashboard configuration
//!
//! Configuration is plain serde data with builder-style overrides. It can be
//! loaded from TOML; dates are written as quoted `YYYY-MM-DD` strings:
//!
//! ```toml
//! [generator]
//! start = "2023-01-01"
//! end = "2025-12-31"
//! seed = 42
//! ```

use crate::error::{DashboardError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Synthetic dataset generation
    pub generator: GeneratorConfig,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With generator configuration
    #[inline]
    #[must_use]
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// With a fixed RNG seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.generator.seed = Some(seed);
        self
    }

    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()
    }
}

/// Parameters for the synthetic dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// First day of the range; sampling starts on the first Sunday on or after it
    pub start: NaiveDate,
    /// Last day of the range, inclusive
    pub end: NaiveDate,
    /// RNG seed; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With date range
    #[inline]
    #[must_use]
    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// With RNG seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject empty or reversed ranges
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(DashboardError::Config(format!(
                "generator start {} is after end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_range_covers_reference_years() {
        let config = GeneratorConfig::default();
        assert_eq!(config.start, date(2023, 1, 1));
        assert_eq!(config.end, date(2025, 12, 31));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let config = GeneratorConfig::new().with_range(date(2025, 1, 1), date(2024, 1, 1));
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));
    }

    #[test]
    fn toml_partial_overrides() {
        let config = DashboardConfig::from_toml_str("[generator]\nseed = 7\n").unwrap();
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.generator.start, date(2023, 1, 1));

        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn toml_invalid_range_fails_validation() {
        let text = "[generator]\nstart = \"2026-01-01\"\nend = \"2025-01-01\"\n";
        assert!(matches!(
            DashboardConfig::from_toml_str(text),
            Err(DashboardError::Config(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\nstart = \"2024-01-01\"\nend = \"2024-12-31\"\nseed = 3").unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.generator.start, date(2024, 1, 1));
        assert_eq!(config.generator.seed, Some(3));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = DashboardConfig::load("/nonexistent/safedash.toml");
        assert!(matches!(result, Err(DashboardError::Io(_))));
    }
}
