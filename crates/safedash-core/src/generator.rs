//! Synthetic dataset generator
//!
//! One record per week: dates fall on Sundays between the configured start
//! and end (inclusive). Factory, incident type and risk score are drawn
//! independently and uniformly for each record.

use crate::config::GeneratorConfig;
use crate::error::Result;
use chrono::{Datelike, Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use safedash_model::{
    Dataset, Factory, IncidentRecord, IncidentType, RISK_SCORE_MAX, RISK_SCORE_MIN,
};

/// Number of records in the reference generation (2023-01-01 ..= 2025-12-31)
pub const REFERENCE_RECORD_COUNT: usize = 157;

/// Generate a dataset from configuration
///
/// Seeded configurations are reproducible; unseeded ones draw from the OS.
pub fn generate_dataset(config: &GeneratorConfig) -> Result<Dataset> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_with_rng(config, &mut rng)
}

/// Generate a dataset with a caller-supplied RNG
pub fn generate_with_rng<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Dataset> {
    config.validate()?;

    let dates = weekly_dates(config.start, config.end);
    let mut records = Vec::with_capacity(dates.len());

    for date in dates {
        let factory = Factory::ALL[rng.random_range(0..Factory::ALL.len())];
        let incident_type = IncidentType::ALL[rng.random_range(0..IncidentType::ALL.len())];
        let risk_score = rng.random_range(RISK_SCORE_MIN..=RISK_SCORE_MAX);
        records.push(IncidentRecord::new(date, factory, incident_type, risk_score)?);
    }

    tracing::info!(
        "Generated {} incident records ({} ..= {})",
        records.len(),
        config.start,
        config.end
    );

    Ok(Dataset::new(records))
}

/// Sundays from the first one on or after `start` through `end`
#[must_use]
pub fn weekly_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let offset = (7 - start.weekday().num_days_from_sunday()) % 7;
    let mut dates = Vec::new();
    let mut current = start.checked_add_days(Days::new(u64::from(offset)));

    while let Some(date) = current {
        if date > end {
            break;
        }
        dates.push(date);
        current = date.checked_add_days(Days::new(7));
    }

    dates
}
