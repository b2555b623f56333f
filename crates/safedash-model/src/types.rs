//! Core incident types
//!
//! Defines the fixed enumerations and the single record type:
//! - Factories (facility identifiers)
//! - Incident types (categories), in their stable enumeration order
//! - Incident records with year/month derived from the date

use crate::error::ModelError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest allowed risk score
pub const RISK_SCORE_MIN: u8 = 1;

/// Highest allowed risk score
pub const RISK_SCORE_MAX: u8 = 100;

/// Facility where an incident happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Factory {
    /// Factory A
    #[serde(rename = "A공장")]
    A,
    /// Factory B
    #[serde(rename = "B공장")]
    B,
    /// Factory C
    #[serde(rename = "C공장")]
    C,
}

impl Factory {
    /// Every factory, in enumeration order
    pub const ALL: [Factory; 3] = [Factory::A, Factory::B, Factory::C];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Factory::A => "A공장",
            Factory::B => "B공장",
            Factory::C => "C공장",
        }
    }
}

impl fmt::Display for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Factory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Factory::ALL
            .into_iter()
            .find(|factory| factory.label() == s)
            .ok_or_else(|| ModelError::UnknownFactory(s.to_string()))
    }
}

/// Incident category
///
/// Declaration order is the tie-break order for "most frequent type".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncidentType {
    /// Fire
    #[serde(rename = "화재")]
    Fire,
    /// Slip, trip or fall
    #[serde(rename = "넘어짐")]
    Fall,
    /// Machine fault
    #[serde(rename = "기계결함")]
    MachineFault,
    /// Minor injury
    #[serde(rename = "단순부상")]
    MinorInjury,
}

impl IncidentType {
    /// Every incident type, in enumeration order
    pub const ALL: [IncidentType; 4] = [
        IncidentType::Fire,
        IncidentType::Fall,
        IncidentType::MachineFault,
        IncidentType::MinorInjury,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            IncidentType::Fire => "화재",
            IncidentType::Fall => "넘어짐",
            IncidentType::MachineFault => "기계결함",
            IncidentType::MinorInjury => "단순부상",
        }
    }

    /// Position in enumeration order
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            IncidentType::Fire => 0,
            IncidentType::Fall => 1,
            IncidentType::MachineFault => 2,
            IncidentType::MinorInjury => 3,
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IncidentType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        IncidentType::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| ModelError::UnknownIncidentType(s.to_string()))
    }
}

/// One synthetic safety incident
///
/// `year` and `month` are derived from `date` at construction and never
/// set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentRecord {
    date: NaiveDate,
    factory: Factory,
    #[serde(rename = "type")]
    incident_type: IncidentType,
    risk_score: u8,
    year: i32,
    month: u32,
}

impl IncidentRecord {
    /// Create a record, rejecting risk scores outside [1, 100]
    pub fn new(
        date: NaiveDate,
        factory: Factory,
        incident_type: IncidentType,
        risk_score: u8,
    ) -> Result<Self, ModelError> {
        if !(RISK_SCORE_MIN..=RISK_SCORE_MAX).contains(&risk_score) {
            return Err(ModelError::RiskScoreOutOfRange {
                score: risk_score,
                min: RISK_SCORE_MIN,
                max: RISK_SCORE_MAX,
            });
        }

        Ok(Self {
            date,
            factory,
            incident_type,
            risk_score,
            year: date.year(),
            month: date.month(),
        })
    }

    /// Calendar date of the incident
    #[inline]
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Facility where it happened
    #[inline]
    #[must_use]
    pub fn factory(&self) -> Factory {
        self.factory
    }

    /// Incident category
    #[inline]
    #[must_use]
    pub fn incident_type(&self) -> IncidentType {
        self.incident_type
    }

    /// Risk score in [1, 100]
    #[inline]
    #[must_use]
    pub fn risk_score(&self) -> u8 {
        self.risk_score
    }

    /// Calendar year of `date`
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month of `date` (1-12)
    #[inline]
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }
}
