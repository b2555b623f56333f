//! Testing utilities for safedash workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use chrono::NaiveDate;
use proptest::prelude::*;
use safedash_model::{Dataset, Factory, FilterCriteria, IncidentRecord, IncidentType};

/// Build a record from an ISO date; panics on bad fixture input
pub fn record(date: &str, factory: Factory, incident_type: IncidentType, risk_score: u8) -> IncidentRecord {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    IncidentRecord::new(date, factory, incident_type, risk_score).unwrap()
}

/// The three-record walkthrough dataset:
/// (2024, A공장, 화재, 80), (2024, B공장, 넘어짐, 20), (2023, A공장, 화재, 50)
pub fn scenario_dataset() -> Dataset {
    Dataset::new(vec![
        record("2024-03-03", Factory::A, IncidentType::Fire, 80),
        record("2024-05-12", Factory::B, IncidentType::Fall, 20),
        record("2023-08-06", Factory::A, IncidentType::Fire, 50),
    ])
}

pub fn arb_factory() -> impl Strategy<Value = Factory> {
    prop::sample::select(Factory::ALL.to_vec())
}

pub fn arb_incident_type() -> impl Strategy<Value = IncidentType> {
    prop::sample::select(IncidentType::ALL.to_vec())
}

/// Records dated 2022-01-01 through 2026-12-31
pub fn arb_record() -> impl Strategy<Value = IncidentRecord> {
    (0i64..(5 * 365), arb_factory(), arb_incident_type(), 1u8..=100).prop_map(
        |(offset, factory, incident_type, risk_score)| {
            let base = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
            let date = base + chrono::Duration::days(offset);
            IncidentRecord::new(date, factory, incident_type, risk_score).unwrap()
        },
    )
}

pub fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_record(), 0..64).prop_map(Dataset::new)
}

/// Criteria over the same year span as [`arb_record`], including empty selections
pub fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (2021i32..=2027, prop::sample::subsequence(Factory::ALL.to_vec(), 0..=3))
        .prop_map(|(year, factories)| FilterCriteria::new(year, factories))
}
