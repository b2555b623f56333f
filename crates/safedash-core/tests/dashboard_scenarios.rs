//! End-to-end dashboard scenarios.
//!
//! These tests drive the whole pipeline the way a front end does: obtain
//! the session dataset, build criteria from the user's selection, filter,
//! and aggregate.

use pretty_assertions::assert_eq;
use safedash_core::prelude::*;
use safedash_core::REFERENCE_RECORD_COUNT;
use safedash_test_utils::scenario_dataset;

/// Three records, two of them in 2024: the filter keeps both 2024 rows and
/// the aggregates reflect exactly those two.
#[test]
fn three_record_walkthrough() {
    let dataset = scenario_dataset();
    let criteria = FilterCriteria::from_labels(2024, ["A공장", "B공장"]);

    let view = filter(&dataset, &criteria);
    assert_eq!(view.len(), 2);

    let kpis = compute_kpis(&view);
    assert_eq!(kpis.count, 2);
    assert_eq!(kpis.mean_risk, Some(50.0));
    // One fire and one fall: the tie goes to the type listed first
    assert_eq!(kpis.top_type, Some(IncidentType::Fire));

    let pivot = compute_risk_pivot(&view);
    assert_eq!(pivot.get(IncidentType::Fire, Factory::A), PivotCell::Mean(80.0));
    assert_eq!(pivot.get(IncidentType::Fall, Factory::B), PivotCell::Mean(20.0));
    let no_data = pivot.entries().filter(|e| e.cell.is_no_data()).count();
    assert_eq!(no_data, IncidentType::ALL.len() * Factory::ALL.len() - 2);

    let trend = compute_monthly_trend(&view);
    let months: Vec<(u32, usize)> = trend.points().iter().map(|p| (p.month, p.count)).collect();
    assert_eq!(months, vec![(3, 1), (5, 1)]);
}

/// Unknown factory labels never fail the pass; they just match nothing.
#[test]
fn unknown_labels_yield_empty_dashboard() {
    let dataset = scenario_dataset();
    let criteria = FilterCriteria::from_labels(2024, ["D공장"]);

    assert!(criteria.validate_against(&dataset).is_err());

    let snapshot = DashboardSnapshot::build(&dataset, &criteria);
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.kpis.count, 0);
    assert!(snapshot.kpis.mean_is_undefined());
    assert!(snapshot.trend.is_empty());
    assert!(snapshot.pivot.is_empty());
}

/// Repeated passes within a session see the same generated data.
#[test]
fn session_passes_reuse_dataset() {
    let store = SessionStore::new(DashboardConfig::new());
    let session = store.create();

    let dataset = session.dataset().unwrap();
    assert_eq!(dataset.len(), REFERENCE_RECORD_COUNT);

    let year = dataset.years()[0];
    let all = FilterCriteria::new(year, dataset.factories());
    let first = DashboardSnapshot::build(&dataset, &all).kpis;

    let narrowed = FilterCriteria::new(year, [Factory::A]);
    let _ = DashboardSnapshot::build(&dataset, &narrowed);

    let again = session.dataset().unwrap();
    let second = DashboardSnapshot::build(&again, &all).kpis;

    assert_eq!(first, second);
    assert_eq!(*dataset, *again);
}

/// Every year of the reference range contributes roughly a year of weeks,
/// and the per-year views partition the dataset.
#[test]
fn yearly_views_partition_generated_dataset() {
    let session = Session::new(DashboardConfig::new().with_seed(2024));
    let dataset = session.dataset().unwrap();

    assert_eq!(dataset.years(), vec![2025, 2024, 2023]);

    let total: usize = dataset
        .years()
        .into_iter()
        .map(|year| filter(&*dataset, &FilterCriteria::new(year, Factory::ALL)).len())
        .sum();
    assert_eq!(total, dataset.len());

    for year in dataset.years() {
        let view = filter(&*dataset, &FilterCriteria::new(year, Factory::ALL));
        assert!((52..=53).contains(&view.len()));
        assert_eq!(compute_monthly_trend(&view).points().len(), 12);
    }
}
