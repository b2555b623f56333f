//! Property tests for the filter and aggregation stages.
//!
//! Each property holds for every dataset and every criteria, including empty
//! datasets, empty factory selections and years absent from the data.

use proptest::prelude::*;
use safedash_core::prelude::*;
use safedash_core::{mean_risk, MONTHS_PER_YEAR};
use safedash_model::IncidentRecord;
use safedash_test_utils::{arb_criteria, arb_dataset};

proptest! {
    #[test]
    fn prop_filter_is_subset_satisfying_predicate(dataset in arb_dataset(), criteria in arb_criteria()) {
        let view = filter(&dataset, &criteria);

        prop_assert!(view.len() <= dataset.len());
        for record in &view {
            prop_assert!(dataset.iter().any(|r| std::ptr::eq(r, record)));
            prop_assert_eq!(record.year(), criteria.selected_year);
            prop_assert!(criteria.selected_factories.contains(&record.factory()));
        }

        let expected = dataset.iter().filter(|r| criteria.matches(r)).count();
        prop_assert_eq!(view.len(), expected);
    }

    #[test]
    fn prop_filter_preserves_dataset_order(dataset in arb_dataset(), criteria in arb_criteria()) {
        let view = filter(&dataset, &criteria);
        let positions: Vec<usize> = view
            .iter()
            .map(|record| {
                dataset
                    .iter()
                    .position(|r| std::ptr::eq(r, record))
                    .unwrap()
            })
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_empty_selection_is_empty(dataset in arb_dataset(), year in 2000i32..2030) {
        let view = filter(&dataset, &FilterCriteria::new(year, Vec::<Factory>::new()));
        prop_assert!(view.is_empty());
    }

    #[test]
    fn prop_filter_idempotent(dataset in arb_dataset(), criteria in arb_criteria()) {
        let once = filter(&dataset, &criteria);
        let twice = filter(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_trend_sparse_and_sums_to_len(dataset in arb_dataset(), criteria in arb_criteria()) {
        let view = filter(&dataset, &criteria);
        let trend = compute_monthly_trend(&view);

        prop_assert!(trend.points().iter().all(|p| p.count > 0));
        prop_assert!(trend.points().iter().all(|p| (1..=MONTHS_PER_YEAR).contains(&p.month)));
        prop_assert!(trend.points().windows(2).all(|w| w[0].month < w[1].month));
        prop_assert_eq!(trend.total(), view.len());
        prop_assert_eq!(trend.dense().iter().map(|p| p.count).sum::<usize>(), view.len());
    }

    #[test]
    fn prop_kpis_agree_with_view(dataset in arb_dataset(), criteria in arb_criteria()) {
        let view = filter(&dataset, &criteria);
        let kpis = compute_kpis(&view);

        prop_assert_eq!(kpis.count, view.len());
        prop_assert_eq!(kpis.mean_risk.is_none(), view.is_empty());
        prop_assert_eq!(kpis.top_type.is_none(), view.is_empty());
        prop_assert_eq!(mean_risk(&view).is_err(), view.is_empty());

        if let Some(mean) = kpis.mean_risk {
            prop_assert!((1.0..=100.0).contains(&mean));
        }
        if let Some(top) = kpis.top_type {
            let top_count = view.iter().filter(|r| r.incident_type() == top).count();
            for kind in IncidentType::ALL {
                let count = view.iter().filter(|r| r.incident_type() == kind).count();
                prop_assert!(count <= top_count);
                if count == top_count {
                    prop_assert!(kind >= top);
                }
            }
        }
    }

    #[test]
    fn prop_pivot_no_data_exactly_where_absent(dataset in arb_dataset(), criteria in arb_criteria()) {
        let view = filter(&dataset, &criteria);
        let pivot = compute_risk_pivot(&view);

        for kind in IncidentType::ALL {
            for factory in Factory::ALL {
                let matching: Vec<&IncidentRecord> = view
                    .iter()
                    .filter(|r| r.incident_type() == kind && r.factory() == factory)
                    .collect();
                let cell = pivot.get(kind, factory);
                prop_assert_eq!(cell.is_no_data(), matching.is_empty());
                if let PivotCell::Mean(mean) = cell {
                    prop_assert!(mean >= 1.0);
                }
            }
        }
    }
}
