//! Monthly incident counts

use safedash_model::FilteredView;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of months in a dense series
pub const MONTHS_PER_YEAR: u32 = 12;

/// Count of records in one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// Month (1-12)
    pub month: u32,
    /// Records in that month
    pub count: usize,
}

/// Sparse monthly series, ascending by month
///
/// Months with no records are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MonthlyTrend {
    points: Vec<MonthlyCount>,
}

impl MonthlyTrend {
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[MonthlyCount] {
        &self.points
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.points.iter().map(|p| p.count).sum()
    }

    /// Month with the most records, earliest month on ties
    #[must_use]
    pub fn peak(&self) -> Option<MonthlyCount> {
        self.points
            .iter()
            .copied()
            .fold(None, |best: Option<MonthlyCount>, p| match best {
                Some(b) if b.count >= p.count => Some(b),
                _ => Some(p),
            })
    }

    /// Zero-filled series for all twelve months
    #[must_use]
    pub fn dense(&self) -> Vec<MonthlyCount> {
        (1..=MONTHS_PER_YEAR)
            .map(|month| MonthlyCount {
                month,
                count: self
                    .points
                    .iter()
                    .find(|p| p.month == month)
                    .map_or(0, |p| p.count),
            })
            .collect()
    }
}

/// Count records per month
#[must_use]
pub fn compute_monthly_trend(view: &FilteredView<'_>) -> MonthlyTrend {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in view {
        *counts.entry(record.month()).or_default() += 1;
    }

    MonthlyTrend {
        points: counts
            .into_iter()
            .map(|(month, count)| MonthlyCount { month, count })
            .collect(),
    }
}
