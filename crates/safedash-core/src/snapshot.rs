//! One full dashboard pass
//!
//! Filter once, then run every aggregation over the same view. Front ends
//! rebuild a snapshot on each criteria change.

use crate::aggregate::{
    compute_kpis, compute_monthly_trend, compute_risk_pivot, KpiSummary, MonthlyTrend, RiskPivot,
};
use crate::filter::filter;
use safedash_model::{Dataset, FilterCriteria, IncidentRecord};
use serde::Serialize;

/// Everything a front end needs to render the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot<'a> {
    /// Criteria this snapshot was built for
    pub criteria: FilterCriteria,
    /// Headline metrics
    pub kpis: KpiSummary,
    /// Monthly incident counts
    pub trend: MonthlyTrend,
    /// Mean risk by type and factory
    pub pivot: RiskPivot,
    /// Detail rows, newest first
    pub records: Vec<&'a IncidentRecord>,
}

impl<'a> DashboardSnapshot<'a> {
    /// Run filter and aggregation for `criteria`
    #[must_use]
    pub fn build(dataset: &'a Dataset, criteria: &FilterCriteria) -> Self {
        let view = filter(dataset, criteria);

        let snapshot = Self {
            criteria: criteria.clone(),
            kpis: compute_kpis(&view),
            trend: compute_monthly_trend(&view),
            pivot: compute_risk_pivot(&view),
            records: view.sorted_by_date_desc(),
        };

        tracing::debug!(
            "Snapshot for {}: {} records, {} months",
            criteria.selected_year,
            snapshot.kpis.count,
            snapshot.trend.points().len()
        );

        snapshot
    }

    /// Check whether the selection matched nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
