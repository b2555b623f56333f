//! Aggregation stage
//!
//! Three independent computations over a [`FilteredView`]:
//! - KPI summary (count, mean risk, most frequent type)
//! - Monthly trend (sparse month → count series)
//! - Type × factory risk pivot
//!
//! An empty view is valid input for all three. Only the scalar mean signals
//! [`DashboardError::EmptyInput`](crate::DashboardError::EmptyInput), which
//! the KPI summary turns into an explicit undefined value.
//!
//! [`FilteredView`]: safedash_model::FilteredView

mod kpi;
mod pivot;
mod trend;

pub use kpi::{compute_kpis, mean_risk, top_type, KpiSummary};
pub use pivot::{compute_risk_pivot, PivotCell, PivotEntry, RiskPivot};
pub use trend::{compute_monthly_trend, MonthlyCount, MonthlyTrend, MONTHS_PER_YEAR};
