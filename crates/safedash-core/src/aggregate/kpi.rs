//! Headline statistics

use crate::error::{DashboardError, Result};
use safedash_model::{FilteredView, IncidentType};
use serde::Serialize;

/// KPI summary for one filtered view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Number of records
    pub count: usize,
    /// Mean risk score; `None` when the view is empty
    pub mean_risk: Option<f64>,
    /// Most frequent incident type; `None` when the view is empty
    pub top_type: Option<IncidentType>,
}

impl KpiSummary {
    /// Check whether the mean risk is undefined
    #[inline]
    #[must_use]
    pub fn mean_is_undefined(&self) -> bool {
        self.mean_risk.is_none()
    }
}

/// Compute all headline statistics
#[must_use]
pub fn compute_kpis(view: &FilteredView<'_>) -> KpiSummary {
    let mean_risk = match mean_risk(view) {
        Ok(mean) => Some(mean),
        Err(e) => {
            tracing::debug!("Mean risk unavailable: {}", e);
            None
        }
    };

    KpiSummary {
        count: view.len(),
        mean_risk,
        top_type: top_type(view),
    }
}

/// Mean risk score of the view
///
/// Fails with [`DashboardError::EmptyInput`] when the view is empty.
#[allow(clippy::cast_precision_loss)]
pub fn mean_risk(view: &FilteredView<'_>) -> Result<f64> {
    if view.is_empty() {
        return Err(DashboardError::EmptyInput {
            statistic: "mean risk score",
        });
    }

    let total: u64 = view.iter().map(|r| u64::from(r.risk_score())).sum();
    Ok(total as f64 / view.len() as f64)
}

/// Most frequent incident type
///
/// Ties go to the type declared first in [`IncidentType::ALL`].
#[must_use]
pub fn top_type(view: &FilteredView<'_>) -> Option<IncidentType> {
    let mut counts = [0usize; IncidentType::ALL.len()];
    for record in view {
        counts[record.incident_type().index()] += 1;
    }

    let mut best: Option<(IncidentType, usize)> = None;
    for kind in IncidentType::ALL {
        let count = counts[kind.index()];
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((kind, count)),
        }
    }

    best.map(|(kind, _)| kind)
}
