//! Safedash Core - incident dashboard pipeline
//!
//! Runs the linear dashboard pipeline:
//! - Generates a synthetic incident dataset, memoized per session
//! - Filters it by year and factory selection
//! - Aggregates KPIs, a monthly trend and a type × factory risk pivot
//!
//! # Example
//!
//! ```rust,ignore
//! use safedash_core::prelude::*;
//!
//! let session = Session::new(DashboardConfig::new().with_seed(42));
//! let dataset = session.dataset()?;
//!
//! let criteria = FilterCriteria::new(2024, Factory::ALL);
//! let view = filter(&*dataset, &criteria);
//!
//! let kpis = compute_kpis(&view);
//! println!("{} incidents, mean risk {:?}", kpis.count, kpis.mean_risk);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod session;
pub mod snapshot;

pub use aggregate::{
    compute_kpis, compute_monthly_trend, compute_risk_pivot, mean_risk, top_type, KpiSummary,
    MonthlyCount, MonthlyTrend, PivotCell, PivotEntry, RiskPivot, MONTHS_PER_YEAR,
};
pub use config::{DashboardConfig, GeneratorConfig};
pub use error::{DashboardError, Result};
pub use filter::filter;
pub use generator::{generate_dataset, generate_with_rng, weekly_dates, REFERENCE_RECORD_COUNT};
pub use session::{Session, SessionId, SessionStore};
pub use snapshot::DashboardSnapshot;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the dashboard pipeline
    pub use crate::{
        compute_kpis, compute_monthly_trend, compute_risk_pivot, filter, DashboardConfig,
        DashboardError, DashboardSnapshot, KpiSummary, MonthlyTrend, PivotCell, RiskPivot,
        Session, SessionStore,
    };
    pub use safedash_model::{Dataset, Factory, FilterCriteria, FilteredView, IncidentType};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
