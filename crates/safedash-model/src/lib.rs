//! Safedash Model - incident data types
//!
//! The plain data the dashboard pipeline moves around:
//! - Factory and incident-type enumerations with their display labels
//! - Incident records with derived year/month fields
//! - The dataset and the filtered view over it
//! - Filter criteria chosen by the user
//!
//! # Example
//!
//! ```rust,ignore
//! use safedash_model::{Factory, FilterCriteria, IncidentRecord, IncidentType};
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
//! let record = IncidentRecord::new(date, Factory::A, IncidentType::Fire, 80)?;
//! let criteria = FilterCriteria::new(2024, [Factory::A, Factory::B]);
//! assert!(criteria.matches(&record));
//! ```

#![warn(unreachable_pub)]

pub mod criteria;
pub mod dataset;
pub mod error;
pub mod types;

pub use criteria::FilterCriteria;
pub use dataset::{Dataset, FilteredView};
pub use error::ModelError;
pub use types::{Factory, IncidentRecord, IncidentType, RISK_SCORE_MAX, RISK_SCORE_MIN};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
