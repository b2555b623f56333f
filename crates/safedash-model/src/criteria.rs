//! User-selected filter criteria

use crate::dataset::Dataset;
use crate::error::ModelError;
use crate::types::{Factory, IncidentRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Year and factory selection driving one dashboard pass
///
/// An empty factory set is a legal state that matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Year to keep
    pub selected_year: i32,
    /// Factories to keep
    pub selected_factories: BTreeSet<Factory>,
}

impl FilterCriteria {
    /// Create criteria from a year and factories
    #[must_use]
    pub fn new(selected_year: i32, factories: impl IntoIterator<Item = Factory>) -> Self {
        Self {
            selected_year,
            selected_factories: factories.into_iter().collect(),
        }
    }

    /// Create criteria from factory labels, dropping any that are unknown
    ///
    /// Unknown labels narrow the selection instead of failing, so a
    /// selection made only of unknown labels matches nothing.
    pub fn from_labels<I, S>(selected_year: i32, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected_factories = BTreeSet::new();
        for label in labels {
            match label.as_ref().parse::<Factory>() {
                Ok(factory) => {
                    selected_factories.insert(factory);
                }
                Err(e) => tracing::warn!("Ignoring factory selection: {}", e),
            }
        }

        Self {
            selected_year,
            selected_factories,
        }
    }

    /// Check whether a record satisfies the year and factory predicate
    #[inline]
    #[must_use]
    pub fn matches(&self, record: &IncidentRecord) -> bool {
        record.year() == self.selected_year && self.selected_factories.contains(&record.factory())
    }

    /// Report why these criteria cannot match anything in `dataset`
    ///
    /// Purely advisory: filtering with invalid criteria still succeeds and
    /// yields an empty view.
    pub fn validate_against(&self, dataset: &Dataset) -> Result<(), ModelError> {
        if self.selected_factories.is_empty() {
            return Err(ModelError::InvalidCriteria(
                "no factories selected".to_string(),
            ));
        }
        if !dataset.contains_year(self.selected_year) {
            return Err(ModelError::InvalidCriteria(format!(
                "year {} not present in dataset",
                self.selected_year
            )));
        }
        Ok(())
    }
}
