//! Dataset and filtered view
//!
//! A [`Dataset`] owns its records and never changes after creation. A
//! [`FilteredView`] borrows a subsequence of them for the duration of one
//! request.

use crate::types::{Factory, IncidentRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// Ordered, immutable collection of incident records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<IncidentRecord>,
}

impl Dataset {
    /// Wrap records, keeping their order
    #[inline]
    #[must_use]
    pub fn new(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }

    /// All records, in dataset order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether there are no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, IncidentRecord> {
        self.records.iter()
    }

    /// Distinct years, newest first
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.records.iter().map(IncidentRecord::year).collect();
        years.into_iter().rev().collect()
    }

    /// Distinct factories in order of first appearance
    #[must_use]
    pub fn factories(&self) -> Vec<Factory> {
        let mut seen = Vec::with_capacity(Factory::ALL.len());
        for record in &self.records {
            if !seen.contains(&record.factory()) {
                seen.push(record.factory());
            }
        }
        seen
    }

    /// Check whether any record falls in `year`
    #[inline]
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.records.iter().any(|r| r.year() == year)
    }

    /// View over every record
    #[must_use]
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::from_records(self.records.iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a IncidentRecord;
    type IntoIter = std::slice::Iter<'a, IncidentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<IncidentRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = IncidentRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Borrowed subsequence of a dataset, in dataset order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    records: Vec<&'a IncidentRecord>,
}

impl<'a> FilteredView<'a> {
    /// Build a view from already-selected records
    #[inline]
    #[must_use]
    pub fn from_records(records: Vec<&'a IncidentRecord>) -> Self {
        Self { records }
    }

    /// Selected records, in dataset order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[&'a IncidentRecord] {
        &self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether there are no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in order
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, &'a IncidentRecord>> {
        self.records.iter().copied()
    }

    /// Records ordered newest first, for the detail table
    ///
    /// The sort is stable, so records sharing a date keep dataset order.
    #[must_use]
    pub fn sorted_by_date_desc(&self) -> Vec<&'a IncidentRecord> {
        let mut rows = self.records.clone();
        rows.sort_by(|a, b| b.date().cmp(&a.date()));
        rows
    }
}

impl<'v, 'a> IntoIterator for &'v FilteredView<'a> {
    type Item = &'a IncidentRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a IncidentRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().copied()
    }
}

impl<'a> FromIterator<&'a IncidentRecord> for FilteredView<'a> {
    fn from_iter<T: IntoIterator<Item = &'a IncidentRecord>>(iter: T) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
