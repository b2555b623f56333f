//! Type × factory risk pivot

use safedash_model::{Factory, FilteredView, IncidentType};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// One pivot cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotCell {
    /// Mean risk score of matching records
    Mean(f64),
    /// No record has this type and factory
    NoData,
}

impl PivotCell {
    /// Mean value, if any
    #[inline]
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        match self {
            PivotCell::Mean(mean) => Some(*mean),
            PivotCell::NoData => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, PivotCell::NoData)
    }
}

/// Flattened pivot cell, used for serialization
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PivotEntry {
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub factory: Factory,
    pub cell: PivotCell,
}

/// Mean risk score for every (type, factory) combination
///
/// The grid always covers every enumerated type and factory; combinations
/// absent from the view hold [`PivotCell::NoData`].
#[derive(Debug, Clone, PartialEq)]
pub struct RiskPivot {
    cells: BTreeMap<(IncidentType, Factory), PivotCell>,
}

impl RiskPivot {
    /// Cell for a combination
    #[must_use]
    pub fn get(&self, incident_type: IncidentType, factory: Factory) -> PivotCell {
        self.cells
            .get(&(incident_type, factory))
            .copied()
            .unwrap_or(PivotCell::NoData)
    }

    /// All cells, type-major in enumeration order
    pub fn entries(&self) -> impl Iterator<Item = PivotEntry> + '_ {
        self.cells
            .iter()
            .map(|(&(incident_type, factory), &cell)| PivotEntry {
                incident_type,
                factory,
                cell,
            })
    }

    /// Cells that carry a mean
    pub fn populated(&self) -> impl Iterator<Item = PivotEntry> + '_ {
        self.entries().filter(|e| !e.cell.is_no_data())
    }

    /// Types with at least one populated cell (heatmap rows)
    #[must_use]
    pub fn rows(&self) -> Vec<IncidentType> {
        IncidentType::ALL
            .into_iter()
            .filter(|&t| Factory::ALL.iter().any(|&f| !self.get(t, f).is_no_data()))
            .collect()
    }

    /// Factories with at least one populated cell (heatmap columns)
    #[must_use]
    pub fn columns(&self) -> Vec<Factory> {
        Factory::ALL
            .into_iter()
            .filter(|&f| IncidentType::ALL.iter().any(|&t| !self.get(t, f).is_no_data()))
            .collect()
    }

    /// Check whether every cell is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.values().all(PivotCell::is_no_data)
    }
}

impl Serialize for RiskPivot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}

/// Average risk score per (type, factory)
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn compute_risk_pivot(view: &FilteredView<'_>) -> RiskPivot {
    let mut sums: BTreeMap<(IncidentType, Factory), (u64, usize)> = BTreeMap::new();
    for record in view {
        let slot = sums
            .entry((record.incident_type(), record.factory()))
            .or_default();
        slot.0 += u64::from(record.risk_score());
        slot.1 += 1;
    }

    let mut cells = BTreeMap::new();
    for incident_type in IncidentType::ALL {
        for factory in Factory::ALL {
            let cell = match sums.get(&(incident_type, factory)) {
                Some(&(total, count)) => PivotCell::Mean(total as f64 / count as f64),
                None => PivotCell::NoData,
            };
            cells.insert((incident_type, factory), cell);
        }
    }

    RiskPivot { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safedash_model::Dataset;
    use safedash_test_utils::record;

    #[test]
    fn averages_per_combination() {
        let dataset = Dataset::new(vec![
            record("2024-01-07", Factory::A, IncidentType::Fire, 80),
            record("2024-01-14", Factory::A, IncidentType::Fire, 41),
            record("2024-01-21", Factory::C, IncidentType::Fall, 7),
        ]);
        let pivot = compute_risk_pivot(&dataset.view());

        assert_eq!(pivot.get(IncidentType::Fire, Factory::A), PivotCell::Mean(60.5));
        assert_eq!(pivot.get(IncidentType::Fall, Factory::C), PivotCell::Mean(7.0));
        assert!(pivot.get(IncidentType::Fire, Factory::B).is_no_data());
        assert_eq!(pivot.entries().count(), 12);
        assert_eq!(pivot.populated().count(), 2);
    }

    #[test]
    fn no_data_is_distinct_from_zero() {
        assert_ne!(PivotCell::NoData, PivotCell::Mean(0.0));
        assert_eq!(PivotCell::NoData.mean(), None);
        assert_eq!(PivotCell::Mean(0.0).mean(), Some(0.0));
    }

    #[test]
    fn rows_and_columns_track_populated_cells() {
        let dataset = Dataset::new(vec![
            record("2024-01-07", Factory::C, IncidentType::MinorInjury, 30),
            record("2024-01-14", Factory::A, IncidentType::Fall, 50),
        ]);
        let pivot = compute_risk_pivot(&dataset.view());

        assert_eq!(pivot.rows(), vec![IncidentType::Fall, IncidentType::MinorInjury]);
        assert_eq!(pivot.columns(), vec![Factory::A, Factory::C]);
    }

    #[test]
    fn empty_view_is_all_no_data() {
        let pivot = compute_risk_pivot(&FilteredView::default());
        assert!(pivot.is_empty());
        assert!(pivot.rows().is_empty());
        assert!(pivot.entries().all(|e| e.cell.is_no_data()));
    }

    #[test]
    fn serializes_as_flat_entries() {
        let dataset = Dataset::new(vec![record("2024-01-07", Factory::B, IncidentType::Fall, 20)]);
        let json = serde_json::to_value(compute_risk_pivot(&dataset.view())).unwrap();
        let entries = json.as_array().unwrap();

        assert_eq!(entries.len(), 12);
        let populated = entries
            .iter()
            .find(|e| e["type"] == "넘어짐" && e["factory"] == "B공장")
            .unwrap();
        assert_eq!(populated["cell"]["mean"], 20.0);
        assert_eq!(entries[0]["cell"], "no_data");
    }
}
