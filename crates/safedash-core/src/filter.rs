//! Filter stage
//!
//! Narrows a dataset (or an existing view) to the records matching the
//! user's year and factory selection. Filtering never fails: an empty
//! factory set or an absent year simply yields an empty view.

use safedash_model::{FilterCriteria, FilteredView, IncidentRecord};

/// Keep records whose year and factory satisfy `criteria`
///
/// Accepts anything that yields borrowed records, so both `&Dataset` and
/// `&FilteredView` can be filtered. Dataset order is preserved.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> FilteredView<'a>
where
    I: IntoIterator<Item = &'a IncidentRecord>,
{
    if criteria.selected_factories.is_empty() {
        tracing::debug!("Empty factory selection, view is empty");
        return FilteredView::default();
    }

    let view: FilteredView<'a> = records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect();

    tracing::debug!(
        "Filtered to {} records for year {} ({} factories)",
        view.len(),
        criteria.selected_year,
        criteria.selected_factories.len()
    );

    view
}
