use std::collections::BTreeSet;

use super::error::QueryError;
use super::model::GdpDataset;

// ---------------------------------------------------------------------------
// Selection: which countries and which year window
// ---------------------------------------------------------------------------

/// The user's current picks: a country set and an inclusive year window.
/// Rebuilt wholesale on each interaction; the dataset itself never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub countries: BTreeSet<String>,
    /// Inclusive `(low, high)` year window.
    pub years: (i32, i32),
}

/// Initialise a [`Selection`] with every country picked and the full year
/// span of the dataset.
pub fn init_selection(dataset: &GdpDataset) -> Selection {
    Selection {
        countries: dataset.countries.iter().cloned().collect(),
        years: dataset.year_span().unwrap_or((0, 0)),
    }
}

/// Return indices of rows matching the selection, in store order.
///
/// A row matches when its country is in the selected set and its year lies
/// inside the inclusive window.  An empty country set yields an empty result
/// rather than an error; country names not present in the dataset simply
/// never match.
pub fn filtered_indices(
    dataset: &GdpDataset,
    selection: &Selection,
) -> Result<Vec<usize>, QueryError> {
    let (low, high) = selection.years;
    if low > high {
        return Err(QueryError::InvalidRange { low, high });
    }

    Ok(dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            low <= row.year
                && row.year <= high
                && selection.countries.contains(row.country.as_str())
        })
        .map(|(i, _)| i)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SeriesRow;

    fn sample_dataset() -> GdpDataset {
        let mut rows = Vec::new();
        for (country, series) in [
            ("USA", [(1950, 10_000), (1960, 12_500), (1970, 18_000)]),
            ("Chad", [(1950, 480), (1960, 520), (1970, 610)]),
            ("Albania", [(1950, 1_200), (1960, 1_400), (1970, 1_900)]),
        ] {
            for (year, value) in series {
                rows.push(SeriesRow {
                    country: country.to_string(),
                    year,
                    value,
                });
            }
        }
        GdpDataset::from_rows(rows)
    }

    fn selection(countries: &[&str], years: (i32, i32)) -> Selection {
        Selection {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            years,
        }
    }

    #[test]
    fn full_span_returns_every_row_for_selected_countries() {
        let ds = sample_dataset();
        let sel = init_selection(&ds);
        let indices = filtered_indices(&ds, &sel).unwrap();
        assert_eq!(indices, (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn year_window_is_inclusive_on_both_ends() {
        let ds = sample_dataset();
        let sel = selection(&["USA", "Chad", "Albania"], (1950, 1960));
        let indices = filtered_indices(&ds, &sel).unwrap();
        let years: Vec<i32> = indices.iter().map(|&i| ds.rows[i].year).collect();
        assert_eq!(years, vec![1950, 1960, 1950, 1960, 1950, 1960]);
    }

    #[test]
    fn unknown_countries_are_ignored() {
        let ds = sample_dataset();
        let sel = selection(&["USA", "Atlantis"], (1950, 1955));
        let indices = filtered_indices(&ds, &sel).unwrap();
        assert_eq!(indices.len(), 1);
        let row = &ds.rows[indices[0]];
        assert_eq!((row.country.as_str(), row.year, row.value), ("USA", 1950, 10_000));
    }

    #[test]
    fn country_absent_from_store_yields_empty_result() {
        let ds = sample_dataset();
        let sel = selection(&["Atlantis"], (1800, 2100));
        assert!(filtered_indices(&ds, &sel).unwrap().is_empty());
    }

    #[test]
    fn empty_selection_is_a_no_op_not_an_error() {
        let ds = sample_dataset();
        let sel = selection(&[], (1950, 2000));
        assert_eq!(filtered_indices(&ds, &sel).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let ds = sample_dataset();
        let sel = selection(&["USA"], (1970, 1950));
        assert_eq!(
            filtered_indices(&ds, &sel).unwrap_err(),
            QueryError::InvalidRange {
                low: 1970,
                high: 1950
            }
        );
    }

    #[test]
    fn filtering_is_idempotent_and_order_stable() {
        let ds = sample_dataset();
        let sel = selection(&["Chad", "Albania"], (1960, 1970));
        let first = filtered_indices(&ds, &sel).unwrap();
        let second = filtered_indices(&ds, &sel).unwrap();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }
}
