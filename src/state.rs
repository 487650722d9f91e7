use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, init_selection, Selection};
use crate::data::model::GdpDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<GdpDataset>,

    /// Current country picks and year window.
    pub selection: Selection,

    /// Indices of rows passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// One stable colour per country.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: Selection {
                countries: BTreeSet::new(),
                years: (0, 0),
            },
            visible_indices: Vec::new(),
            color_map: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: select everything, colour by country.
    pub fn set_dataset(&mut self, dataset: GdpDataset) {
        self.selection = init_selection(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.color_map = Some(ColorMap::new(&dataset.countries));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            match filtered_indices(ds, &self.selection) {
                Ok(indices) => {
                    self.visible_indices = indices;
                    self.status_message = None;
                }
                // Keep the previous visible set; the query never touches it.
                Err(e) => self.status_message = Some(e.to_string()),
            }
        }
    }

    /// Toggle one country in the selection.
    pub fn toggle_country(&mut self, country: &str) {
        if !self.selection.countries.remove(country) {
            self.selection.countries.insert(country.to_string());
        }
        self.refilter();
    }

    /// Select every country in the dataset.
    pub fn select_all(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection.countries = ds.countries.iter().cloned().collect();
            self.refilter();
        }
    }

    /// Clear the country selection.
    pub fn select_none(&mut self) {
        self.selection.countries = BTreeSet::new();
        self.refilter();
    }

    /// Set the year window, clamping to the dataset span and keeping the
    /// ends ordered.  Slider input is normalised here so the filter only
    /// ever sees `low <= high`.
    pub fn set_year_range(&mut self, mut low: i32, mut high: i32) {
        if let Some(ds) = &self.dataset {
            if let Some((min_year, max_year)) = ds.year_span() {
                low = low.clamp(min_year, max_year);
                high = high.clamp(min_year, max_year);
            }
        }
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        self.selection.years = (low, high);
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SeriesRow;

    fn state_with_dataset() -> AppState {
        let rows = vec![
            SeriesRow {
                country: "USA".to_string(),
                year: 1950,
                value: 10_000,
            },
            SeriesRow {
                country: "USA".to_string(),
                year: 1960,
                value: 12_500,
            },
            SeriesRow {
                country: "Chad".to_string(),
                year: 1950,
                value: 480,
            },
            SeriesRow {
                country: "Chad".to_string(),
                year: 1960,
                value: 520,
            },
        ];
        let mut state = AppState::default();
        state.set_dataset(GdpDataset::from_rows(rows));
        state
    }

    #[test]
    fn new_dataset_starts_fully_visible() {
        let state = state_with_dataset();
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
        assert_eq!(state.selection.years, (1950, 1960));
        assert_eq!(state.selection.countries.len(), 2);
    }

    #[test]
    fn toggling_a_country_hides_its_rows() {
        let mut state = state_with_dataset();
        state.toggle_country("Chad");
        assert_eq!(state.visible_indices, vec![0, 1]);
        state.toggle_country("Chad");
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn year_range_is_clamped_and_reordered() {
        let mut state = state_with_dataset();
        state.set_year_range(2100, 1800);
        assert_eq!(state.selection.years, (1950, 1960));
        state.set_year_range(1955, 1955);
        assert_eq!(state.selection.years, (1955, 1955));
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn select_none_empties_the_plot_without_error() {
        let mut state = state_with_dataset();
        state.select_none();
        assert!(state.visible_indices.is_empty());
        assert!(state.status_message.is_none());
        state.select_all();
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
    }
}
