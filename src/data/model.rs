use std::collections::HashSet;

// ---------------------------------------------------------------------------
// SeriesRow – one (country, year, value) observation
// ---------------------------------------------------------------------------

/// A single long-format observation: one cell of the wide source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRow {
    pub country: String,
    pub year: i32,
    /// GDP per capita, coerced to a whole number (a `12.5k` cell becomes 12500).
    pub value: i64,
}

// ---------------------------------------------------------------------------
// GdpDataset – the complete reshaped dataset
// ---------------------------------------------------------------------------

/// The reshaped dataset, built once per load and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GdpDataset {
    /// All observations, country-major and year-ascending within a country.
    pub rows: Vec<SeriesRow>,
    /// Distinct country names in first-seen source order.
    pub countries: Vec<String>,
    year_span: Option<(i32, i32)>,
}

impl GdpDataset {
    /// Derive the country list and year bounds from the reshaped rows.
    pub fn from_rows(rows: Vec<SeriesRow>) -> Self {
        let mut countries: Vec<String> = Vec::new();
        {
            let mut seen: HashSet<&str> = HashSet::new();
            for row in &rows {
                if seen.insert(row.country.as_str()) {
                    countries.push(row.country.clone());
                }
            }
        }

        let mut year_span: Option<(i32, i32)> = None;
        for row in &rows {
            year_span = match year_span {
                None => Some((row.year, row.year)),
                Some((lo, hi)) => Some((lo.min(row.year), hi.max(row.year))),
            };
        }

        GdpDataset {
            rows,
            countries,
            year_span,
        }
    }

    /// Inclusive `[min_year, max_year]` over all rows. `None` for an empty store.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        self.year_span
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no observations.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, year: i32, value: i64) -> SeriesRow {
        SeriesRow {
            country: country.to_string(),
            year,
            value,
        }
    }

    #[test]
    fn countries_keep_first_seen_order() {
        let ds = GdpDataset::from_rows(vec![
            row("Zimbabwe", 1950, 400),
            row("Zimbabwe", 1960, 450),
            row("Albania", 1950, 1200),
            row("Albania", 1960, 1400),
        ]);
        assert_eq!(ds.countries, vec!["Zimbabwe", "Albania"]);
    }

    #[test]
    fn year_span_covers_all_rows() {
        let ds = GdpDataset::from_rows(vec![
            row("USA", 1960, 12500),
            row("USA", 1800, 980),
            row("Chad", 2020, 1500),
        ]);
        assert_eq!(ds.year_span(), Some((1800, 2020)));
    }

    #[test]
    fn empty_dataset_has_no_span() {
        let ds = GdpDataset::from_rows(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.year_span(), None);
        assert!(ds.countries.is_empty());
    }
}
