use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.7, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: country → Color32
// ---------------------------------------------------------------------------

/// Assigns each country a stable colour, in the order the countries appear
/// in the source file, so a line keeps its colour as the selection changes.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the given country list.
    pub fn new(countries: &[String]) -> Self {
        let palette = generate_palette(countries.len());
        let mapping: BTreeMap<String, Color32> = countries
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a country; gray for names we never mapped.
    pub fn color_for(&self, country: &str) -> Color32 {
        self.mapping
            .get(country)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_country_gets_a_distinct_color() {
        let countries: Vec<String> = ["USA", "Chad", "Albania", "Japan"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let map = ColorMap::new(&countries);

        let mut colors: Vec<Color32> = countries.iter().map(|c| map.color_for(c)).collect();
        colors.sort_by_key(|c| (c.r(), c.g(), c.b()));
        colors.dedup();
        assert_eq!(colors.len(), countries.len());
    }

    #[test]
    fn unknown_country_falls_back_to_gray() {
        let map = ColorMap::new(&["USA".to_string()]);
        assert_eq!(map.color_for("Atlantis"), Color32::GRAY);
    }

    #[test]
    fn empty_palette_is_empty() {
        assert!(generate_palette(0).is_empty());
    }
}
