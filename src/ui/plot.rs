use std::collections::HashMap;

use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// GDP line chart (central panel)
// ---------------------------------------------------------------------------

/// Render the GDP-per-capita chart: one line per selected country.
pub fn gdp_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a data file to plot GDP per capita  (File → Open…)");
            });
            return;
        }
    };

    ui.heading("GDP Per Capita Over Time");

    // Group the visible rows by country.  Store order is year-ascending
    // within a country, so each series is already plot-ready.
    let mut series: HashMap<&str, Vec<[f64; 2]>> = HashMap::new();
    for &idx in &state.visible_indices {
        let row = &dataset.rows[idx];
        series
            .entry(row.country.as_str())
            .or_default()
            .push([row.year as f64, row.value as f64]);
    }

    Plot::new("gdp_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Year")
        .y_axis_label("GDP per capita")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Iterate the dataset's country list so line order (and the
            // legend) follows the source file, not hash order.
            for country in &dataset.countries {
                let Some(points) = series.remove(country.as_str()) else {
                    continue;
                };

                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(country))
                    .unwrap_or(eframe::egui::Color32::LIGHT_BLUE);

                let points: PlotPoints = points.into_iter().collect();
                let line = Line::new(points).name(country).color(color).width(1.5);

                plot_ui.line(line);
            }
        });
}
