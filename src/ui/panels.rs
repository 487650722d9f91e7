use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – country picks and year window
// ---------------------------------------------------------------------------

/// Render the left selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Countries");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the loop.
    let countries = dataset.countries.clone();
    let year_span = dataset.year_span();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
        ui.label(format!(
            "{}/{} selected",
            state.selection.countries.len(),
            countries.len()
        ));
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height(ui.available_height() * 0.6)
        .show(ui, |ui: &mut Ui| {
            for country in &countries {
                let is_selected = state.selection.countries.contains(country.as_str());

                // Tint the label with the country's line colour.
                let mut text = RichText::new(country);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(country));
                }

                let mut checked = is_selected;
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_country(country);
                }
            }
        });

    ui.separator();
    ui.heading("Year range");

    if let Some((min_year, max_year)) = year_span {
        let (mut low, mut high) = state.selection.years;
        let mut changed = false;

        changed |= ui
            .add(egui::Slider::new(&mut low, min_year..=max_year).text("from"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut high, min_year..=max_year).text("to"))
            .changed();

        if changed {
            state.set_year_range(low, high);
        }
    } else {
        ui.label("Dataset has no year columns.");
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} countries, {} of {} rows shown",
                ds.countries.len(),
                state.visible_indices.len(),
                ds.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open GDP per capita data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows for {} countries, years {:?}",
                    dataset.len(),
                    dataset.countries.len(),
                    dataset.year_span()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
