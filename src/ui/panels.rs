use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::TierPalette;
use crate::data::model::Field;
use crate::state::{AppState, Suggestions, NO_RESULTS};

// ---------------------------------------------------------------------------
// Search box + suggestion list
// ---------------------------------------------------------------------------

/// Render the search box and, below it, the suggestion list.
pub fn search_box(ui: &mut Ui, state: &mut AppState) {
    let mut query = state.search_query.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut query)
            .hint_text("Search for a food…")
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        state.on_search_input(&query);
    }
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        state.submit_search();
    }

    let mut hit_area = response.rect;

    let picked = match &state.suggestions {
        Suggestions::Hidden => None,
        Suggestions::NoMatches => {
            let frame = egui::Frame::popup(ui.style()).show(ui, |ui: &mut Ui| {
                ui.label(RichText::new(NO_RESULTS).italics());
            });
            hit_area = hit_area.union(frame.response.rect);
            None
        }
        Suggestions::Items(items) => {
            let mut picked = None;
            let frame = egui::Frame::popup(ui.style()).show(ui, |ui: &mut Ui| {
                for food in items {
                    if ui.selectable_label(false, food).clicked() {
                        picked = Some(food.clone());
                    }
                }
            });
            hit_area = hit_area.union(frame.response.rect);
            picked
        }
    };

    if let Some(food) = picked {
        state.pick_suggestion(&food);
        return;
    }

    // Close the list on a click anywhere else.
    let clicked_outside = ui.input(|i| {
        i.pointer.any_click()
            && i
                .pointer
                .interact_pos()
                .is_some_and(|pos| !hit_area.contains(pos))
    });
    if clicked_outside {
        state.dismiss_suggestions();
    }
}

// ---------------------------------------------------------------------------
// Left side panel – browse by category
// ---------------------------------------------------------------------------

/// Render the cascading category selectors.
pub fn browse_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Browse");
    ui.separator();

    if state.primary_options.is_empty() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong(Field::PrimaryCategory.to_string());
            if let Some(choice) = category_combo(
                ui,
                "primary_category",
                "-- Select Primary Category --",
                state.browse.primary.as_deref(),
                &state.primary_options,
            ) {
                state.select_primary(choice);
            }
            ui.add_space(6.0);

            let enabled = state.browse_enabled();
            ui.add_enabled_ui(enabled, |ui: &mut Ui| {
                ui.strong(Field::SecondaryCategory.to_string());
                if let Some(choice) = category_combo(
                    ui,
                    "secondary_category",
                    "-- Select Secondary Category --",
                    state.browse.secondary.as_deref(),
                    &state.secondary_options,
                ) {
                    state.select_secondary(choice);
                }
                ui.add_space(6.0);

                ui.strong(Field::OxalateCategory.to_string());
                if let Some(choice) = category_combo(
                    ui,
                    "oxalate_category",
                    "-- Select Oxalate Category --",
                    state.browse.oxalate.as_deref(),
                    &state.oxalate_options,
                ) {
                    state.select_oxalate(choice);
                }
                ui.add_space(10.0);

                if ui.button("Search").clicked() {
                    state.run_browse();
                }
            });
        });
}

/// A combo box with a leading "nothing selected" entry.
/// Returns the new selection when the user picked something.
fn category_combo(
    ui: &mut Ui,
    id: &str,
    placeholder: &str,
    selected: Option<&str>,
    options: &[String],
) -> Option<Option<String>> {
    let mut choice = None;
    egui::ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(selected.unwrap_or(placeholder))
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(selected.is_none(), placeholder).clicked() {
                choice = Some(None);
            }
            for option in options {
                let is_selected = selected == Some(option.as_str());
                if ui.selectable_label(is_selected, option).clicked() {
                    choice = Some(Some(option.clone()));
                }
            }
        });
    choice
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, palette: &TierPalette) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("{} foods loaded", state.dataset.len()));
        ui.separator();

        for (label, color) in palette.legend_entries() {
            ui.label(RichText::new(label).color(color).strong());
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
        .set_title("Open oxalate table")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
