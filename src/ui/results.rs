use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::TierPalette;
use crate::state::{AppState, Results, NO_RESULTS};

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the current search / browse results.
pub fn results_table(ui: &mut Ui, state: &AppState, palette: &TierPalette) {
    let rows = match &state.results {
        Results::Cleared => {
            if state.dataset.is_empty() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("No dataset loaded  (File → Open…)");
                });
            }
            return;
        }
        Results::NoMatches => {
            ui.add_space(8.0);
            ui.label(RichText::new(NO_RESULTS).italics());
            return;
        }
        Results::Rows(rows) => rows,
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder().at_least(100.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Food");
            });
            header.col(|ui| {
                ui.strong("Serving");
            });
            header.col(|ui| {
                ui.strong("Oxalate");
            });
        })
        .body(|mut body| {
            for row in rows {
                body.row(20.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.food_name);
                    });
                    table_row.col(|ui| {
                        ui.label(&row.serving_info);
                    });
                    table_row.col(|ui| {
                        let color = palette.color_for(row.tier);
                        ui.label(RichText::new(&row.oxalate_category).color(color).strong());
                    });
                });
            }
        });
}
