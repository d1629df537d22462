use eframe::egui;

use crate::color::TierPalette;
use crate::config::AppConfig;
use crate::data::loader;
use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct OxalateLookupApp {
    pub state: AppState,
    palette: TierPalette,
}

impl OxalateLookupApp {
    /// Load the configured dataset before the first frame. A failed load
    /// leaves the table empty.
    pub fn new(config: &AppConfig) -> Self {
        let dataset = loader::load_or_empty(&config.dataset_path);
        Self {
            state: AppState::new(dataset, config.suggestion_limit),
            palette: TierPalette::default(),
        }
    }
}

impl eframe::App for OxalateLookupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.palette);
        });

        // ---- Left side panel: browse (hidden while showing search results) ----
        if self.state.browse_visible {
            egui::SidePanel::left("browse_panel")
                .default_width(240.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::browse_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: search + results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::search_box(ui, &mut self.state);
            ui.add_space(8.0);
            results::results_table(ui, &self.state, &self.palette);
        });
    }
}
