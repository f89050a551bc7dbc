use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrackLensApp {
    pub state: AppState,
}

impl TrackLensApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for TrackLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: search form ----
        egui::SidePanel::left("search_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: scatter plot ----
        egui::TopBottomPanel::bottom("scatter_panel")
            .default_height(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                plot::scatter_plot(ui, &mut self.state);
            });

        // ---- Central panel: metrics + table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::metrics(ui, &self.state);
            ui.separator();
            table::track_table(ui, &self.state);
        });
    }
}
