use eframe::egui::{self, Color32, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::data::model::NumericColumn;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (bottom panel)
// ---------------------------------------------------------------------------

/// Render the characteristic-vs-engagement scatter plot with its axis pickers.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    let mut x = state.scatter_x;
    let mut y = state.scatter_y;

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Correlate");
        axis_combo(ui, "scatter_x", &mut x, &NumericColumn::CHARACTERISTICS);
        ui.label("against");
        axis_combo(ui, "scatter_y", &mut y, &NumericColumn::ENGAGEMENT);
    });
    if x != state.scatter_x || y != state.scatter_y {
        state.set_scatter_axes(x, y);
    }

    let Some(view) = &state.view else {
        return;
    };
    if view.table.is_empty() {
        ui.label("Nothing to plot.");
        return;
    }

    let color_map = &state.color_map;

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(state.scatter_x.label())
        .y_axis_label(state.scatter_y.label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (artist, points) in &view.series {
                let color = color_map
                    .as_ref()
                    .map(|cm| cm.color_for(artist))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let points = Points::new(PlotPoints::from(points.clone()))
                    .name(artist)
                    .color(color)
                    .radius(3.5);

                plot_ui.points(points);
            }
        });
}

fn axis_combo(ui: &mut Ui, id: &str, current: &mut NumericColumn, choices: &[NumericColumn]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for choice in choices {
                ui.selectable_value(current, *choice, choice.label());
            }
        });
}
