use eframe::egui::{self, ProgressBar, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::format_metric;
use crate::data::model::NumericColumn;
use crate::state::AppState;

/// Scores drawn as bars rather than numbers.
const BAR_COLUMNS: [NumericColumn; 2] = [NumericColumn::Danceability, NumericColumn::Energy];

// ---------------------------------------------------------------------------
// Track table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered tracks.
pub fn track_table(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.view else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view tracks  (File → Open…)");
        });
        return;
    };

    let rows = &view.table.rows;
    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No rows.");
        });
        return;
    }

    let mut headers: Vec<&str> = vec!["Artist", "Track", "Album"];
    headers.extend(NumericColumn::ENGAGEMENT.iter().map(|c| c.label()));
    headers.extend(NumericColumn::CHARACTERISTICS.iter().map(|c| c.label()));
    headers.push("YouTube");

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(160.0).at_least(80.0).clip(true))
        .column(Column::initial(180.0).at_least(80.0).clip(true))
        .column(Column::initial(160.0).at_least(80.0).clip(true))
        .columns(Column::auto().at_least(90.0), NumericColumn::ENGAGEMENT.len())
        .columns(Column::initial(96.0), NumericColumn::CHARACTERISTICS.len())
        .column(Column::remainder().at_least(80.0))
        .header(22.0, |mut header| {
            for title in &headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(*title);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let track = &rows[row.index()];

                row.col(|ui: &mut Ui| {
                    ui.label(track.artist.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(track.track.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(track.album.as_str());
                });

                for column in NumericColumn::ENGAGEMENT {
                    row.col(|ui: &mut Ui| {
                        ui.label(column.value(track).map(format_metric).unwrap_or_default());
                    });
                }

                for column in NumericColumn::CHARACTERISTICS {
                    row.col(|ui: &mut Ui| score_cell(ui, column, column.value(track)));
                }

                row.col(|ui: &mut Ui| match &track.url_youtube {
                    Some(url) => {
                        ui.hyperlink_to("Watch", url);
                    }
                    None => {
                        ui.label("–");
                    }
                });
            });
        });
}

fn score_cell(ui: &mut Ui, column: NumericColumn, value: Option<f64>) {
    let Some(v) = value else {
        ui.label("–");
        return;
    };
    if BAR_COLUMNS.contains(&column) {
        // Out-of-range scores are drawn clamped but labelled with the raw value.
        ui.add(
            ProgressBar::new(v.clamp(0.0, 1.0) as f32)
                .desired_width(ui.available_width())
                .text(format!("{v:.3}")),
        );
    } else {
        ui.label(format!("{v:.3}"));
    }
}
