use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::aggregate::format_metric;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – search form
// ---------------------------------------------------------------------------

/// Render the search form. Edits go to `state.pending` and are applied when
/// the user presses Search.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Search");
    ui.separator();

    let Some(snap) = state.cache.snapshot() else {
        ui.label("No dataset loaded.");
        return;
    };
    let artists = snap.artists.clone();
    let track_count = snap.processed.len();

    // ---- Artist: pick from the index or type a fragment ----
    ui.strong("Artist");
    option_combo(ui, "artist_combo", &mut state.pending.artist, &artists);

    let mut fragment = state.pending.artist.clone().unwrap_or_default();
    if ui
        .add(egui::TextEdit::singleline(&mut fragment).hint_text("name contains…"))
        .changed()
    {
        state.pending.artist = Some(fragment).filter(|f| !f.is_empty());
    }
    ui.add_space(6.0);

    // Track / album choices follow the pending artist.
    state.update_search_choices();
    if let Some(choices) = &state.search_choices {
        ui.strong("Song");
        option_combo(ui, "track_combo", &mut state.pending.track, &choices.tracks);
        ui.add_space(6.0);

        ui.strong("Album");
        option_combo(ui, "album_combo", &mut state.pending.album, &choices.albums);
        ui.add_space(10.0);
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Search").clicked() {
            log::debug!("Search submitted: {:?}", state.pending);
            state.submit();
        }
        if ui.button("Clear").clicked() {
            state.clear_search();
        }
    });

    if state.pending != state.query {
        ui.label(RichText::new("Press Search to apply.").italics().weak());
    }

    ui.separator();
    ui.label(format!("{} artists, {} tracks", artists.len(), track_count));
}

/// A combo box over `options` with an explicit "none" entry.
fn option_combo(ui: &mut Ui, id: &str, current: &mut Option<String>, options: &[String]) {
    let selected_text = current.clone().unwrap_or_else(|| "—".to_string());
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .width(ui.available_width())
        .height(320.0)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), "—").clicked() {
                *current = None;
            }
            for opt in options {
                let is_current = current.as_deref() == Some(opt.as_str());
                if ui.selectable_label(is_current, opt.as_str()).clicked() {
                    *current = Some(opt.clone());
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Metrics row
// ---------------------------------------------------------------------------

/// Average engagement for the current selection, or a prompt explaining why
/// there is nothing to show.
pub fn metrics(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.view else {
        ui.heading("No data loaded.");
        return;
    };

    if state.query.is_empty() {
        ui.label(
            RichText::new("Choose an artist and press Search to see average streams, views and likes.")
                .color(Color32::LIGHT_BLUE),
        );
        return;
    }

    let Some(summary) = view.summary else {
        ui.label(RichText::new("No tracks match the current search.").italics());
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Tracks", summary.tracks.to_string());
        ui.add_space(24.0);
        metric(ui, "Avg. streams", metric_text(summary.stream));
        ui.add_space(24.0);
        metric(ui, "Avg. views", metric_text(summary.views));
        ui.add_space(24.0);
        metric(ui, "Avg. likes", metric_text(summary.likes));
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).size(22.0).strong());
    });
}

fn metric_text(value: Option<f64>) -> String {
    value.map(format_metric).unwrap_or_else(|| "–".to_string())
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
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(state.cache.source().display().to_string());

        if let (Some(snap), Some(view)) = (state.cache.snapshot(), &state.view) {
            ui.separator();
            ui.label(format!(
                "{} tracks loaded, {} visible",
                snap.processed.len(),
                view.table.len()
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
        .set_title("Open track data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening {}", path.display());
        state.open_file(&path);
    }
}
