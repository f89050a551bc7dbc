mod app;
mod cache;
mod cli;
mod color;
mod data;
mod state;
mod ui;

use std::process::ExitCode;

use app::TrackLensApp;
use cache::DataCache;
use clap::Parser;
use eframe::egui;
use state::AppState;

/// Exit status when the source file does not exist.
const EXIT_MISSING_SOURCE: u8 = 1;
/// Exit status when the source exists but cannot be read.
const EXIT_MALFORMED_SOURCE: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = cli::Args::parse();

    let mut cache = DataCache::new(&args.data);
    match cache.load() {
        Ok(Some(snap)) => {
            if args.check {
                println!(
                    "{}: {} rows, {} tracks, {} artists",
                    args.data.display(),
                    snap.raw.len(),
                    snap.processed.len(),
                    snap.artists.len()
                );
                return Ok(ExitCode::SUCCESS);
            }
        }
        Ok(None) => {
            log::error!("Data file {} not found", args.data.display());
            eprintln!("error: data file {} not found", args.data.display());
            return Ok(ExitCode::from(EXIT_MISSING_SOURCE));
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", args.data.display());
            eprintln!("error: {}: {e}", args.data.display());
            return Ok(ExitCode::from(EXIT_MALFORMED_SOURCE));
        }
    }

    let mut state = AppState::new(cache, args.initial_query());
    state.set_scatter_axes(args.x_axis, args.y_axis);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TrackLens – Top Tracks Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(TrackLensApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))?;

    Ok(ExitCode::SUCCESS)
}
