use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::cache::DataCache;
use crate::color::ColorMap;
use crate::data::aggregate::{summarize, Summary};
use crate::data::filter::{apply_search, artist_matches, SearchQuery};
use crate::data::model::{NumericColumn, TrackTable};

// ---------------------------------------------------------------------------
// Per-cycle view
// ---------------------------------------------------------------------------

/// Scatter points of one artist, `[x, y]` pairs in table order.
pub type ArtistSeries = (String, Vec<[f64; 2]>);

/// What one render cycle shows: the filtered rows, the engagement summary
/// when available, and the scatter series for the chosen axes.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub table: TrackTable,
    /// `None` when nothing is selected or nothing matched.
    pub summary: Option<Summary>,
    pub series: Vec<ArtistSeries>,
}

/// Filter the processed table with `query` and aggregate the result.
pub fn compute_view(
    processed: &TrackTable,
    query: &SearchQuery,
    x: NumericColumn,
    y: NumericColumn,
) -> DashboardView {
    let table = apply_search(processed, query);
    let summary = if query.is_empty() {
        None
    } else {
        summarize(&table)
    };
    let series = scatter_series(&table, x, y);
    log::debug!(
        "Query {:?} → {} of {} tracks",
        query,
        table.len(),
        processed.len()
    );
    DashboardView {
        table,
        summary,
        series,
    }
}

/// One series per artist, in order of first appearance. Rows lacking either
/// value are skipped.
pub fn scatter_series(
    table: &TrackTable,
    x: NumericColumn,
    y: NumericColumn,
) -> Vec<ArtistSeries> {
    let mut slot_of: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<ArtistSeries> = Vec::new();
    for row in table.iter() {
        let (Some(xv), Some(yv)) = (x.value(row), y.value(row)) else {
            continue;
        };
        match slot_of.get(row.artist.as_str()) {
            Some(&slot) => series[slot].1.push([xv, yv]),
            None => {
                slot_of.insert(row.artist.as_str(), series.len());
                series.push((row.artist.clone(), vec![[xv, yv]]));
            }
        }
    }
    series
}

// ---------------------------------------------------------------------------
// Search form choices
// ---------------------------------------------------------------------------

/// Track and album options offered for the pending artist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchChoices {
    /// Artist query these choices were built for.
    pub artist: Option<String>,
    pub tracks: Vec<String>,
    pub albums: Vec<String>,
}

impl SearchChoices {
    /// Distinct, sorted tracks and albums of the rows matching `artist`.
    pub fn for_artist(processed: &TrackTable, artist: Option<&str>) -> Self {
        let mut tracks = BTreeSet::new();
        let mut albums = BTreeSet::new();
        for row in processed.iter() {
            if artist.is_some_and(|q| !artist_matches(row, q)) {
                continue;
            }
            tracks.insert(row.track.as_str());
            albums.insert(row.album.as_str());
        }
        SearchChoices {
            artist: artist.map(str::to_string),
            tracks: tracks.into_iter().map(str::to_string).collect(),
            albums: albums.into_iter().map(str::to_string).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Source cache, owned for the lifetime of the app.
    pub cache: DataCache,

    /// Query applied to the current view.
    pub query: SearchQuery,

    /// Search form contents not yet submitted.
    pub pending: SearchQuery,

    /// Track/album options for `pending.artist` (None until first needed).
    pub search_choices: Option<SearchChoices>,

    /// Result of the last filter/aggregate cycle (None while no data).
    pub view: Option<DashboardView>,

    /// Scatter plot axes.
    pub scatter_x: NumericColumn,
    pub scatter_y: NumericColumn,

    /// Point colours per artist.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state around an already loaded cache.
    pub fn new(cache: DataCache, query: SearchQuery) -> Self {
        let mut state = Self {
            cache,
            pending: query.clone(),
            query,
            search_choices: None,
            view: None,
            scatter_x: NumericColumn::Danceability,
            scatter_y: NumericColumn::Stream,
            color_map: None,
            status_message: None,
        };
        state.data_changed();
        state
    }

    /// Re-run filter and aggregation for the current query.
    pub fn refresh(&mut self) {
        let (x, y) = (self.scatter_x, self.scatter_y);
        self.view = self
            .cache
            .snapshot()
            .map(|snap| compute_view(&snap.processed, &self.query, x, y));
    }

    /// Rebuild everything derived from the cached snapshot.
    fn data_changed(&mut self) {
        self.color_map = self
            .cache
            .snapshot()
            .map(|snap| ColorMap::new(snap.artists.iter()));
        self.search_choices = None;
        self.refresh();
    }

    /// Make `search_choices` match the pending artist, rebuilding only when
    /// the artist query changed.
    pub fn update_search_choices(&mut self) {
        let artist = self.pending.artist_query();
        if let Some(choices) = &self.search_choices {
            if choices.artist.as_deref() == artist {
                return;
            }
        }
        self.search_choices = self
            .cache
            .snapshot()
            .map(|snap| SearchChoices::for_artist(&snap.processed, artist));
    }

    /// Apply the search form.
    pub fn submit(&mut self) {
        self.query = self.pending.clone();
        self.refresh();
    }

    /// Reset both the form and the applied query.
    pub fn clear_search(&mut self) {
        self.pending = SearchQuery::default();
        self.submit();
    }

    /// Read the source again. A malformed file keeps the current data.
    pub fn reload(&mut self) {
        match self.cache.reload() {
            Ok(true) => self.status_message = None,
            Ok(false) => {
                log::error!("Source {} is gone", self.cache.source().display());
                self.status_message = Some(format!(
                    "Error: {} not found",
                    self.cache.source().display()
                ));
            }
            Err(e) => {
                log::error!("Failed to reload: {e}");
                self.status_message = Some(format!("Error: {e}"));
                return;
            }
        }
        self.data_changed();
    }

    /// Switch to another source file, keeping the current one on failure.
    pub fn open_file(&mut self, path: &Path) {
        match self.cache.open(path) {
            Ok(true) => {
                self.status_message = None;
                self.pending = SearchQuery::default();
                self.query = SearchQuery::default();
                self.data_changed();
            }
            Ok(false) => {
                self.status_message = Some(format!("Error: {} not found", path.display()));
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Set scatter axes, making sure x is a characteristic and y an
    /// engagement metric.
    pub fn set_scatter_axes(&mut self, x: NumericColumn, y: NumericColumn) {
        if !x.is_engagement() {
            self.scatter_x = x;
        }
        if y.is_engagement() {
            self.scatter_y = y;
        }
        if let Some(view) = &mut self.view {
            view.series = scatter_series(&view.table, self.scatter_x, self.scatter_y);
        }
    }
}
