use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// TrackRow – one row of the source file
// ---------------------------------------------------------------------------

/// Columns every source file must provide (lower-case header names).
pub const REQUIRED_COLUMNS: [&str; 15] = [
    "uri",
    "artist",
    "track",
    "album",
    "stream",
    "views",
    "likes",
    "danceability",
    "energy",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "url_youtube",
];

/// A single (artist, track) entry.
///
/// Numeric fields are `None` when the source cell is empty. Characteristic
/// scores are nominally in `[0, 1]` but are never clamped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackRow {
    /// Stable track identifier, the grouping key.
    pub uri: String,
    /// Contributing artist(s); comma-joined after preprocessing.
    pub artist: String,
    pub track: String,
    pub album: String,

    pub stream: Option<f64>,
    pub views: Option<f64>,
    pub likes: Option<f64>,

    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub liveness: Option<f64>,
    pub valence: Option<f64>,

    pub url_youtube: Option<String>,
}

// ---------------------------------------------------------------------------
// NumericColumn – typed access to the numeric fields
// ---------------------------------------------------------------------------

/// The numeric columns of a [`TrackRow`], split into engagement metrics and
/// audio characteristic scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericColumn {
    Stream,
    Views,
    Likes,
    Danceability,
    Energy,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
}

impl NumericColumn {
    pub const ENGAGEMENT: [NumericColumn; 3] =
        [NumericColumn::Stream, NumericColumn::Views, NumericColumn::Likes];

    pub const CHARACTERISTICS: [NumericColumn; 7] = [
        NumericColumn::Danceability,
        NumericColumn::Energy,
        NumericColumn::Speechiness,
        NumericColumn::Acousticness,
        NumericColumn::Instrumentalness,
        NumericColumn::Liveness,
        NumericColumn::Valence,
    ];

    /// Column name as it appears in the (lower-cased) source header.
    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::Stream => "stream",
            NumericColumn::Views => "views",
            NumericColumn::Likes => "likes",
            NumericColumn::Danceability => "danceability",
            NumericColumn::Energy => "energy",
            NumericColumn::Speechiness => "speechiness",
            NumericColumn::Acousticness => "acousticness",
            NumericColumn::Instrumentalness => "instrumentalness",
            NumericColumn::Liveness => "liveness",
            NumericColumn::Valence => "valence",
        }
    }

    /// Human readable label for headers and axes.
    pub fn label(self) -> &'static str {
        match self {
            NumericColumn::Stream => "Stream",
            NumericColumn::Views => "Views",
            NumericColumn::Likes => "Likes",
            NumericColumn::Danceability => "Danceability",
            NumericColumn::Energy => "Energy",
            NumericColumn::Speechiness => "Speechiness",
            NumericColumn::Acousticness => "Acousticness",
            NumericColumn::Instrumentalness => "Instrumentalness",
            NumericColumn::Liveness => "Liveness",
            NumericColumn::Valence => "Valence",
        }
    }

    /// Resolve a column by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ENGAGEMENT
            .into_iter()
            .chain(Self::CHARACTERISTICS)
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn is_engagement(self) -> bool {
        Self::ENGAGEMENT.contains(&self)
    }

    /// Read this column from a row.
    pub fn value(self, row: &TrackRow) -> Option<f64> {
        match self {
            NumericColumn::Stream => row.stream,
            NumericColumn::Views => row.views,
            NumericColumn::Likes => row.likes,
            NumericColumn::Danceability => row.danceability,
            NumericColumn::Energy => row.energy,
            NumericColumn::Speechiness => row.speechiness,
            NumericColumn::Acousticness => row.acousticness,
            NumericColumn::Instrumentalness => row.instrumentalness,
            NumericColumn::Liveness => row.liveness,
            NumericColumn::Valence => row.valence,
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TrackTable – an ordered collection of rows
// ---------------------------------------------------------------------------

/// An ordered set of track rows. Every pipeline stage takes one table by
/// reference and returns a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackTable {
    pub rows: Vec<TrackRow>,
}

impl TrackTable {
    pub fn from_rows(rows: Vec<TrackRow>) -> Self {
        TrackTable { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackRow> {
        self.rows.iter()
    }
}
