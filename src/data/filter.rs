use super::model::{TrackRow, TrackTable};

// ---------------------------------------------------------------------------
// Artist filter
// ---------------------------------------------------------------------------

/// Case-sensitive, unanchored substring match on the artist field.
pub fn artist_matches(row: &TrackRow, query: &str) -> bool {
    row.artist.contains(query)
}

/// Rows whose artist contains `query`.
///
/// An absent or empty query returns a copy of the whole table. Zero matches
/// is a valid result.
pub fn filter_by_artist(table: &TrackTable, query: Option<&str>) -> TrackTable {
    match query.filter(|q| !q.is_empty()) {
        None => table.clone(),
        Some(q) => TrackTable::from_rows(
            table
                .iter()
                .filter(|row| artist_matches(row, q))
                .cloned()
                .collect(),
        ),
    }
}

// ---------------------------------------------------------------------------
// Search form query
// ---------------------------------------------------------------------------

/// The selections submitted from the search form.
///
/// `artist` is a substring query; `track` and `album` are exact selections
/// narrowing the artist result further. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub artist: Option<String>,
    pub track: Option<String>,
    pub album: Option<String>,
}

impl SearchQuery {
    /// Query selecting only an artist.
    pub fn artist(artist: impl Into<String>) -> Self {
        SearchQuery {
            artist: Some(artist.into()),
            ..Default::default()
        }
    }

    pub fn artist_query(&self) -> Option<&str> {
        non_empty(&self.artist)
    }

    /// Whether nothing at all is selected.
    pub fn is_empty(&self) -> bool {
        non_empty(&self.artist).is_none()
            && non_empty(&self.track).is_none()
            && non_empty(&self.album).is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Apply a full search query, returning a new table: the artist filter
/// first, then the exact track/album selections.
pub fn apply_search(table: &TrackTable, query: &SearchQuery) -> TrackTable {
    let by_artist = filter_by_artist(table, query.artist_query());
    let track = non_empty(&query.track);
    let album = non_empty(&query.album);
    if track.is_none() && album.is_none() {
        return by_artist;
    }
    TrackTable::from_rows(
        by_artist
            .rows
            .into_iter()
            .filter(|row| track.map_or(true, |t| row.track == t))
            .filter(|row| album.map_or(true, |a| row.album == a))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::row;

    fn processed() -> TrackTable {
        TrackTable::from_rows(vec![row("u1", "Alice, Bob", 100.0), row("u2", "Carol", 300.0)])
    }

    #[test]
    fn absent_or_empty_query_is_identity() {
        let t = processed();
        assert_eq!(filter_by_artist(&t, None), t);
        assert_eq!(filter_by_artist(&t, Some("")), t);
    }

    #[test]
    fn substring_anywhere_in_merged_artist() {
        let out = filter_by_artist(&processed(), Some("Bob"));
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows[0].artist, "Alice, Bob");

        let out = filter_by_artist(&processed(), Some("ar"));
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows[0].artist, "Carol");
    }

    #[test]
    fn no_match_is_an_empty_table() {
        assert!(filter_by_artist(&processed(), Some("Dave")).is_empty());
    }

    #[test]
    fn match_is_case_sensitive() {
        let t = TrackTable::from_rows(vec![row("u1", "BTS", 1.0)]);
        assert!(filter_by_artist(&t, Some("bts")).is_empty());
        assert_eq!(filter_by_artist(&t, Some("BTS")).len(), 1);
    }

    #[test]
    fn result_is_exactly_the_matching_rows() {
        let t = TrackTable::from_rows(vec![
            row("u1", "Alice", 1.0),
            row("u2", "Alicia Keys", 2.0),
            row("u3", "Robin", 3.0),
            row("u4", "Bob, Alice", 4.0),
        ]);
        // Some rows, every row (empty and non-empty query), no rows.
        for (q, count) in [("Ali", 3), ("", 4), ("i", 4), ("Zed", 0)] {
            let out = filter_by_artist(&t, Some(q));
            assert!(out.iter().all(|r| r.artist.contains(q)), "query {q:?}");
            let expected: Vec<&TrackRow> = t.iter().filter(|r| r.artist.contains(q)).collect();
            assert_eq!(out.rows.iter().collect::<Vec<_>>(), expected, "query {q:?}");
            assert_eq!(out.len(), count, "query {q:?}");
        }
    }

    #[test]
    fn input_table_is_untouched() {
        let t = processed();
        let before = t.clone();
        let _ = filter_by_artist(&t, Some("Carol"));
        assert_eq!(t, before);
    }

    #[test]
    fn search_query_narrows_by_track_and_album() {
        let mut other = row("u3", "Alice", 5.0);
        other.album = "Live".to_string();
        let mut t = processed();
        t.rows.push(other);

        let mut q = SearchQuery::artist("Alice");
        assert_eq!(apply_search(&t, &q).len(), 2);

        q.album = Some("Live".to_string());
        let out = apply_search(&t, &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows[0].uri, "u3");

        q.album = None;
        q.track = Some("track u1".to_string());
        let out = apply_search(&t, &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows[0].uri, "u1");

        let by_track = SearchQuery {
            track: Some("track u2".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_search(&t, &by_track).rows[0].artist, "Carol");
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let q = SearchQuery {
            artist: Some(String::new()),
            track: Some(String::new()),
            album: None,
        };
        assert!(q.is_empty());
        assert_eq!(apply_search(&processed(), &q), processed());
    }
}
