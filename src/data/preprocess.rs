use std::collections::HashMap;

use super::model::{NumericColumn, TrackRow, TrackTable};

/// Separator placed between merged artist names.
pub const ARTIST_SEPARATOR: &str = ", ";

/// Collapse rows sharing a `uri` into one row per track.
///
/// Groups keep the order in which their `uri` first appears. The retained
/// row is the first raw row of its group, with `artist` replaced by every
/// member's artist joined with [`ARTIST_SEPARATOR`] in raw-table order.
/// Non-artist fields of later duplicates are dropped.
pub fn preprocess(raw: &TrackTable) -> TrackTable {
    let mut slot_of: HashMap<&str, usize> = HashMap::with_capacity(raw.len());
    let mut groups: Vec<(&TrackRow, Vec<&str>)> = Vec::with_capacity(raw.len());
    let mut conflicts = 0usize;

    for row in &raw.rows {
        match slot_of.get(row.uri.as_str()) {
            Some(&slot) => {
                let (first, artists) = &mut groups[slot];
                if !same_metrics(*first, row) {
                    conflicts += 1;
                    log::debug!(
                        "Duplicate uri {} ({}) disagrees with the first row; keeping the first",
                        row.uri,
                        row.artist
                    );
                }
                artists.push(row.artist.as_str());
            }
            None => {
                slot_of.insert(row.uri.as_str(), groups.len());
                groups.push((row, vec![row.artist.as_str()]));
            }
        }
    }

    if conflicts > 0 {
        log::warn!("{conflicts} duplicate rows carried metrics different from their first occurrence");
    }

    let rows = groups
        .into_iter()
        .map(|(first, artists)| {
            let mut merged = first.clone();
            merged.artist = artists.join(ARTIST_SEPARATOR);
            merged
        })
        .collect();

    TrackTable::from_rows(rows)
}

fn same_metrics(a: &TrackRow, b: &TrackRow) -> bool {
    NumericColumn::ENGAGEMENT
        .into_iter()
        .chain(NumericColumn::CHARACTERISTICS)
        .all(|c| c.value(a) == c.value(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::row;
    use std::collections::HashSet;

    fn table(rows: Vec<TrackRow>) -> TrackTable {
        TrackTable::from_rows(rows)
    }

    #[test]
    fn shared_uri_merges_artists_and_keeps_first_row() {
        let mut bob = row("u1", "Bob", 100.0);
        bob.track = "Bob's title".to_string();
        let raw = table(vec![row("u1", "Alice", 100.0), bob]);

        let out = preprocess(&raw);
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows[0].artist, "Alice, Bob");
        assert_eq!(out.rows[0].stream, Some(100.0));
        assert_eq!(out.rows[0].track, "track u1");
    }

    #[test]
    fn later_duplicate_metrics_are_discarded() {
        let raw = table(vec![row("u1", "Alice", 100.0), row("u1", "Bob", 999.0)]);
        let out = preprocess(&raw);
        assert_eq!(out.rows[0].stream, Some(100.0));
        assert_eq!(out.rows[0].artist, "Alice, Bob");
    }

    #[test]
    fn one_row_per_distinct_uri_in_first_appearance_order() {
        let raw = table(vec![
            row("u2", "Carol", 1.0),
            row("u1", "Alice", 2.0),
            row("u2", "Dave", 3.0),
            row("u3", "Eve", 4.0),
            row("u1", "Bob", 5.0),
            row("u2", "Frank", 6.0),
        ]);
        let distinct: HashSet<&str> = raw.iter().map(|r| r.uri.as_str()).collect();

        let out = preprocess(&raw);
        assert_eq!(out.len(), distinct.len());

        let uris: Vec<&str> = out.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(uris, ["u2", "u1", "u3"]);
        assert_eq!(out.rows[0].artist, "Carol, Dave, Frank");
        assert_eq!(out.rows[1].artist, "Alice, Bob");
        assert_eq!(out.rows[2].artist, "Eve");
    }

    #[test]
    fn singleton_groups_are_untouched() {
        let raw = table(vec![row("u1", "Alice", 1.0), row("u2", "Bob", 2.0)]);
        assert_eq!(preprocess(&raw), raw);
    }

    #[test]
    fn second_pass_changes_nothing() {
        let raw = table(vec![
            row("u1", "Alice", 1.0),
            row("u1", "Bob", 1.0),
            row("u2", "Carol", 2.0),
        ]);
        let once = preprocess(&raw);
        assert_eq!(preprocess(&once), once);
    }

    #[test]
    fn empty_table_stays_empty() {
        assert!(preprocess(&TrackTable::default()).is_empty());
    }

    #[test]
    fn input_is_not_modified() {
        let raw = table(vec![row("u1", "Alice", 1.0), row("u1", "Bob", 1.0)]);
        let before = raw.clone();
        let _ = preprocess(&raw);
        assert_eq!(raw, before);
    }
}
