use std::collections::HashSet;

use super::model::TrackTable;

/// Distinct `artist` values in order of first appearance.
///
/// Meant for the processed table, where collaborations have already been
/// merged into a single artist string per track.
pub fn artist_index(table: &TrackTable) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut artists = Vec::new();
    for row in table.iter() {
        if seen.insert(row.artist.as_str()) {
            artists.push(row.artist.clone());
        }
    }
    artists
}
