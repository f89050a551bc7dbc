use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data::artists::artist_index;
use crate::data::loader::{load_file, LoadError};
use crate::data::model::TrackTable;
use crate::data::preprocess::preprocess;

// ---------------------------------------------------------------------------
// Snapshot – everything derived from one read of the source
// ---------------------------------------------------------------------------

/// Read-only products of one load. Cloning shares the underlying tables.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub raw: Arc<TrackTable>,
    pub processed: Arc<TrackTable>,
    pub artists: Arc<Vec<String>>,
}

impl Snapshot {
    /// Run preprocessing and indexing over a freshly loaded raw table.
    pub fn from_raw(raw: TrackTable) -> Self {
        let processed = preprocess(&raw);
        let artists = artist_index(&processed);
        log::info!(
            "Loaded {} rows → {} tracks by {} artists",
            raw.len(),
            processed.len(),
            artists.len()
        );
        Snapshot {
            raw: Arc::new(raw),
            processed: Arc::new(processed),
            artists: Arc::new(artists),
        }
    }
}

fn build_snapshot(path: &Path) -> Result<Option<Snapshot>, LoadError> {
    Ok(load_file(path)?.map(Snapshot::from_raw))
}

// ---------------------------------------------------------------------------
// DataCache
// ---------------------------------------------------------------------------

/// Process-lifetime cache of the loaded and preprocessed source.
///
/// Owned by the entry point and handed to the app. The cached snapshot only
/// goes away through [`DataCache::invalidate`], a reload of a vanished
/// source, or a source switch.
#[derive(Debug)]
pub struct DataCache {
    source: PathBuf,
    snapshot: Option<Snapshot>,
}

impl DataCache {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        DataCache {
            source: source.into(),
            snapshot: None,
        }
    }

    /// Path currently used as the data source.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Load the source unless already cached. `Ok(None)` means the file is
    /// missing.
    pub fn load(&mut self) -> Result<Option<&Snapshot>, LoadError> {
        if self.snapshot.is_none() {
            self.snapshot = build_snapshot(&self.source)?;
        }
        Ok(self.snapshot.as_ref())
    }

    /// The cached snapshot, without touching the file system.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Drop the cached snapshot; the next [`DataCache::load`] re-reads.
    pub fn invalidate(&mut self) {
        if self.snapshot.take().is_some() {
            log::warn!("Cache cleared for {}", self.source.display());
        }
    }

    /// Re-read the current source.
    ///
    /// On a read error the cached snapshot is kept. A source that has
    /// disappeared clears the cache. Returns whether data is loaded.
    pub fn reload(&mut self) -> Result<bool, LoadError> {
        match build_snapshot(&self.source)? {
            Some(snapshot) => {
                self.snapshot = Some(snapshot);
                Ok(true)
            }
            None => {
                self.invalidate();
                Ok(false)
            }
        }
    }

    /// Switch to another source file.
    ///
    /// The new file is read before anything is replaced: on error or absence
    /// the current source and snapshot stay as they were. Returns whether the
    /// switch happened.
    pub fn open(&mut self, path: &Path) -> Result<bool, LoadError> {
        match build_snapshot(path)? {
            Some(snapshot) => {
                self.source = path.to_path_buf();
                self.snapshot = Some(snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CSV: &str = ",Artist,Track,Album,Uri,Stream,Views,Likes,Danceability,Energy,Speechiness,Acousticness,Instrumentalness,Liveness,Valence,Url_youtube
0,Alice,Song,LP,u1,100,10,1,0.1,0.2,0.3,0.4,0.5,0.6,0.7,
1,Bob,Song,LP,u1,100,10,1,0.1,0.2,0.3,0.4,0.5,0.6,0.7,
2,Carol,Other,EP,u2,300,30,3,0.1,0.2,0.3,0.4,0.5,0.6,0.7,https://youtube.com/c
";

    fn write_source(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, CSV).unwrap();
        path
    }

    #[test]
    fn load_builds_processed_table_and_artist_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = DataCache::new(write_source(dir.path(), "data.csv"));

        let snap = cache.load().unwrap().unwrap();
        assert_eq!(snap.raw.len(), 3);
        assert_eq!(snap.processed.len(), 2);
        assert_eq!(*snap.artists, vec!["Alice, Bob".to_string(), "Carol".to_string()]);
    }

    #[test]
    fn load_is_memoised_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(dir.path(), "data.csv");
        let mut cache = DataCache::new(&path);
        assert!(cache.load().unwrap().is_some());

        fs::remove_file(&path).unwrap();
        assert!(cache.load().unwrap().is_some());

        cache.invalidate();
        assert!(cache.snapshot().is_none());
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn missing_source_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = DataCache::new(dir.path().join("nope.csv"));
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn reload_picks_up_changes_and_keeps_data_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(dir.path(), "data.csv");
        let mut cache = DataCache::new(&path);
        cache.load().unwrap();

        let mut edited = CSV.to_string();
        edited.push_str("3,Dave,New,EP,u3,5,5,5,0.1,0.2,0.3,0.4,0.5,0.6,0.7,\n");
        fs::write(&path, edited).unwrap();
        assert!(cache.reload().unwrap());
        assert_eq!(cache.snapshot().unwrap().processed.len(), 3);

        fs::write(&path, ",Artist\n0,Alice\n").unwrap();
        assert!(cache.reload().is_err());
        assert_eq!(cache.snapshot().unwrap().processed.len(), 3);

        fs::remove_file(&path).unwrap();
        assert!(!cache.reload().unwrap());
        assert!(cache.snapshot().is_none());
    }

    #[test]
    fn open_keeps_current_data_when_new_source_is_missing_or_broken() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(dir.path(), "data.csv");
        let mut cache = DataCache::new(&path);
        cache.load().unwrap();

        assert!(!cache.open(&dir.path().join("missing.csv")).unwrap());
        assert_eq!(cache.source(), path.as_path());

        let broken = dir.path().join("broken.csv");
        fs::write(&broken, ",Artist\n0,Alice\n").unwrap();
        assert!(cache.open(&broken).is_err());
        assert_eq!(cache.source(), path.as_path());
        assert!(cache.snapshot().is_some());
    }

    #[test]
    fn open_switches_source() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_source(dir.path(), "a.csv");
        let second = write_source(dir.path(), "b.csv");
        let mut cache = DataCache::new(&first);
        cache.load().unwrap();

        assert!(cache.open(&second).unwrap());
        assert_eq!(cache.source(), second.as_path());
        assert_eq!(cache.snapshot().unwrap().processed.len(), 2);
    }
}
