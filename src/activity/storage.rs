/// JSON snapshot persistence for the activity registry
/// 
/// The whole registry lives in a single JSON document that is rewritten in full
/// on every committed mutation. Writes go through a temp file in the same
/// directory and are renamed into place, so readers of the file never see a
/// half-written snapshot.

use crate::activity::{error::StoreError, types::ActivityMap};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-backed snapshot store
/// 
/// Holds only the snapshot location; in-memory state is always passed in by
/// the registry, which calls `save` while holding its mutation lock.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    /// Snapshot file location (e.g., "activities.json")
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store for the given snapshot file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the snapshot
    /// 
    /// Returns `Ok(None)` when no snapshot exists yet.
    pub fn try_load(&self) -> Result<Option<ActivityMap>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(&self.path)?;
        let activities: ActivityMap = serde_json::from_slice(&bytes)?;
        Ok(Some(activities))
    }

    /// Load the registry, degrading to empty when the snapshot is missing or unreadable
    /// 
    /// Startup never fails on a bad snapshot: the registry starts empty and the
    /// condition is logged so an operator can repair the file.
    pub fn load(&self) -> ActivityMap {
        match self.try_load() {
            Ok(Some(activities)) => {
                tracing::info!("📥 Loaded {} activities from {}", activities.len(), self.path.display());
                activities
            }
            Ok(None) => {
                tracing::info!("📭 No snapshot at {}, starting with an empty registry", self.path.display());
                ActivityMap::new()
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️ Unreadable snapshot at {} ({}), starting with an empty registry",
                    self.path.display(),
                    e
                );
                ActivityMap::new()
            }
        }
    }

    /// Serialize the full registry and atomically replace the snapshot file
    pub fn save(&self, activities: &ActivityMap) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(activities)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&data)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!("💾 Saved {} activities to {}", activities.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::types::Activity;
    use tempfile::TempDir;

    fn sample() -> ActivityMap {
        let mut activities = ActivityMap::new();
        activities.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies and compete in chess tournaments".into(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
                max_participants: Some(12),
                participants: vec!["michael@mergington.edu".into(), "daniel@mergington.edu".into()],
            },
        );
        activities.insert(
            "Art Studio".to_string(),
            Activity {
                description: "Painting, drawing and sculpture – all levels".into(),
                schedule: "Wednesdays".into(),
                max_participants: None,
                participants: vec![],
            },
        );
        activities
    }

    #[test]
    fn missing_snapshot_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("activities.json"));
        assert!(store.try_load().unwrap().is_none());
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_snapshot_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("activities.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let store = SnapshotStore::new(&path);
        assert!(matches!(store.try_load(), Err(StoreError::Json(_))));
        assert!(store.load().is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("activities.json");
        std::fs::write(&path, b"[1, 2, 3]").unwrap();
        assert!(SnapshotStore::new(&path).load().is_empty());
    }

    #[test]
    fn save_then_load_preserves_registry() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("activities.json"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn resaving_a_loaded_snapshot_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("activities.json"));
        store.save(&sample()).unwrap();
        let first = std::fs::read_to_string(store.path()).unwrap();

        let loaded = store.load();
        store.save(&loaded).unwrap();
        let second = std::fs::read_to_string(store.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.load(), loaded);
    }

    #[test]
    fn save_keeps_non_ascii_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("activities.json"));
        store.save(&sample()).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("sculpture – all levels"));
        assert!(raw.contains("\n  \"Art Studio\": {"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("data/nested/activities.json"));
        store.save(&sample()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("activities.json"));
        store.save(&sample()).unwrap();
        store.save(&ActivityMap::new()).unwrap();
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[test]
    fn save_into_unwritable_location_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file, not a directory").unwrap();
        let store = SnapshotStore::new(blocker.join("activities.json"));
        assert!(matches!(store.save(&sample()), Err(StoreError::Io(_))));
    }
}
